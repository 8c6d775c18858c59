//! Error types for coupon decoding

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning external input into a [`CouponData`](crate::state::CouponData)
#[derive(Debug, Error)]
pub enum CouponError {
    /// The coupon JSON could not be decoded
    #[error("invalid coupon JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The coupon file could not be read
    #[error("failed to read coupon file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type CouponResult<T> = Result<T, CouponError>;
