//! Coupon entity and its wire encoding

use crate::error::{CouponError, CouponResult};
use crate::state::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A discount coupon as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponData {
    /// Empty until the coupon has been persisted
    pub id: String,
    pub title: String,
    pub code: String,
    /// Discount percentage, expected 0-100 but not enforced
    pub percent: f64,
    /// Expiry in seconds since the Unix epoch
    pub due_date: i64,
    /// Encoded as 0/1 on the wire
    #[serde(with = "enabled_flag")]
    pub is_enabled: bool,
    /// Remaining quantity
    pub num: f64,
}

impl CouponData {
    /// Blank coupon expiring at the clock's current second, enabled by default
    pub fn initial(clock: &dyn Clock) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            code: String::new(),
            percent: 0.0,
            due_date: clock.now_unix_seconds(),
            is_enabled: true,
            num: 0.0,
        }
    }

    pub fn from_json(json: &str) -> CouponResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> CouponResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a coupon from a JSON file
    pub fn from_file(path: &Path) -> CouponResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CouponError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The activation flag as the backend's integer encoding
    pub fn enabled_flag(&self) -> u8 {
        u8::from(self.is_enabled)
    }

    /// Expiry as a UTC timestamp, `None` when out of chrono's range
    pub fn due_date_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.due_date, 0)
    }

    /// Whether the coupon has been persisted (has an id)
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Serde adapter mapping `bool` to the integers 0 and 1
mod enabled_flag {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match i64::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::invalid_value(
                Unexpected::Signed(other),
                &"0 or 1",
            )),
        }
    }
}
