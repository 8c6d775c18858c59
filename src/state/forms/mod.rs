//! Form domain layer
//!
//! Type-safe coupon form handling for the create/edit view.

mod field;
mod form_state;

pub use field::{CouponField, DecimalInput};
pub use form_state::{CouponFormState, FormMode};
