//! Application state module

mod clock;
mod coupon;
mod forms;
mod reactive;

pub use clock::*;
pub use coupon::*;
pub use forms::*;
pub use reactive::*;
