//! Common types used across the application.

pub mod money;
pub mod number;


pub use money::{DEFAULT_CURRENCY_LABEL, Money};
pub use number::{format_amount, format_days, format_multiple, format_percent, round_whole};
