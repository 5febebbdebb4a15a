//! Common types used across the application.

pub mod code;
pub mod money;

pub use code::{CurrencyCode, InvalidCurrencyCode, MAX_CODE_LEN};
pub use money::Money;
