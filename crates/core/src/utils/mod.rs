//! Shared helpers: time arithmetic, money formatting, and input validation.

pub mod money_format;
pub mod time_utils;
pub mod validation;


pub use money_format::{currency_symbol, format_currency, format_signed_currency};
pub use time_utils::{is_same_utc_month, start_of_utc_day};
pub use validation::{normalize_email, require_non_blank, require_positive_amount};
