use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::AMOUNT_DECIMAL_PRECISION;
use crate::errors::{invalid_input, Result};

/// Lowercases and trims an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Rounds an amount to cent precision and rejects anything that is not
/// strictly positive afterwards.
pub fn require_positive_amount(amount: Decimal) -> Result<Decimal> {
    let rounded = amount.round_dp_with_strategy(
        AMOUNT_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    if rounded <= Decimal::ZERO {
        return Err(invalid_input("Amount must be positive"));
    }
    Ok(rounded)
}

/// Trims `value` and fails with `message` when nothing is left.
pub fn require_non_blank<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid_input(message));
    }
    Ok(trimmed)
}
