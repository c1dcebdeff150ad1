//! French-locale currency formatting (`1 234,56 €`).
//!
//! Only display formatting lives here; no currency conversion is performed.

use rust_decimal::{Decimal, RoundingStrategy};

/// Narrow no-break space used as the thousands separator.
const GROUP_SEPARATOR: char = '\u{202F}';

/// No-break space between the amount and the currency symbol.
const SYMBOL_SEPARATOR: char = '\u{00A0}';

/// Returns the display symbol for an ISO 4217 code, or the code itself.
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "EUR" => "€",
        "USD" => "$US",
        "GBP" => "£GB",
        "CHF" => "CHF",
        "JPY" => "JPY",
        other => other,
    }
}

fn fraction_digits(currency: &str) -> u32 {
    match currency {
        "JPY" => 0,
        _ => 2,
    }
}

fn group_thousands(integer_part: &str) -> String {
    let len = integer_part.len();
    let mut grouped = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8());
    for (index, digit) in integer_part.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats an amount in the given currency, e.g. `-1 234,50 €`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let digits = fraction_digits(currency);
    let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.*}", digits as usize, rounded.abs());
    let (integer_part, fraction_part) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut formatted = String::new();
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer_part));
    if let Some(fraction) = fraction_part {
        formatted.push(',');
        formatted.push_str(fraction);
    }
    formatted.push(SYMBOL_SEPARATOR);
    formatted.push_str(currency_symbol(currency));
    formatted
}

/// Formats the absolute amount with an explicit `+` or `-` prefix.
pub fn format_signed_currency(amount: Decimal, currency: &str, positive: bool) -> String {
    let sign = if positive { '+' } else { '-' };
    format!("{}{}", sign, format_currency(amount.abs(), currency))
}
