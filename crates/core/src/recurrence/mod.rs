//! Recurrence module - payment frequency and next-payment-date computation.

mod frequency;
mod next_payment;

#[cfg(test)]
mod recurrence_tests;

pub use frequency::Frequency;
pub use next_payment::{ensure_recurrence_is_consistent, next_payment_date};
