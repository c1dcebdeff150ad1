//! Walletwise API - HTTP adapters for the core outbound ports.
//!
//! Each adapter wraps a shared [`ApiClient`] and maps backend payloads into
//! core entities. Amount strings, enum values, and timestamps are checked at
//! this boundary.

pub mod auth;
pub mod bank;
pub mod client;
mod dto;
pub mod expenses;
pub mod incomes;

#[cfg(test)]
mod test_support;

pub use auth::AuthApi;
pub use bank::BankApi;
pub use client::{ApiClient, ApiClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};
pub use expenses::ExpenseApi;
pub use incomes::IncomeApi;
