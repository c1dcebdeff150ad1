//! Walletwise Core - entities, ports, and use cases.
//!
//! This crate contains the business logic of the Walletwise client: the
//! session lifecycle and the finance orchestration. It is transport- and
//! storage-agnostic and defines the port traits that the `api` and
//! `storage` crates implement.

pub mod auth;
pub mod bank;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod finance;
pub mod incomes;
pub mod recurrence;
pub mod storage;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
