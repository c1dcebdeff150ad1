//! Bank module - the account balance snapshot and its port.

mod bank_model;
mod bank_traits;

pub use bank_model::Bank;
pub use bank_traits::BankAccountPort;
