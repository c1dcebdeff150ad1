//! Incomes module - income entity, creation input, and port.

mod incomes_model;
mod incomes_traits;

pub use incomes_model::{Income, IncomeType, NewIncome};
pub use incomes_traits::IncomePort;
