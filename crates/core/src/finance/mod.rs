//! Finance module - transaction orchestration use cases.

mod finance_model;
mod finance_service;
mod finance_traits;


pub use finance_model::{CreateExpenseCommand, CreateIncomeCommand};
pub use finance_service::FinanceUseCases;
pub use finance_traits::FinanceUseCasePort;
