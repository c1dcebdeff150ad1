//! Expenses module - expense entity, creation input, and port.

mod expenses_model;
mod expenses_traits;

pub use expenses_model::{Expense, ExpenseCategory, NewExpense};
pub use expenses_traits::ExpensePort;
