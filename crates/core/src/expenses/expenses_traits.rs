use async_trait::async_trait;

use super::expenses_model::{Expense, NewExpense};
use crate::errors::Result;

/// Remote expense operations.
#[async_trait]
pub trait ExpensePort: Send + Sync {
    async fn get_expenses(&self) -> Result<Vec<Expense>>;

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;

    async fn delete_expense(&self, expense_id: &str) -> Result<()>;
}
