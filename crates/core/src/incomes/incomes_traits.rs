use async_trait::async_trait;

use super::incomes_model::{Income, NewIncome};
use crate::errors::Result;

/// Remote income operations.
#[async_trait]
pub trait IncomePort: Send + Sync {
    /// Returns the full current list.
    async fn get_incomes(&self) -> Result<Vec<Income>>;

    /// Returns the created income with server-assigned id and timestamps.
    async fn create_income(&self, new_income: NewIncome) -> Result<Income>;

    async fn delete_income(&self, income_id: &str) -> Result<()>;
}
