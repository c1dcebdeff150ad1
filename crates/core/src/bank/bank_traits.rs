use async_trait::async_trait;
use rust_decimal::Decimal;

use super::bank_model::Bank;
use crate::errors::Result;

/// Remote bank account operations. Every call returns the full updated
/// snapshot.
#[async_trait]
pub trait BankAccountPort: Send + Sync {
    async fn get_bank_account(&self) -> Result<Bank>;

    async fn add_balance(&self, amount: Decimal, description: &str) -> Result<Bank>;

    /// The backend is responsible for rejecting overdrafts.
    async fn subtract_balance(&self, amount: Decimal, description: &str) -> Result<Bank>;

    async fn update_currency(&self, currency: &str) -> Result<Bank>;
}
