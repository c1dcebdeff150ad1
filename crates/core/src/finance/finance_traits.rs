use async_trait::async_trait;
use rust_decimal::Decimal;

use super::finance_model::{CreateExpenseCommand, CreateIncomeCommand};
use crate::bank::Bank;
use crate::errors::Result;
use crate::expenses::Expense;
use crate::incomes::Income;
use crate::transactions::{FinanceOverview, MonthlyStats, Transaction};

/// Trait defining the finance operations exposed to the presentation layer.
///
/// Nothing is cached: every read goes to the outbound ports.
#[async_trait]
pub trait FinanceUseCasePort: Send + Sync {
    async fn get_bank_account(&self) -> Result<Bank>;

    /// Rejects non-positive amounts before calling the backend.
    async fn add_balance_manually(&self, amount: Decimal, description: &str) -> Result<Bank>;

    /// Rejects non-positive amounts. Solvency is checked by the backend.
    async fn subtract_balance_manually(&self, amount: Decimal, description: &str)
        -> Result<Bank>;

    async fn update_currency(&self, currency: &str) -> Result<Bank>;

    /// Incomes and expenses merged newest first, truncated to `limit`.
    async fn get_recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>>;

    async fn get_incomes(&self) -> Result<Vec<Income>>;

    async fn get_expenses(&self) -> Result<Vec<Expense>>;

    async fn create_income(&self, command: CreateIncomeCommand) -> Result<Income>;

    async fn create_expense(&self, command: CreateExpenseCommand) -> Result<Expense>;

    async fn delete_income(&self, income_id: &str) -> Result<()>;

    async fn delete_expense(&self, expense_id: &str) -> Result<()>;

    /// Totals for the current UTC calendar month.
    async fn get_monthly_stats(&self) -> Result<MonthlyStats>;

    /// Bank snapshot and recent transactions, fetched concurrently.
    async fn load_overview(&self, limit: usize) -> Result<FinanceOverview>;
}
