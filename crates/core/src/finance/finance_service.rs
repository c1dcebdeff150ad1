use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::finance_model::{CreateExpenseCommand, CreateIncomeCommand};
use super::finance_traits::FinanceUseCasePort;
use crate::bank::{Bank, BankAccountPort};
use crate::constants::MONTHLY_STATS_SAMPLE_SIZE;
use crate::errors::Result;
use crate::expenses::{Expense, ExpensePort, NewExpense};
use crate::incomes::{Income, IncomePort, NewIncome};
use crate::recurrence::{ensure_recurrence_is_consistent, next_payment_date, Frequency};
use crate::transactions::{
    merge_recent_transactions, monthly_stats, FinanceOverview, MonthlyStats, Transaction,
};
use crate::utils::{require_non_blank, require_positive_amount, start_of_utc_day};

/// Finance use cases.
///
/// Stateless orchestration over the bank, income, and expense ports.
pub struct FinanceUseCases {
    bank_port: Arc<dyn BankAccountPort>,
    income_port: Arc<dyn IncomePort>,
    expense_port: Arc<dyn ExpensePort>,
    clock: fn() -> DateTime<Utc>,
}

impl FinanceUseCases {
    pub fn new(
        bank_port: Arc<dyn BankAccountPort>,
        income_port: Arc<dyn IncomePort>,
        expense_port: Arc<dyn ExpensePort>,
    ) -> Self {
        Self {
            bank_port,
            income_port,
            expense_port,
            clock: Utc::now,
        }
    }

    /// Replaces the source of "now" used for payment dates and monthly stats.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Resolves the next payment date of a creation command.
    ///
    /// A caller-supplied date is kept but normalized to midnight UTC; a
    /// recurring command without one gets it computed from now.
    fn resolve_next_payment_date(
        &self,
        frequency: Frequency,
        is_recurring: bool,
        requested: Option<DateTime<Utc>>,
    ) -> Result<Option<DateTime<Utc>>> {
        ensure_recurrence_is_consistent(frequency, is_recurring)?;
        match requested {
            _ if !is_recurring => Ok(None),
            Some(date) => Ok(Some(start_of_utc_day(date))),
            None => next_payment_date(frequency, is_recurring, (self.clock)()),
        }
    }

    fn prepare_income(&self, command: CreateIncomeCommand) -> Result<NewIncome> {
        let amount = require_positive_amount(command.amount)?;
        let name = require_non_blank(&command.name, "Name is required")?.to_string();
        let next_payment_date = self.resolve_next_payment_date(
            command.frequency,
            command.is_recurring,
            command.next_payment_date,
        )?;

        Ok(NewIncome {
            name,
            income_type: command.income_type,
            amount,
            frequency: command.frequency,
            is_recurring: command.is_recurring,
            next_payment_date,
            description: normalize_description(command.description),
        })
    }

    fn prepare_expense(&self, command: CreateExpenseCommand) -> Result<NewExpense> {
        let amount = require_positive_amount(command.amount)?;
        let name = require_non_blank(&command.name, "Name is required")?.to_string();
        let next_payment_date = self.resolve_next_payment_date(
            command.frequency,
            command.is_recurring,
            command.next_payment_date,
        )?;

        Ok(NewExpense {
            name,
            amount,
            category: command.category,
            description: normalize_description(command.description),
            frequency: command.frequency,
            is_recurring: command.is_recurring,
            next_payment_date,
        })
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[async_trait]
impl FinanceUseCasePort for FinanceUseCases {
    async fn get_bank_account(&self) -> Result<Bank> {
        self.bank_port.get_bank_account().await
    }

    async fn add_balance_manually(&self, amount: Decimal, description: &str) -> Result<Bank> {
        let amount = require_positive_amount(amount)?;
        debug!("Adding {} to balance", amount);
        self.bank_port.add_balance(amount, description).await
    }

    async fn subtract_balance_manually(
        &self,
        amount: Decimal,
        description: &str,
    ) -> Result<Bank> {
        let amount = require_positive_amount(amount)?;
        debug!("Subtracting {} from balance", amount);
        self.bank_port.subtract_balance(amount, description).await
    }

    async fn update_currency(&self, currency: &str) -> Result<Bank> {
        self.bank_port.update_currency(currency).await
    }

    async fn get_recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>> {
        let (incomes, expenses) = futures::try_join!(
            self.income_port.get_incomes(),
            self.expense_port.get_expenses()
        )?;
        debug!(
            "Merging {} incomes and {} expenses (limit {})",
            incomes.len(),
            expenses.len(),
            limit
        );
        Ok(merge_recent_transactions(&incomes, &expenses, limit))
    }

    async fn get_incomes(&self) -> Result<Vec<Income>> {
        self.income_port.get_incomes().await
    }

    async fn get_expenses(&self) -> Result<Vec<Expense>> {
        self.expense_port.get_expenses().await
    }

    async fn create_income(&self, command: CreateIncomeCommand) -> Result<Income> {
        let new_income = self.prepare_income(command)?;
        debug!("Creating income '{}'", new_income.name);
        self.income_port.create_income(new_income).await
    }

    async fn create_expense(&self, command: CreateExpenseCommand) -> Result<Expense> {
        let new_expense = self.prepare_expense(command)?;
        debug!("Creating expense '{}'", new_expense.name);
        self.expense_port.create_expense(new_expense).await
    }

    async fn delete_income(&self, income_id: &str) -> Result<()> {
        self.income_port.delete_income(income_id).await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        self.expense_port.delete_expense(expense_id).await
    }

    async fn get_monthly_stats(&self) -> Result<MonthlyStats> {
        let transactions = self
            .get_recent_transactions(MONTHLY_STATS_SAMPLE_SIZE)
            .await?;
        monthly_stats(&transactions, (self.clock)())
    }

    async fn load_overview(&self, limit: usize) -> Result<FinanceOverview> {
        let (bank, transactions) = futures::try_join!(
            self.get_bank_account(),
            self.get_recent_transactions(limit)
        )?;
        Ok(FinanceOverview { bank, transactions })
    }
}
