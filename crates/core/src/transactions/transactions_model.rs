//! Transaction projection models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bank::Bank;
use crate::constants::DEFAULT_CURRENCY;
use crate::expenses::{Expense, ExpenseCategory};
use crate::incomes::{Income, IncomeType};
use crate::utils::format_signed_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// Category of the projected entity, typed by its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TransactionCategory {
    Income(IncomeType),
    Expense(ExpenseCategory),
}

impl TransactionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCategory::Income(income_type) => income_type.as_str(),
            TransactionCategory::Expense(category) => category.as_str(),
        }
    }
}

/// Unified, read-only view of an income or an expense.
///
/// `date` is the `created_at` of the source entity. Transactions are built
/// on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: TransactionCategory,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn from_income(income: &Income) -> Self {
        Self {
            id: income.id.clone(),
            name: income.name.clone(),
            amount: income.amount,
            transaction_type: TransactionType::Income,
            category: TransactionCategory::Income(income.income_type),
            date: income.created_at,
        }
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            name: expense.name.clone(),
            amount: expense.amount,
            transaction_type: TransactionType::Expense,
            category: TransactionCategory::Expense(expense.category),
            date: expense.created_at,
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Absolute amount prefixed with `+` for incomes and `-` for expenses.
    pub fn format_amount(&self) -> String {
        format_signed_currency(self.amount, DEFAULT_CURRENCY, self.is_income())
    }
}

/// Income and expense totals for one calendar month. Both are >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthlyStats {
    pub incomes: Decimal,
    pub expenses: Decimal,
}

impl MonthlyStats {
    pub fn net(&self) -> Decimal {
        self.incomes - self.expenses
    }
}

/// The bank snapshot and recent transactions, loaded together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceOverview {
    pub bank: Bank,
    pub transactions: Vec<Transaction>,
}
