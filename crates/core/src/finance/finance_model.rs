//! Caller-facing inputs of the finance use cases.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseCategory;
use crate::incomes::IncomeType;
use crate::recurrence::Frequency;

/// Raw request to record an income. Validated by the use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncomeCommand {
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub is_recurring: bool,
    /// When absent on a recurring command, it is computed from today.
    pub next_payment_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

/// Raw request to record an expense. Validated by the use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseCommand {
    pub name: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub is_recurring: bool,
    pub next_payment_date: Option<DateTime<Utc>>,
}
