//! Income domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_CURRENCY;
use crate::recurrence::Frequency;
use crate::utils::format_currency;

/// Source of an income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    Salary,
    Freelance,
    Investment,
    Other,
}

impl IncomeType {
    pub const ALL: [IncomeType; 4] = [
        IncomeType::Salary,
        IncomeType::Freelance,
        IncomeType::Investment,
        IncomeType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeType::Salary => "salary",
            IncomeType::Freelance => "freelance",
            IncomeType::Investment => "investment",
            IncomeType::Other => "other",
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        IncomeType::ALL
            .into_iter()
            .find(|income_type| income_type.as_str() == s)
            .ok_or_else(|| format!("Unknown income type: {}", s))
    }
}

/// An income as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub is_recurring: bool,
    pub next_payment_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_archived: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Income {
    pub fn format_amount(&self) -> String {
        format_currency(self.amount, DEFAULT_CURRENCY)
    }
}

/// Validated input handed to [`IncomePort::create_income`](super::IncomePort).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub is_recurring: bool,
    /// Midnight UTC when present.
    pub next_payment_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}
