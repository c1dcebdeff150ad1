//! Wire representations of backend payloads.
//!
//! Amounts travel as decimal strings on responses and as JSON numbers on
//! requests. Enum fields deserialize through the core enums, so unknown
//! values are rejected here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use walletwise_core::auth::{AuthResult, AuthTokens, User};
use walletwise_core::bank::Bank;
use walletwise_core::expenses::{Expense, ExpenseCategory, NewExpense};
use walletwise_core::incomes::{Income, IncomeType, NewIncome};
use walletwise_core::recurrence::Frequency;

/// Accepts `"12.50"` as well as `12.5`.
fn decimal_from_wire<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireAmount {
        Text(String),
        Number(serde_json::Number),
    }

    let text = match WireAmount::deserialize(deserializer)? {
        WireAmount::Text(text) => text,
        WireAmount::Number(number) => number.to_string(),
    };
    Decimal::from_str(text.trim())
        .or_else(|_| Decimal::from_scientific(text.trim()))
        .map_err(|e| serde::de::Error::custom(format!("invalid amount '{}': {}", text, e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl WireUser {
    /// Auth responses carry no creation time; `received_at` stands in.
    pub fn into_user(self, received_at: DateTime<Utc>) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at.unwrap_or(received_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireAuthResponse {
    pub user: WireUser,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl WireAuthResponse {
    /// Missing tokens become empty strings; the use cases reject those.
    pub fn into_auth_result(self, received_at: DateTime<Utc>) -> AuthResult {
        AuthResult {
            user: self.user.into_user(received_at),
            tokens: AuthTokens::new(
                self.access_token.unwrap_or_default(),
                self.refresh_token.unwrap_or_default(),
            ),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bank
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct BalanceChangeRequest<'a> {
    pub amount: Decimal,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CurrencyRequest<'a> {
    pub currency: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireBank {
    pub id: String,
    pub user_id: String,
    #[serde(deserialize_with = "decimal_from_wire")]
    pub balance: Decimal,
    pub currency: String,
    pub last_updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<WireBank> for Bank {
    fn from(wire: WireBank) -> Self {
        Bank {
            id: wire.id,
            user_id: wire.user_id,
            balance: wire.balance,
            currency: wire.currency,
            last_updated_at: wire.last_updated_at,
            created_at: wire.created_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Incomes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateIncomeRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub is_recurring: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<DateTime<Utc>>,
}

impl From<NewIncome> for CreateIncomeRequest {
    fn from(income: NewIncome) -> Self {
        Self {
            name: income.name,
            income_type: income.income_type,
            amount: income.amount,
            frequency: income.frequency,
            is_recurring: income.is_recurring,
            description: income.description.unwrap_or_default(),
            next_payment_date: income.next_payment_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireIncome {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    #[serde(deserialize_with = "decimal_from_wire")]
    pub amount: Decimal,
    pub frequency: Frequency,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

impl From<WireIncome> for Income {
    fn from(wire: WireIncome) -> Self {
        Income {
            id: wire.id,
            user_id: wire.user_id,
            name: wire.name,
            income_type: wire.income_type,
            amount: wire.amount,
            frequency: wire.frequency,
            is_recurring: wire.is_recurring,
            next_payment_date: wire.next_payment_date,
            is_active: wire.is_active,
            is_archived: wire.is_archived,
            description: wire.description.unwrap_or_default(),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            archived_at: wire.archived_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Expenses
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateExpenseRequest {
    pub name: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: String,
    pub frequency: Frequency,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<DateTime<Utc>>,
}

impl From<NewExpense> for CreateExpenseRequest {
    fn from(expense: NewExpense) -> Self {
        Self {
            name: expense.name,
            amount: expense.amount,
            category: expense.category,
            description: expense.description.unwrap_or_default(),
            frequency: expense.frequency,
            is_recurring: expense.is_recurring,
            next_payment_date: expense.next_payment_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireExpense {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "decimal_from_wire")]
    pub amount: Decimal,
    pub frequency: Frequency,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub split_percentages: Option<serde_json::Value>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

impl From<WireExpense> for Expense {
    fn from(wire: WireExpense) -> Self {
        Expense {
            id: wire.id,
            user_id: wire.user_id,
            name: wire.name,
            icon: wire.icon,
            category: wire.category,
            description: wire.description.unwrap_or_default(),
            amount: wire.amount,
            frequency: wire.frequency,
            is_recurring: wire.is_recurring,
            next_payment_date: wire.next_payment_date,
            split_percentages: wire.split_percentages,
            is_active: wire.is_active,
            is_archived: wire.is_archived,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            archived_at: wire.archived_at,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn income_json(amount: serde_json::Value, income_type: &str) -> serde_json::Value {
        json!({
            "id": "inc-1",
            "userId": "user-1",
            "name": "Salary",
            "type": income_type,
            "amount": amount,
            "frequency": "monthly",
            "nextPaymentDate": "2026-04-01T00:00:00.000Z",
            "isRecurring": true,
            "isActive": true,
            "isArchived": false,
            "description": "",
            "createdAt": "2026-03-01T08:00:00.000Z",
            "updatedAt": "2026-03-01T08:00:00.000Z",
            "archivedAt": null
        })
    }

    #[test]
    fn test_income_amount_from_string() {
        let wire: WireIncome = serde_json::from_value(income_json(json!("2500.50"), "salary")).unwrap();
        let income = Income::from(wire);

        assert_eq!(income.amount, dec!(2500.50));
        assert_eq!(income.income_type, IncomeType::Salary);
        assert_eq!(income.frequency, Frequency::Monthly);
        assert_eq!(
            income.next_payment_date,
            Some(Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_numeric_amount_is_accepted() {
        let wire: WireIncome = serde_json::from_value(income_json(json!(12.5), "other")).unwrap();
        assert_eq!(wire.amount, dec!(12.5));
    }

    #[test]
    fn test_malformed_amount_and_unknown_enum_are_rejected() {
        assert!(serde_json::from_value::<WireIncome>(income_json(json!("12,50"), "salary")).is_err());
        assert!(serde_json::from_value::<WireIncome>(income_json(json!("1"), "lottery")).is_err());
    }

    #[test]
    fn test_auth_response_missing_tokens_maps_to_empty() {
        let wire: WireAuthResponse = serde_json::from_value(json!({
            "user": { "id": "u1", "email": "a@b.c", "name": "Ada" },
            "accessToken": "access"
        }))
        .unwrap();
        let received_at = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let result = wire.into_auth_result(received_at);

        assert_eq!(result.tokens.access_token, "access");
        assert_eq!(result.tokens.refresh_token, "");
        assert!(!result.tokens.is_complete());
        assert_eq!(result.user.created_at, received_at);
    }

    #[test]
    fn test_create_income_request_shape() {
        let request = CreateIncomeRequest::from(NewIncome {
            name: "Salary".to_string(),
            income_type: IncomeType::Salary,
            amount: dec!(2500),
            frequency: Frequency::Once,
            is_recurring: false,
            next_payment_date: None,
            description: None,
        });
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["type"], "salary");
        assert_eq!(value["isRecurring"], false);
        assert_eq!(value["description"], "");
        assert_eq!(value["amount"], json!(2500.0));
        assert!(value.get("nextPaymentDate").is_none());
    }
}
