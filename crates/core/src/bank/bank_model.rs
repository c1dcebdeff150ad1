use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::format_currency;

/// Server-side account snapshot.
///
/// The balance is the backend's source of truth; the client never derives
/// it locally and replaces the whole snapshot after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    pub user_id: String,
    pub balance: Decimal,
    /// ISO 4217 code
    pub currency: String,
    pub last_updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Bank {
    pub fn format_balance(&self) -> String {
        format_currency(self.balance, &self.currency)
    }
}
