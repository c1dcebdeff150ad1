use chrono::{DateTime, Utc};

use super::transactions_model::{MonthlyStats, Transaction, TransactionType};
use crate::errors::{Error, Result};
use crate::expenses::Expense;
use crate::incomes::Income;
use crate::utils::is_same_utc_month;

/// Projects incomes and expenses into transactions, newest first, keeping at
/// most `limit` entries.
///
/// Incomes are laid out before expenses and the sort is stable, so on equal
/// dates an income precedes an expense and each source keeps its own order.
pub fn merge_recent_transactions(
    incomes: &[Income],
    expenses: &[Expense],
    limit: usize,
) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = incomes
        .iter()
        .map(Transaction::from_income)
        .chain(expenses.iter().map(Transaction::from_expense))
        .collect();

    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions.truncate(limit);
    transactions
}

/// Sums transaction amounts per type over the UTC calendar month of
/// `reference`. Amounts are taken as absolute values.
///
/// Fails when a total does not fit in a `Decimal`.
pub fn monthly_stats(
    transactions: &[Transaction],
    reference: DateTime<Utc>,
) -> Result<MonthlyStats> {
    transactions
        .iter()
        .filter(|transaction| is_same_utc_month(transaction.date, reference))
        .try_fold(MonthlyStats::default(), |mut stats, transaction| {
            let total = match transaction.transaction_type {
                TransactionType::Income => &mut stats.incomes,
                TransactionType::Expense => &mut stats.expenses,
            };
            *total = total
                .checked_add(transaction.amount.abs())
                .ok_or_else(|| Error::Unexpected("Monthly total out of range".to_string()))?;
            Ok(stats)
        })
}
