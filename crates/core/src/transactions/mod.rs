//! Transactions module - read-only projection of incomes and expenses, and
//! the derivations built on it.

mod transactions_aggregation;
mod transactions_model;


pub use transactions_aggregation::{merge_recent_transactions, monthly_stats};
pub use transactions_model::{
    FinanceOverview, MonthlyStats, Transaction, TransactionCategory, TransactionType,
};
