//! Plain-text rendering of command results.

use std::fmt::Write as _;

use walletwise_core::auth::User;
use walletwise_core::bank::Bank;
use walletwise_core::constants::DEFAULT_CURRENCY;
use walletwise_core::expenses::Expense;
use walletwise_core::incomes::Income;
use walletwise_core::transactions::{MonthlyStats, Transaction};
use walletwise_core::utils::format_currency;

const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn user(user: &User) -> String {
    format!(
        "{} ({}) <{}>\nid: {}\nmember since {}",
        user.display_name(),
        user.initials(),
        user.email,
        user.id,
        user.created_at.format(DATE_FORMAT)
    )
}

pub fn bank(bank: &Bank) -> String {
    format!(
        "Balance: {}\nUpdated: {}",
        bank.format_balance(),
        bank.last_updated_at.format("%d/%m/%Y %H:%M UTC")
    )
}

pub fn transactions(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet".to_string();
    }

    let mut out = String::new();
    for transaction in transactions {
        let _ = writeln!(
            out,
            "{}  {:<14} {:<24} {:>16}",
            transaction.date.format(DATE_FORMAT),
            transaction.category.as_str(),
            transaction.name,
            transaction.format_amount()
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn incomes(incomes: &[Income]) -> String {
    if incomes.is_empty() {
        return "No incomes".to_string();
    }

    let mut out = String::new();
    for income in incomes {
        let _ = writeln!(
            out,
            "{}  {:<24} {:<10} {:>16}  {}",
            income.id,
            income.name,
            income.income_type.as_str(),
            income.format_amount(),
            schedule(income.is_recurring, income.frequency.as_str(), income.next_payment_date)
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn expenses(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses".to_string();
    }

    let mut out = String::new();
    for expense in expenses {
        let _ = writeln!(
            out,
            "{}  {:<24} {:<14} {:>16}  {}",
            expense.id,
            expense.name,
            expense.category.as_str(),
            expense.format_amount(),
            schedule(
                expense.is_recurring,
                expense.frequency.as_str(),
                expense.next_payment_date
            )
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn monthly_stats(stats: &MonthlyStats) -> String {
    format!(
        "Incomes:  {}\nExpenses: {}\nNet:      {}",
        format_currency(stats.incomes, DEFAULT_CURRENCY),
        format_currency(stats.expenses, DEFAULT_CURRENCY),
        format_currency(stats.net(), DEFAULT_CURRENCY)
    )
}

fn schedule(
    is_recurring: bool,
    frequency: &str,
    next_payment_date: Option<chrono::DateTime<chrono::Utc>>,
) -> String {
    match (is_recurring, next_payment_date) {
        (false, _) => "one-off".to_string(),
        (true, Some(date)) => format!("{}, next {}", frequency, date.format(DATE_FORMAT)),
        (true, None) => frequency.to_string(),
    }
}
