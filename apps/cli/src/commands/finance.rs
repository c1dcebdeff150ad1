use chrono::{DateTime, NaiveDate, Utc};

use walletwise_core::finance::{CreateExpenseCommand, CreateIncomeCommand};
use walletwise_core::Result;

use crate::cli::{BalanceCommand, ExpenseArgs, ExpenseCommand, IncomeArgs, IncomeCommand};
use crate::main_lib::AppState;
use crate::render;

pub(super) async fn overview(state: &AppState, limit: usize) -> Result<()> {
    let overview = state.finance.load_overview(limit).await?;
    println!("{}\n", render::bank(&overview.bank));
    println!("{}", render::transactions(&overview.transactions));
    Ok(())
}

pub(super) async fn balance(state: &AppState, action: BalanceCommand) -> Result<()> {
    let bank = match action {
        BalanceCommand::Add {
            amount,
            description,
        } => state.finance.add_balance_manually(amount, &description).await?,
        BalanceCommand::Subtract {
            amount,
            description,
        } => {
            state
                .finance
                .subtract_balance_manually(amount, &description)
                .await?
        }
        BalanceCommand::Currency { code } => {
            state
                .finance
                .update_currency(&code.trim().to_uppercase())
                .await?
        }
    };
    println!("{}", render::bank(&bank));
    Ok(())
}

pub(super) async fn transactions(state: &AppState, limit: usize) -> Result<()> {
    let transactions = state.finance.get_recent_transactions(limit).await?;
    println!("{}", render::transactions(&transactions));
    Ok(())
}

pub(super) async fn income(state: &AppState, action: IncomeCommand) -> Result<()> {
    match action {
        IncomeCommand::Add(args) => {
            let income = state.finance.create_income(income_command(args)).await?;
            println!("Income recorded ({})", income.id);
            println!("{}", render::incomes(std::slice::from_ref(&income)));
        }
        IncomeCommand::List => {
            println!("{}", render::incomes(&state.finance.get_incomes().await?));
        }
        IncomeCommand::Delete { id } => {
            state.finance.delete_income(&id).await?;
            println!("Income {} deleted", id);
        }
    }
    Ok(())
}

pub(super) async fn expense(state: &AppState, action: ExpenseCommand) -> Result<()> {
    match action {
        ExpenseCommand::Add(args) => {
            let expense = state.finance.create_expense(expense_command(args)).await?;
            println!("Expense recorded ({})", expense.id);
            println!("{}", render::expenses(std::slice::from_ref(&expense)));
        }
        ExpenseCommand::List => {
            println!("{}", render::expenses(&state.finance.get_expenses().await?));
        }
        ExpenseCommand::Delete { id } => {
            state.finance.delete_expense(&id).await?;
            println!("Expense {} deleted", id);
        }
    }
    Ok(())
}

pub(super) async fn stats(state: &AppState) -> Result<()> {
    let stats = state.finance.get_monthly_stats().await?;
    println!("{}", render::monthly_stats(&stats));
    Ok(())
}

fn at_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn income_command(args: IncomeArgs) -> CreateIncomeCommand {
    CreateIncomeCommand {
        name: args.name,
        income_type: args.income_type,
        amount: args.amount,
        frequency: args.recurrence.frequency,
        is_recurring: args.recurrence.recurring,
        next_payment_date: args.recurrence.next_payment.map(at_utc_midnight),
        description: args.description,
    }
}

fn expense_command(args: ExpenseArgs) -> CreateExpenseCommand {
    CreateExpenseCommand {
        name: args.name,
        amount: args.amount,
        category: args.category,
        description: args.description,
        frequency: args.recurrence.frequency,
        is_recurring: args.recurrence.recurring,
        next_payment_date: args.recurrence.next_payment.map(at_utc_midnight),
    }
}
