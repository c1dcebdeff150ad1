use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use walletwise_core::constants::DEFAULT_RECENT_TRANSACTIONS_LIMIT;
use walletwise_core::expenses::ExpenseCategory;
use walletwise_core::incomes::IncomeType;
use walletwise_core::recurrence::Frequency;

#[derive(Parser, Debug)]
#[command(name = "walletwise", version)]
#[command(about = "Personal finance client for the Walletwise backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session locally
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "WW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long, env = "WW_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// End the session
    SignOut,
    /// Show the signed-in user
    Whoami {
        /// Confirm the session with the backend
        #[arg(long)]
        verify: bool,
    },
    /// Balance and latest transactions
    Overview {
        #[arg(long, default_value_t = DEFAULT_RECENT_TRANSACTIONS_LIMIT)]
        limit: usize,
    },
    /// Adjust the account balance by hand
    Balance {
        #[command(subcommand)]
        action: BalanceCommand,
    },
    /// Incomes and expenses merged, newest first
    Transactions {
        #[arg(long, default_value_t = DEFAULT_RECENT_TRANSACTIONS_LIMIT)]
        limit: usize,
    },
    Income {
        #[command(subcommand)]
        action: IncomeCommand,
    },
    Expense {
        #[command(subcommand)]
        action: ExpenseCommand,
    },
    /// Totals for the current month
    Stats,
}

impl Command {
    /// Finance commands act on the backend with the stored session.
    pub fn uses_session(&self) -> bool {
        !matches!(
            self,
            Command::SignIn { .. } | Command::SignUp { .. } | Command::SignOut | Command::Whoami { .. }
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum BalanceCommand {
    Add {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(long, default_value = "")]
        description: String,
    },
    Subtract {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change the account currency (ISO 4217 code)
    Currency { code: String },
}

#[derive(Subcommand, Debug)]
pub enum IncomeCommand {
    Add(IncomeArgs),
    List,
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    Add(ExpenseArgs),
    List,
    Delete { id: String },
}

/// Recurrence flags shared by income and expense creation.
#[derive(Args, Debug)]
pub struct RecurrenceArgs {
    #[arg(long, default_value = "once")]
    pub frequency: Frequency,
    #[arg(long)]
    pub recurring: bool,
    /// First due date (YYYY-MM-DD); computed when omitted
    #[arg(long)]
    pub next_payment: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct IncomeArgs {
    pub name: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,
    #[arg(long = "type", default_value = "other")]
    pub income_type: IncomeType,
    #[command(flatten)]
    pub recurrence: RecurrenceArgs,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExpenseArgs {
    pub name: String,
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,
    #[arg(long, default_value = "other")]
    pub category: ExpenseCategory,
    #[command(flatten)]
    pub recurrence: RecurrenceArgs,
    #[arg(long)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_income_add() {
        let cli = Cli::try_parse_from([
            "walletwise",
            "income",
            "add",
            "Salary",
            "2500.50",
            "--type",
            "salary",
            "--frequency",
            "monthly",
            "--recurring",
            "--next-payment",
            "2026-04-01",
        ])
        .unwrap();

        let Command::Income {
            action: IncomeCommand::Add(args),
        } = cli.command
        else {
            panic!("expected income add");
        };
        assert_eq!(args.name, "Salary");
        assert_eq!(args.amount, dec!(2500.50));
        assert_eq!(args.income_type, IncomeType::Salary);
        assert_eq!(args.recurrence.frequency, Frequency::Monthly);
        assert!(args.recurrence.recurring);
        assert_eq!(
            args.recurrence.next_payment,
            NaiveDate::from_ymd_opt(2026, 4, 1)
        );
    }

    #[test]
    fn negative_amounts_reach_validation() {
        let cli = Cli::try_parse_from(["walletwise", "balance", "add", "-5"]).unwrap();
        let Command::Balance {
            action: BalanceCommand::Add { amount, .. },
        } = cli.command
        else {
            panic!("expected balance add");
        };
        assert_eq!(amount, dec!(-5));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from([
            "walletwise",
            "expense",
            "add",
            "Lottery",
            "10",
            "--category",
            "gambling",
        ])
        .is_err());
    }

    #[test]
    fn only_finance_commands_use_the_session() {
        let sign_in =
            Cli::try_parse_from(["walletwise", "sign-in", "--email", "a@b.c", "--password", "x"])
                .unwrap();
        assert!(!sign_in.command.uses_session());

        let stats = Cli::try_parse_from(["walletwise", "stats"]).unwrap();
        assert!(stats.command.uses_session());
    }

    #[test]
    fn default_transaction_limit() {
        let cli = Cli::try_parse_from(["walletwise", "transactions"]).unwrap();
        assert!(matches!(cli.command, Command::Transactions { limit: 20 }));
    }
}
