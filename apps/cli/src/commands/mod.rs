//! Command handlers. Each one talks only to the inbound ports in `AppState`.

mod finance;
mod session;

use walletwise_core::Result;

use crate::cli::Command;
use crate::main_lib::AppState;

pub async fn run(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::SignIn { email, password } => session::sign_in(state, email, password).await,
        Command::SignUp {
            email,
            password,
            name,
        } => session::sign_up(state, email, password, name).await,
        Command::SignOut => session::sign_out(state).await,
        Command::Whoami { verify } => session::whoami(state, verify).await,
        Command::Overview { limit } => finance::overview(state, limit).await,
        Command::Balance { action } => finance::balance(state, action).await,
        Command::Transactions { limit } => finance::transactions(state, limit).await,
        Command::Income { action } => finance::income(state, action).await,
        Command::Expense { action } => finance::expense(state, action).await,
        Command::Stats => finance::stats(state).await,
    }
}
