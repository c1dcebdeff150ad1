mod cli;
mod commands;
mod config;
mod main_lib;
mod render;

use clap::Parser;

use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config)?;

    let uses_session = cli.command.uses_session();
    if let Err(err) = commands::run(&state, cli.command).await {
        if uses_session && err.is_unauthorized() {
            tracing::warn!("Backend rejected the stored session: {}", err);
            state.auth.clear_session().await?;
            eprintln!("Your session has expired. Run `walletwise sign-in` to log in again.");
        }
        return Err(err.into());
    }
    Ok(())
}
