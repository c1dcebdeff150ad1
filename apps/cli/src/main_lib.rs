use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use walletwise_api::{ApiClient, ApiClientConfig, AuthApi, BankApi, ExpenseApi, IncomeApi};
use walletwise_core::{
    auth::{AuthUseCasePort, AuthUseCases, StorageTokenSource},
    finance::{FinanceUseCasePort, FinanceUseCases},
    storage::StoragePort,
};
use walletwise_storage::LocalStorage;

use crate::config::{Config, LogFormat};

/// Everything a command needs, wired once at startup.
pub struct AppState {
    pub auth: Arc<dyn AuthUseCasePort>,
    pub finance: Arc<dyn FinanceUseCasePort>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output stays clean.
    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let storage: Arc<dyn StoragePort> = Arc::new(LocalStorage::open(
        &config.data_dir,
        config.secret_key.as_deref(),
    )?);
    tracing::debug!("Data directory in use: {}", config.data_dir.display());

    let client = ApiClient::new(ApiClientConfig {
        base_url: config.api_url.clone(),
        timeout: config.request_timeout,
    })?
    .with_token_source(Arc::new(StorageTokenSource::new(storage.clone())));
    tracing::debug!("Backend: {}", client.base_url());

    let auth = Arc::new(AuthUseCases::new(
        Arc::new(AuthApi::new(client.clone())),
        storage,
    ));
    let finance = Arc::new(FinanceUseCases::new(
        Arc::new(BankApi::new(client.clone())),
        Arc::new(IncomeApi::new(client.clone())),
        Arc::new(ExpenseApi::new(client)),
    ));

    Ok(AppState { auth, finance })
}
