//! Canned backend for adapter tests.

use axum::Router;
use std::sync::Arc;
use std::time::Duration;

use walletwise_core::auth::AccessTokenSource;
use walletwise_core::Result;

use crate::client::{ApiClient, ApiClientConfig};

/// Serves `router` on an ephemeral local port and returns a client for it.
pub(crate) async fn serve(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiClient::new(ApiClientConfig {
        base_url: format!("http://{}", addr),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

/// Token source returning a fixed token.
pub(crate) struct StaticToken(pub Option<&'static str>);

#[async_trait::async_trait]
impl AccessTokenSource for StaticToken {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.0.map(str::to_string))
    }
}

pub(crate) fn with_token(client: ApiClient, token: &'static str) -> ApiClient {
    client.with_token_source(Arc::new(StaticToken(Some(token))))
}
