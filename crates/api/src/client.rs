//! Shared HTTP client for the Walletwise backend.
//!
//! Every adapter in this crate goes through [`ApiClient`] so transport
//! failures and error bodies are mapped into core errors in one place.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use walletwise_core::auth::AccessTokenSource;
use walletwise_core::errors::{Error, Result, UpstreamError};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default base URL of the backend (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// HTTP client for the Walletwise backend.
///
/// When a token source is attached, its access token is sent as a bearer
/// token on every request.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::new(ApiClientConfig::default())?
///     .with_token_source(Arc::new(StorageTokenSource::new(storage)));
/// let bank = BankApi::new(client).get_bank_account().await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn AccessTokenSource>>,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens: None,
        })
    }

    pub fn with_token_source(mut self, tokens: Arc<dyn AccessTokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(tokens) = &self.tokens {
            if let Some(token) = tokens.access_token().await? {
                let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    Error::Unexpected(format!("Invalid access token format: {}", e))
                })?;
                headers.insert(AUTHORIZATION, value);
            }
        }
        Ok(headers)
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Api] {} {}", method, url);
        Ok(self.client.request(method, url).headers(self.headers().await?))
    }

    /// Sends the request and returns the status and raw body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String)> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            return Ok((status, body));
        }
        Err(status_error(status, &body))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (_, body) = self.send(self.request(Method::GET, path).await?).await?;
        decode(&body)
    }

    /// GET that treats 404, an empty body, and `null` as "no resource".
    pub(crate) async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.send(self.request(Method::GET, path).await?).await {
            Ok((_, body)) if body.trim().is_empty() => Ok(None),
            Ok((_, body)) => decode(&body),
            Err(Error::Upstream(UpstreamError::Api { status: 404, .. })) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::POST, path).await?.json(body);
        let (_, body) = self.send(request).await?;
        decode(&body)
    }

    /// POST without a body whose response content is ignored.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::POST, path).await?).await?;
        Ok(())
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::PATCH, path).await?.json(body);
        let (_, body) = self.send(request).await?;
        decode(&body)
    }

    /// DELETE; 204 and empty bodies are accepted.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let (status, _) = self.send(self.request(Method::DELETE, path).await?).await?;
        debug!("[Api] DELETE {} -> {}", path, status);
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        Error::Upstream(UpstreamError::InvalidResponse(format!(
            "{} - {}",
            e,
            body.chars().take(200).collect::<String>()
        )))
    })
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Upstream(UpstreamError::Timeout)
    } else if e.is_decode() {
        Error::Upstream(UpstreamError::InvalidResponse(e.to_string()))
    } else {
        Error::Upstream(UpstreamError::Network(e.to_string()))
    }
}

fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message.or(err.error))
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));

    if status == StatusCode::UNAUTHORIZED {
        Error::Upstream(UpstreamError::Unauthorized(message))
    } else {
        Error::Upstream(UpstreamError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_normalization() {
        let client = ApiClient::new(ApiClientConfig {
            base_url: "http://localhost:4000/".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_status_error_prefers_message_then_error() {
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Email already used","error":"Bad Request"}"#,
        );
        assert_eq!(err.to_string(), "Email already used");

        let err = status_error(StatusCode::CONFLICT, r#"{"error":"Conflict"}"#);
        assert!(matches!(
            err,
            Error::Upstream(UpstreamError::Api { status: 409, ref message }) if message == "Conflict"
        ));

        let err = status_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP error 502");
    }

    #[test]
    fn test_status_error_unauthorized() {
        let err = status_error(StatusCode::UNAUTHORIZED, r#"{"message":"Invalid token"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_decode_failure_is_invalid_response() {
        let err = decode::<Vec<String>>("{").unwrap_err();
        assert!(matches!(
            err,
            Error::Upstream(UpstreamError::InvalidResponse(_))
        ));
    }
}
