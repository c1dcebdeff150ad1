//! Auth port and use-case traits.

use async_trait::async_trait;

use super::auth_model::{AuthResult, SignInCredentials, SignUpCredentials, User};
use crate::errors::Result;

/// Trait defining the contract for the remote authentication backend.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Fails on bad credentials.
    async fn sign_in(&self, credentials: SignInCredentials) -> Result<AuthResult>;

    /// Fails if the account already exists or the input is rejected.
    async fn sign_up(&self, credentials: SignUpCredentials) -> Result<AuthResult>;

    /// Best-effort remote session teardown.
    async fn sign_out(&self, user_id: &str) -> Result<()>;

    /// Resolves the user behind the current access token.
    ///
    /// Returns `Ok(None)` when the backend does not know the session.
    async fn get_current_user(&self) -> Result<Option<User>>;
}

/// Provides the bearer token attached to authenticated requests.
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>>;
}

/// Trait defining the session operations exposed to the presentation layer.
#[async_trait]
pub trait AuthUseCasePort: Send + Sync {
    /// Signs in and persists the session. Returns the authenticated user.
    async fn sign_in(&self, credentials: SignInCredentials) -> Result<User>;

    /// Creates an account and persists the session.
    async fn sign_up(&self, credentials: SignUpCredentials) -> Result<User>;

    /// Ends the session. The local teardown happens even when the remote
    /// notification fails.
    async fn sign_out(&self) -> Result<()>;

    /// Reads the cached user record. Never fails: missing or malformed data
    /// yields `None`.
    async fn get_current_user(&self) -> Option<User>;

    /// True iff an access token is stored. No expiry or signature check.
    async fn is_authenticated(&self) -> Result<bool>;

    async fn get_access_token(&self) -> Result<Option<String>>;

    async fn get_refresh_token(&self) -> Result<Option<String>>;

    /// Asks the backend who owns the stored token, refreshing the cached
    /// user record. A rejected token clears the local session.
    async fn verify_session(&self) -> Result<Option<User>>;

    /// Removes both tokens and the cached user without contacting the backend.
    async fn clear_session(&self) -> Result<()>;
}
