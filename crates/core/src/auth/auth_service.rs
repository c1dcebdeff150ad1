use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::auth_constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use super::auth_model::{AuthResult, SignInCredentials, SignUpCredentials, User};
use super::auth_traits::{AccessTokenSource, AuthPort, AuthUseCasePort};
use crate::constants::MIN_NAME_LENGTH;
use crate::errors::{invalid_input, Error, Result, UpstreamError};
use crate::storage::StoragePort;
use crate::utils::normalize_email;

/// Reads a token from secure storage; an empty value counts as absent.
async fn read_token(storage: &dyn StoragePort, key: &str) -> Result<Option<String>> {
    Ok(storage
        .get_secure(key)
        .await?
        .filter(|token| !token.is_empty()))
}

fn nameless_user() -> Error {
    Error::Upstream(UpstreamError::InvalidResponse(
        "User record has no name".to_string(),
    ))
}

/// Session use cases.
///
/// Holds no session state of its own: tokens live in the secure namespace
/// of the storage port and the user record in its plain namespace.
pub struct AuthUseCases {
    auth_port: Arc<dyn AuthPort>,
    storage: Arc<dyn StoragePort>,
}

impl AuthUseCases {
    pub fn new(auth_port: Arc<dyn AuthPort>, storage: Arc<dyn StoragePort>) -> Self {
        Self { auth_port, storage }
    }

    /// Checks the remote result and persists it: tokens first, then the user.
    async fn establish_session(&self, result: AuthResult) -> Result<User> {
        if !result.tokens.is_complete() {
            return Err(Error::MissingTokens);
        }
        // A nameless record would be unreadable later, hiding the session.
        if !result.user.has_name() {
            return Err(nameless_user());
        }

        self.storage
            .save_secure(ACCESS_TOKEN_KEY, &result.tokens.access_token)
            .await?;
        self.storage
            .save_secure(REFRESH_TOKEN_KEY, &result.tokens.refresh_token)
            .await?;
        self.save_user(&result.user).await?;

        Ok(result.user)
    }

    async fn save_user(&self, user: &User) -> Result<()> {
        let record = serde_json::to_string(user)?;
        self.storage.save(USER_KEY, &record).await
    }
}

#[async_trait]
impl AuthUseCasePort for AuthUseCases {
    async fn sign_in(&self, credentials: SignInCredentials) -> Result<User> {
        let email = normalize_email(&credentials.email);
        if email.is_empty() || credentials.password.is_empty() {
            return Err(invalid_input("Email and password are required"));
        }

        debug!("Signing in {}", email);
        let result = self
            .auth_port
            .sign_in(SignInCredentials {
                email,
                password: credentials.password,
            })
            .await?;

        let user = self.establish_session(result).await?;
        info!("User {} signed in", user.id);
        Ok(user)
    }

    async fn sign_up(&self, credentials: SignUpCredentials) -> Result<User> {
        let email = normalize_email(&credentials.email);
        let name = credentials.name.trim();
        if email.is_empty() || credentials.password.is_empty() || name.is_empty() {
            return Err(invalid_input("All fields are required"));
        }
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(invalid_input(format!(
                "Name must be at least {} characters",
                MIN_NAME_LENGTH
            )));
        }

        debug!("Signing up {}", email);
        let result = self
            .auth_port
            .sign_up(SignUpCredentials {
                email,
                password: credentials.password,
                name: name.to_string(),
            })
            .await?;

        let user = self.establish_session(result).await?;
        info!("User {} signed up", user.id);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(user) = self.get_current_user().await {
            // Remote failure is swallowed; the local teardown below must run.
            if let Err(e) = self.auth_port.sign_out(&user.id).await {
                warn!("Remote sign-out failed for user {}: {}", user.id, e);
            }
        }

        self.clear_session().await?;
        info!("Signed out");
        Ok(())
    }

    async fn get_current_user(&self) -> Option<User> {
        let record = match self.storage.get(USER_KEY).await {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read cached user: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<User>(&record) {
            Ok(user) if user.has_name() => Some(user),
            Ok(_) => {
                warn!("Ignoring cached user record without a name");
                None
            }
            Err(e) => {
                warn!("Ignoring malformed cached user record: {}", e);
                None
            }
        }
    }

    async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.get_access_token().await?.is_some())
    }

    async fn get_access_token(&self) -> Result<Option<String>> {
        read_token(self.storage.as_ref(), ACCESS_TOKEN_KEY).await
    }

    async fn get_refresh_token(&self) -> Result<Option<String>> {
        read_token(self.storage.as_ref(), REFRESH_TOKEN_KEY).await
    }

    async fn verify_session(&self) -> Result<Option<User>> {
        if self.get_access_token().await?.is_none() {
            return Ok(None);
        }

        match self.auth_port.get_current_user().await {
            Ok(Some(user)) if !user.has_name() => Err(nameless_user()),
            Ok(Some(mut user)) => {
                // Creation time never moves forward; keep the earliest one known.
                if let Some(cached) = self.get_current_user().await {
                    if cached.id == user.id {
                        user.created_at = user.created_at.min(cached.created_at);
                    }
                }
                self.save_user(&user).await?;
                Ok(Some(user))
            }
            Ok(None) => {
                warn!("Backend does not recognise the stored session, clearing it");
                self.clear_session().await?;
                Ok(None)
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Stored access token was rejected, clearing session: {}", e);
                self.clear_session().await?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn clear_session(&self) -> Result<()> {
        let removals = [
            self.storage.remove_secure(ACCESS_TOKEN_KEY).await,
            self.storage.remove_secure(REFRESH_TOKEN_KEY).await,
            self.storage.remove(USER_KEY).await,
        ];
        if let Some(Err(e)) = removals.into_iter().find(|removal| removal.is_err()) {
            // Single keys cannot be dropped from an unreadable store.
            warn!("Failed to remove session entries, resetting local storage: {}", e);
            self.storage.clear().await?;
        }
        Ok(())
    }
}

/// Bearer-token provider backed directly by the storage port.
///
/// The HTTP adapters need a token before the use cases exist, so this
/// reads the same secure key the use cases write.
pub struct StorageTokenSource {
    storage: Arc<dyn StoragePort>,
}

impl StorageTokenSource {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl AccessTokenSource for StorageTokenSource {
    async fn access_token(&self) -> Result<Option<String>> {
        read_token(self.storage.as_ref(), ACCESS_TOKEN_KEY).await
    }
}
