use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use walletwise_core::auth::{AuthPort, AuthResult, SignInCredentials, SignUpCredentials, User};
use walletwise_core::Result;

use crate::client::ApiClient;
use crate::dto::{SignInRequest, SignUpRequest, WireAuthResponse, WireUser};

/// `AuthPort` over the `/authentication` and `/users` endpoints.
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthPort for AuthApi {
    async fn sign_in(&self, credentials: SignInCredentials) -> Result<AuthResult> {
        let request = SignInRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        let response: WireAuthResponse = self
            .client
            .post("/authentication/signin", &request)
            .await?;
        Ok(response.into_auth_result(Utc::now()))
    }

    async fn sign_up(&self, credentials: SignUpCredentials) -> Result<AuthResult> {
        let request = SignUpRequest {
            email: &credentials.email,
            password: &credentials.password,
            name: &credentials.name,
        };
        let response: WireAuthResponse = self
            .client
            .post("/authentication/signup", &request)
            .await?;
        Ok(response.into_auth_result(Utc::now()))
    }

    async fn sign_out(&self, user_id: &str) -> Result<()> {
        debug!("Notifying backend of sign-out for {}", user_id);
        self.client
            .post_empty(&format!("/authentication/signout/{}", user_id))
            .await
    }

    async fn get_current_user(&self) -> Result<Option<User>> {
        let user: Option<WireUser> = self.client.get_optional("/users/me").await?;
        Ok(user.map(|user| user.into_user(Utc::now())))
    }
}
