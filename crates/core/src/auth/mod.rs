//! Auth module - session entities, ports, and the session use cases.

mod auth_constants;
mod auth_model;
mod auth_service;
mod auth_traits;



pub use auth_constants::*;
pub use auth_model::{AuthResult, AuthTokens, SignInCredentials, SignUpCredentials, User};
pub use auth_service::{AuthUseCases, StorageTokenSource};
pub use auth_traits::{AccessTokenSource, AuthPort, AuthUseCasePort};
