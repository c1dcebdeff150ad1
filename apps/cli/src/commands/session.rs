use walletwise_core::auth::{SignInCredentials, SignUpCredentials};
use walletwise_core::Result;

use crate::main_lib::AppState;
use crate::render;

pub(super) async fn sign_in(state: &AppState, email: String, password: String) -> Result<()> {
    let user = state
        .auth
        .sign_in(SignInCredentials::new(email, password))
        .await?;
    println!("Welcome back, {}", user.display_name());
    Ok(())
}

pub(super) async fn sign_up(
    state: &AppState,
    email: String,
    password: String,
    name: String,
) -> Result<()> {
    let user = state
        .auth
        .sign_up(SignUpCredentials::new(email, password, name))
        .await?;
    println!("Account created. Welcome, {}", user.display_name());
    Ok(())
}

pub(super) async fn sign_out(state: &AppState) -> Result<()> {
    state.auth.sign_out().await?;
    println!("Signed out");
    Ok(())
}

pub(super) async fn whoami(state: &AppState, verify: bool) -> Result<()> {
    let user = if verify {
        state.auth.verify_session().await?
    } else {
        state.auth.get_current_user().await
    };

    match user {
        Some(user) => println!("{}", render::user(&user)),
        None => println!("Not signed in"),
    }
    if !verify && state.auth.is_authenticated().await? {
        println!("access token: stored");
    }
    Ok(())
}
