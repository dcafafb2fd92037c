//! Session commands.

use secrecy::SecretString;

use civicstorm_client::state::AppState;

use crate::error::Result;
use crate::output::Output;

/// Sign in and print the account.
pub async fn login(
    state: &mut AppState,
    out: &Output,
    email: &str,
    password: String,
) -> Result<()> {
    let password = SecretString::from(password);
    let user = state.auth_mut().login(email, &password).await?;
    out.user(Some(&user))
}

/// Create an account, sign in, and print it.
pub async fn signup(
    state: &mut AppState,
    out: &Output,
    name: &str,
    email: &str,
    password: String,
) -> Result<()> {
    let password = SecretString::from(password);
    let user = state.auth_mut().signup(name, email, &password).await?;
    out.user(Some(&user))
}

pub fn logout(state: &mut AppState) {
    state.auth_mut().logout();
}

pub fn whoami(state: &AppState, out: &Output) -> Result<()> {
    out.user(state.auth().current_user().as_ref())
}
