//! Command implementations.

pub mod auth;
pub mod reports;

use civicstorm_client::models::User;
use civicstorm_client::state::AppState;

use crate::error::{AppError, Result};

/// The signed-in user, or `Unauthorized`.
fn require_user(state: &AppState) -> Result<User> {
    state.auth().current_user().ok_or(AppError::Unauthorized)
}

/// The signed-in admin, or `Unauthorized` / `Forbidden`.
fn require_admin(state: &AppState, action: &'static str) -> Result<User> {
    let user = require_user(state)?;
    if user.is_admin {
        Ok(user)
    } else {
        Err(AppError::Forbidden(action))
    }
}
