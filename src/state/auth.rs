//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` context by the root component; pages use it to
//! decide between rendering the signed-in view and redirecting to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Settle the state from a current-user lookup result.
    pub fn settled(user: Option<CurrentUser>) -> Self {
        Self { user, loading: false }
    }
}

/// `true` once loading finished without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
