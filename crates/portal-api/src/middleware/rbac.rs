//! Role checks shared by the role-gated extractors.

use portal_auth::AuthenticatedUser;
use portal_entity::user::UserRole;

use crate::error::ApiError;
use crate::state::AppState;

/// Reject the request unless the caller's current role is in `allowed`.
pub fn require_roles(
    state: &AppState,
    user: &AuthenticatedUser,
    allowed: &[UserRole],
) -> Result<(), ApiError> {
    state.gate.authorize(user, allowed)?;
    Ok(())
}

pub fn require_admin(state: &AppState, user: &AuthenticatedUser) -> Result<(), ApiError> {
    require_roles(state, user, &[UserRole::Admin])
}
