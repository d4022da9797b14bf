//! Per-request authentication and role checks.

pub mod authenticated;

use std::sync::Arc;

use tracing::debug;

use portal_entity::user::UserRole;

pub use authenticated::AuthenticatedUser;

use crate::error::AuthError;
use crate::token::TokenService;

/// Bearer scheme prefix, matched case-sensitively.
const BEARER_PREFIX: &str = "Bearer ";

/// Turns an `Authorization` header into a live [`AuthenticatedUser`].
///
/// The user record is re-read on every request, so role changes and
/// deactivation take effect before the access token expires.
#[derive(Debug, Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Validate the header value and load the caller's current record.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        let header = header.ok_or(AuthError::MissingToken)?;
        let token = extract_bearer(header)?;

        let claims = self.tokens.verify_access_token(token)?;
        let user = self.tokens.resolve_user(claims.user_id).await?;

        if !user.is_active {
            debug!(user_id = user.id, "Rejected token for deactivated account");
            return Err(AuthError::AccountDisabled);
        }

        debug!(
            user_id = user.id,
            expires_in = claims.remaining_ttl_seconds(),
            "Request authenticated"
        );

        Ok(AuthenticatedUser::new(user))
    }

    /// Require the caller's role to be one of `allowed`.
    pub fn authorize(&self, user: &AuthenticatedUser, allowed: &[UserRole]) -> Result<(), AuthError> {
        if user.has_any_role(allowed) {
            Ok(())
        } else {
            debug!(user_id = user.id, role = %user.role, "Role not in allow-list");
            Err(AuthError::Forbidden)
        }
    }
}

fn extract_bearer(header: &str) -> Result<&str, AuthError> {
    match header.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::MalformedHeader),
    }
}
