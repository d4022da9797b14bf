//! `AuthUser` and `AdminUser` extractors: run the gate on the `Authorization`
//! header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use portal_auth::{AuthError, AuthenticatedUser};

use crate::error::ApiError;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// The verified caller, re-read from the store for this request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl std::ops::Deref for AuthUser {
    type Target = AuthenticatedUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            None => None,
            Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
        };

        let user = state.gate.authenticate(header).await?;
        Ok(AuthUser(user))
    }
}

/// An authenticated caller whose current role is admin.
///
/// Place it before body, query and path extractors so non-admins are
/// rejected with 403 before their input is parsed.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl std::ops::Deref for AdminUser {
    type Target = AuthenticatedUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        require_admin(state, &user)?;
        Ok(AdminUser(user))
    }
}
