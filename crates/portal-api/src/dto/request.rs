//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use portal_core::error::AppError;
use portal_core::types::PageRequest;
use portal_entity::user::{UpdateUser, UserFilter, UserRole};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// Length policy is `auth.password_min_length`, enforced by the token service.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Admin user creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    /// Length policy is `auth.password_min_length`, enforced by the directory service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Parsed into [`UserRole`] so the error names the allowed values.
    pub role: String,
}

/// Admin partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub is_active: Option<bool>,
    /// An empty string is treated as absent.
    pub role: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> Result<UpdateUser, AppError> {
        let role = match self.role.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<UserRole>()?),
        };
        Ok(UpdateUser {
            role,
            is_active: self.is_active,
        })
    }
}

/// Query string of `GET /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub role: Option<String>,
    /// `"true"` / `"false"`; any other value disables the filter.
    pub is_active: Option<String>,
}

impl ListUsersQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    pub fn filter(&self) -> Result<UserFilter, AppError> {
        let search = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let role = match self.role.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<UserRole>()?),
        };
        let is_active = match self.is_active.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };
        Ok(UserFilter {
            search,
            role,
            is_active,
        })
    }
}
