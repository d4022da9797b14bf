//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_auth::TokenPair;
use portal_core::types::PageResponse;
use portal_entity::user::{User, UserRole};

/// The envelope wrapped around every response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Present on list responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            meta: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            meta: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success with no payload.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            meta: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Success carrying one page of items plus pagination metadata.
    pub fn paged<U>(message: impl Into<String>, page: PageResponse<U>, f: impl FnMut(U) -> T) -> Self {
        let page = page.map(f);
        let meta = PageMeta {
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        };
        Self {
            success: true,
            message: message.into(),
            data: Some(page.items),
            meta: Some(meta),
        }
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// Body of login and refresh responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

/// Sanitized user profile; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use portal_core::types::PageRequest;

    use super::*;

    #[test]
    fn message_only_envelope_omits_data_and_meta() {
        let json = serde_json::to_value(ApiResponse::ok_message("Password changed successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn paged_envelope_carries_camel_case_meta() {
        let page = PageResponse::new(vec![1, 2, 3], PageRequest::new(Some(1), Some(3)), 7);
        let json = serde_json::to_value(ApiResponse::paged("ok", page, |n: i32| n * 2)).unwrap();
        assert_eq!(json["data"], serde_json::json!([2, 4, 6]));
        assert_eq!(json["meta"]["totalPages"], 3);
        assert_eq!(json["meta"]["total"], 7);
        assert_eq!(json["meta"]["limit"], 3);
    }

    #[test]
    fn token_response_uses_camel_case() {
        let json = serde_json::to_value(TokenResponse {
            access_token: "a".into(),
            refresh_token: "r".into(),
        })
        .unwrap();
        assert_eq!(json["accessToken"], "a");
        assert_eq!(json["refreshToken"], "r");
    }
}
