//! Claims carried by access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_entity::user::UserRole;

/// Payload of a short-lived access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    /// Role at issuance. The gate re-reads the live role from the store.
    pub role: UserRole,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Payload of a long-lived refresh token; identifies the user only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Remaining lifetime in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        u64::try_from(self.exp - Utc::now().timestamp()).unwrap_or(0)
    }
}

impl RefreshClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_serialized_as_user_id() {
        let claims = RefreshClaims {
            user_id: 42,
            iat: 0,
            exp: 1,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], 42);
        assert!(json.get("username").is_none());
        assert!(json.get("role").is_none());
    }

    #[test]
    fn expired_claims_have_no_remaining_ttl() {
        let claims = AccessClaims {
            user_id: 1,
            username: "admin".into(),
            role: UserRole::Admin,
            iat: 0,
            exp: 10,
        };
        assert_eq!(claims.remaining_ttl_seconds(), 0);
        assert_eq!(claims.expires_at().timestamp(), 10);
    }
}
