//! JWT token creation with per-kind signing keys and TTLs.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use portal_core::config::AuthConfig;
use portal_core::config::auth::{MAX_ACCESS_TTL_MINUTES, MAX_REFRESH_TTL_HOURS};
use portal_core::error::AppError;
use portal_entity::user::User;

use super::claims::{AccessClaims, RefreshClaims};

/// Signs access tokens and refresh tokens with their own secrets.
#[derive(Clone)]
pub struct JwtEncoder {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// A freshly minted access + refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Convert a configured lifetime, clamping it to `max` units.
fn ttl(units: u64, to_duration: fn(i64) -> Option<Duration>, max: u64) -> Duration {
    let units = i64::try_from(units.min(max)).unwrap_or(0);
    to_duration(units).unwrap_or_else(Duration::zero)
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.jwt_access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.jwt_refresh_secret.as_bytes()),
            access_ttl: ttl(config.jwt_access_ttl_minutes, Duration::try_minutes, MAX_ACCESS_TTL_MINUTES),
            refresh_ttl: ttl(config.jwt_refresh_ttl_hours, Duration::try_hours, MAX_REFRESH_TTL_HOURS),
        }
    }

    /// Issue both tokens for `user`, stamped with the same issue time.
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_exp = now + self.access_ttl;
        let refresh_exp = now + self.refresh_ttl;

        let access_claims = AccessClaims {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
        };
        let refresh_claims = RefreshClaims {
            user_id: user.id,
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
        };

        Ok(TokenPair {
            access_token: self.sign_access(&access_claims)?,
            refresh_token: self.sign_refresh(&refresh_claims)?,
            access_expires_at: access_exp,
            refresh_expires_at: refresh_exp,
        })
    }

    pub fn sign_access(&self, claims: &AccessClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.access_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }

    pub fn sign_refresh(&self, claims: &RefreshClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.refresh_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))
    }
}
