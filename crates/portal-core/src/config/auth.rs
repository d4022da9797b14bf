//! Token and password configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Upper bound on the access token lifetime (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;
/// Upper bound on the refresh token lifetime (one year).
pub const MAX_REFRESH_TTL_HOURS: u64 = 365 * 24;

/// Authentication and credential configuration.
///
/// Access and refresh tokens are signed with separate HMAC-SHA256 secrets
/// so a leaked refresh secret cannot mint access tokens and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret for access tokens.
    pub jwt_access_secret: String,
    /// Secret for refresh tokens.
    pub jwt_refresh_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Build a config with the given secrets and default lifetimes.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            jwt_access_secret: access_secret.into(),
            jwt_refresh_secret: refresh_secret.into(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_refresh_ttl_hours: default_refresh_ttl(),
            password_min_length: default_password_min(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_access_secret.is_empty() || self.jwt_refresh_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_access_secret and auth.jwt_refresh_secret must be set",
            ));
        }
        if self.jwt_access_secret == self.jwt_refresh_secret {
            return Err(AppError::configuration(
                "auth.jwt_access_secret and auth.jwt_refresh_secret must differ",
            ));
        }
        if self.jwt_access_ttl_minutes == 0 || self.jwt_refresh_ttl_hours == 0 {
            return Err(AppError::configuration("token lifetimes must be non-zero"));
        }
        if self.jwt_access_ttl_minutes > MAX_ACCESS_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "auth.jwt_access_ttl_minutes must be at most {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        if self.jwt_refresh_ttl_hours > MAX_REFRESH_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.jwt_refresh_ttl_hours must be at most {MAX_REFRESH_TTL_HOURS}"
            )));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7 * 24
}

fn default_password_min() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_secrets_are_rejected() {
        let config = AuthConfig::new("same", "same");
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = AuthConfig::new("", "refresh");
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_ttls_are_rejected() {
        let mut config = AuthConfig::new("access", "refresh");
        config.jwt_access_ttl_minutes = u64::MAX;
        assert!(config.validate().is_err());

        let mut config = AuthConfig::new("access", "refresh");
        config.jwt_refresh_ttl_hours = MAX_REFRESH_TTL_HOURS + 1;
        assert!(config.validate().is_err());

        let mut config = AuthConfig::new("access", "refresh");
        config.jwt_access_ttl_minutes = MAX_ACCESS_TTL_MINUTES;
        config.jwt_refresh_ttl_hours = MAX_REFRESH_TTL_HOURS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let mut config = AuthConfig::new("access", "refresh");
        config.jwt_access_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }
}
