//! JWT signature and expiry validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::de::DeserializeOwned;
use tracing::debug;

use portal_core::config::AuthConfig;

use super::claims::{AccessClaims, RefreshClaims};
use crate::error::AuthError;

/// Verifies tokens against the secret of their kind.
#[derive(Clone)]
pub struct JwtDecoder {
    access_key: DecodingKey,
    refresh_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            access_key: DecodingKey::from_secret(config.jwt_access_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.jwt_refresh_secret.as_bytes()),
            validation,
        }
    }

    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.decode_with(token, &self.access_key)
    }

    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        self.decode_with(token, &self.refresh_key)
    }

    fn decode_with<T: DeserializeOwned>(&self, token: &str, key: &DecodingKey) -> Result<T, AuthError> {
        decode::<T>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => debug!("Token has expired"),
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        debug!("Token signature mismatch")
                    }
                    _ => debug!(error = %e, "Token rejected"),
                }
                AuthError::InvalidToken
            })
    }
}
