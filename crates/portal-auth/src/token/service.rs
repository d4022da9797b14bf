//! Token lifecycle: credentials in, signed token pairs out.

use std::sync::Arc;

use tracing::{info, warn};

use portal_core::config::AuthConfig;
use portal_database::UserStore;
use portal_entity::user::User;

use crate::error::AuthError;
use crate::jwt::{AccessClaims, JwtDecoder, JwtEncoder, TokenPair};
use crate::password::{PasswordHasher, PasswordValidator};

/// Issues and validates access/refresh token pairs.
///
/// Tokens are stateless: nothing is persisted and nothing is revoked. A pair
/// stays valid until its embedded expiry even after a password change.
#[derive(Clone)]
pub struct TokenService {
    store: Arc<dyn UserStore>,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    /// Verified against on unknown usernames so both failure paths cost one
    /// Argon2 run.
    decoy_hash: Option<String>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("encoder", &self.encoder)
            .field("validator", &self.validator)
            .finish()
    }
}

impl TokenService {
    pub fn new(store: Arc<dyn UserStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
            decoy_hash: PasswordHasher::new()
                .hash_password("decoy-password-never-matches")
                .ok(),
        }
    }

    /// Exchange a username and password for a token pair.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AuthError> {
        let Some(user) = self.store.find_by_username(username).await? else {
            if let Some(decoy) = &self.decoy_hash {
                let _ = self.hasher.verify_password(password, decoy);
            }
            warn!(username, "Login failed: unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.encoder.generate_token_pair(&user)?;
        info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(pair)
    }

    /// Mint a brand-new pair from a valid refresh token.
    ///
    /// The access claims reflect the user's role as stored now, not as it was
    /// when the refresh token was issued.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;
        let user = self
            .store
            .find_by_id(claims.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let pair = self.encoder.generate_token_pair(&user)?;
        info!(
            user_id = user.id,
            previous_expiry = %claims.expires_at(),
            "Tokens refreshed"
        );
        Ok(pair)
    }

    /// Replace a user's password after checking the current one.
    ///
    /// Outstanding tokens are left untouched.
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify_password(current_password, &user.password_hash)? {
            warn!(user_id, "Password change rejected: current password mismatch");
            return Err(AuthError::IncorrectPassword);
        }

        self.validator
            .validate(new_password)
            .map_err(|e| AuthError::InvalidInput(e.message))?;

        let hash = self.hasher.hash_password(new_password)?;
        if !self.store.update_password(user_id, &hash).await? {
            return Err(AuthError::UserNotFound);
        }

        info!(user_id, "Password changed");
        Ok(())
    }

    /// Verify an access token's signature and expiry.
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.decoder.decode_access_token(token)
    }

    /// Fetch the live record behind a set of claims.
    pub async fn resolve_user(&self, user_id: i64) -> Result<User, AuthError> {
        self.store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
