//! Authentication failures.

use portal_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Everything the token service and the gate can reject a caller with.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Malformed, wrongly signed or expired token.
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("Authorization header is required")]
    MissingToken,
    #[error("Authorization header format must be 'Bearer <token>'")]
    MalformedHeader,
    /// The token's subject no longer exists.
    #[error("user not found")]
    UserNotFound,
    #[error("account is disabled")]
    AccountDisabled,
    #[error("current password is incorrect")]
    IncorrectPassword,
    #[error("You do not have permission to access this resource")]
    Forbidden,
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::MissingToken
            | Self::MalformedHeader
            | Self::UserNotFound
            | Self::AccountDisabled
            | Self::IncorrectPassword => ErrorKind::Unauthorized,
            Self::Forbidden => ErrorKind::Forbidden,
            Self::InvalidInput(_) => ErrorKind::Validation,
            Self::Store(err) => err.kind,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(inner) => inner,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}
