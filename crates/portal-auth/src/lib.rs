//! # portal-auth
//!
//! Authentication and authorization for the STMADB portal.
//!
//! ## Modules
//!
//! - `jwt`: access/refresh claims, signing and verification
//! - `password`: Argon2id hashing and the minimum-length policy
//! - `token`: login, refresh and change-password flows
//! - `gate`: per-request bearer authentication and role allow-lists

pub mod error;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use gate::{AuthGate, AuthenticatedUser};
pub use jwt::{AccessClaims, JwtDecoder, JwtEncoder, RefreshClaims, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
pub use token::TokenService;
