//! Custom Axum extractors.
//!
//! Each one rejects with [`crate::error::ApiError`] so failures render in
//! the standard envelope instead of Axum's plain-text defaults.

pub mod auth;
pub mod json;
pub mod path;
pub mod query;

pub use auth::{AdminUser, AuthUser};
pub use json::ValidatedJson;
pub use path::UserId;
pub use query::ApiQuery;
