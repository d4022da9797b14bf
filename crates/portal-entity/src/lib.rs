//! # portal-entity
//!
//! Domain entities for the STMADB portal. Database rows derive
//! `sqlx::FromRow`; value objects derive `Serialize`/`Deserialize`.

pub mod user;

pub use user::{CreateUser, UpdateUser, User, UserFilter, UserRole};
