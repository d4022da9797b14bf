//! # portal-service
//!
//! Business logic for the STMADB portal. Services receive their
//! dependencies at construction time as `Arc` references.

pub mod seed;
pub mod user;

pub use seed::{SeedReport, Seeder};
pub use user::{NewUser, UserDirectoryService};
