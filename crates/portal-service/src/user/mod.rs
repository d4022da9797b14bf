//! User directory: administrative CRUD over accounts.

pub mod directory;

pub use directory::{NewUser, UserDirectoryService};
