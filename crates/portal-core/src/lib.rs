//! # portal-core
//!
//! Core crate for the STMADB portal backend. Holds the configuration
//! schema, pagination types and the unified error system shared by every
//! other portal crate.
//!
//! This crate has **no** internal dependencies on other portal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
