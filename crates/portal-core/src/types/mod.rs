//! Core type definitions used across the portal workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
