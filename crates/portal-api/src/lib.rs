//! # portal-api
//!
//! HTTP API layer for the STMADB portal built on Axum.
//!
//! Provides the REST endpoints under `/api/v1`, the request-logging and CORS
//! middleware, custom extractors, DTOs, and the mapping from domain errors to
//! the `{success, message, data?}` response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
