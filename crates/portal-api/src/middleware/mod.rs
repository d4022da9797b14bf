//! Tower/Axum middleware and route guards.

pub mod cors;
pub mod logging;
pub mod rbac;
