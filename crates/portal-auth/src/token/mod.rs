//! Login, refresh and password-change flows.

pub mod service;

pub use service::TokenService;
