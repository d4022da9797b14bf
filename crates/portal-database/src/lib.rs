//! # portal-database
//!
//! The [`UserStore`] abstraction consumed by the services, its PostgreSQL
//! implementation, and a process-local implementation used for development
//! and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryUserStore;
pub use repositories::UserRepository;
pub use store::UserStore;
