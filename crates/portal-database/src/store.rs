//! Storage seam for user records.

use async_trait::async_trait;

use portal_core::result::AppResult;
use portal_core::types::PageRequest;
use portal_entity::user::{CreateUser, UpdateUser, User, UserFilter};

/// Lookups and single-row mutations over user records.
///
/// Implementations report a duplicate username on [`UserStore::create`] as an
/// `ErrorKind::Conflict` error and every other backend failure as
/// `ErrorKind::Database`.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Exact, case-sensitive username match.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Size of the full set matching `filter`.
    async fn count(&self, filter: &UserFilter) -> AppResult<i64>;

    /// One page of matches, newest first.
    async fn find_page(&self, filter: &UserFilter, page: &PageRequest) -> AppResult<Vec<User>>;

    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Apply the present fields. `None` when no row has this id.
    async fn update(&self, id: i64, changes: &UpdateUser) -> AppResult<Option<User>>;

    /// Replace the password hash. `false` when no row has this id.
    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<bool>;

    /// Remove a row. `false` when no row has this id.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
