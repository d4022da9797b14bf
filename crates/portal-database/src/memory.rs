//! In-memory user store.
//!
//! Mirrors the PostgreSQL repository's semantics (unique usernames,
//! newest-first ordering, partial updates) over a `BTreeMap` guarded by a
//! tokio `RwLock`. Used by `provider = "memory"` and by the test suites.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::types::PageRequest;
use portal_entity::user::{CreateUser, UpdateUser, User, UserFilter};

use crate::store::UserStore;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// Process-local [`UserStore`]. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, ignoring filters.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Newest first; ids break ties between records created in the same instant.
fn newest_first(a: &User, b: &User) -> std::cmp::Ordering {
    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn count(&self, filter: &UserFilter) -> AppResult<i64> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().filter(|u| filter.matches(u)).count() as i64)
    }

    async fn find_page(&self, filter: &UserFilter, page: &PageRequest) -> AppResult<Vec<User>> {
        let inner = self.inner.read().await;
        let mut matched: Vec<&User> = inner.users.values().filter(|u| filter.matches(u)).collect();
        matched.sort_by(|a, b| newest_first(a, b));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(0);
        Ok(matched.into_iter().skip(offset).take(limit).cloned().collect())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.username == data.username) {
            return Err(AppError::conflict("username already exists"));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            is_active: data.is_active,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        debug!(user_id = user.id, "Inserted user into memory store");
        Ok(user)
    }

    async fn update(&self, id: i64, changes: &UpdateUser) -> AppResult<Option<User>> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(&id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.inner.write().await.users.remove(&id).is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
