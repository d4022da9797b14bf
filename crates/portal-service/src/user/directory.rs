//! Listing, lookup, creation, partial update and deletion of accounts.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use portal_auth::password::{PasswordHasher, PasswordValidator};
use portal_core::config::AuthConfig;
use portal_core::error::AppError;
use portal_core::types::{PageRequest, PageResponse};
use portal_database::UserStore;
use portal_entity::user::{CreateUser, UpdateUser, User, UserFilter, UserRole};

/// Shortest accepted username, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Input for [`UserDirectoryService::create_user`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    /// Plaintext; hashed before it reaches the store.
    pub password: String,
    pub role: UserRole,
}

/// Administrative operations on user records.
#[derive(Clone)]
pub struct UserDirectoryService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

impl std::fmt::Debug for UserDirectoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectoryService")
            .field("validator", &self.validator)
            .finish()
    }
}

impl UserDirectoryService {
    pub fn new(store: Arc<dyn UserStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
            validator: PasswordValidator::new(config),
        }
    }

    /// One page of matching users, newest first, plus the full match count.
    pub async fn list_users(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        let total = self.store.count(filter).await?;
        let items = self.store.find_page(filter, &page).await?;
        Ok(PageResponse::new(items, page, total))
    }

    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))
    }

    /// Create an active account. Fails with a conflict if the username exists.
    pub async fn create_user(&self, req: NewUser) -> Result<User, AppError> {
        let username = req.username.trim();
        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(AppError::validation(format!(
                "Username must be at least {MIN_USERNAME_LENGTH} characters"
            )));
        }
        self.validator.validate(&req.password)?;

        if self.store.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("username already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .store
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role: req.role,
                is_active: true,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, role = %user.role, "User created");
        Ok(user)
    }

    /// Apply only the supplied fields.
    pub async fn update_user(&self, id: i64, changes: UpdateUser) -> Result<User, AppError> {
        let user = self
            .store
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))?;

        info!(
            user_id = id,
            role = ?changes.role,
            is_active = ?changes.is_active,
            "User updated"
        );
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::not_found("user not found"));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }

    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use portal_core::error::ErrorKind;
    use portal_database::MemoryUserStore;

    use super::*;

    fn service() -> UserDirectoryService {
        UserDirectoryService::new(
            Arc::new(MemoryUserStore::new()),
            &AuthConfig::new("a-secret", "r-secret"),
        )
    }

    fn new_user(username: &str, role: UserRole) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "password1".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn page_two_of_twenty_five() {
        let directory = service();
        for i in 0..25 {
            directory
                .create_user(new_user(&format!("student{i:02}"), UserRole::Student))
                .await
                .unwrap();
        }

        let page = directory
            .list_users(&UserFilter::default(), PageRequest::new(Some(2), Some(10)))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let directory = service();
        let first = directory
            .create_user(new_user("teacher001", UserRole::Teacher))
            .await
            .unwrap();
        let err = directory
            .create_user(new_user("teacher001", UserRole::Staff))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let fetched = directory.get_user(first.id).await.unwrap();
        assert_eq!(fetched.role, UserRole::Teacher);
        assert!(fetched.is_active);
    }

    #[tokio::test]
    async fn created_password_is_hashed() {
        let directory = service();
        let user = directory
            .create_user(new_user("staff01", UserRole::Staff))
            .await
            .unwrap();
        assert_ne!(user.password_hash, "password1");
        assert!(PasswordHasher::new()
            .verify_password("password1", &user.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn create_rejects_short_username_and_password() {
        let directory = service();
        let err = directory
            .create_user(new_user("ab", UserRole::Staff))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = directory
            .create_user(NewUser {
                username: "staff02".into(),
                password: "12345".into(),
                role: UserRole::Staff,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let directory = service();
        let user = directory
            .create_user(new_user("teacher002", UserRole::Teacher))
            .await
            .unwrap();

        directory
            .update_user(user.id, UpdateUser { role: None, is_active: Some(false) })
            .await
            .unwrap();

        let fetched = directory.get_user(user.id).await.unwrap();
        assert_eq!(fetched.role, UserRole::Teacher);
        assert!(!fetched.is_active);
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let directory = service();
        assert_eq!(directory.get_user(42).await.unwrap_err().kind, ErrorKind::NotFound);
        assert_eq!(
            directory
                .update_user(42, UpdateUser::default())
                .await
                .unwrap_err()
                .kind,
            ErrorKind::NotFound
        );
        assert_eq!(directory.delete_user(42).await.unwrap_err().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn filters_narrow_the_listing() {
        let directory = service();
        directory.create_user(new_user("teacher001", UserRole::Teacher)).await.unwrap();
        let student = directory.create_user(new_user("student001", UserRole::Student)).await.unwrap();
        directory.create_user(new_user("student002", UserRole::Student)).await.unwrap();
        directory
            .update_user(student.id, UpdateUser { role: None, is_active: Some(false) })
            .await
            .unwrap();

        let filter = UserFilter {
            role: Some(UserRole::Student),
            is_active: Some(true),
            ..UserFilter::default()
        };
        let page = directory.list_users(&filter, PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].username, "student002");
    }
}
