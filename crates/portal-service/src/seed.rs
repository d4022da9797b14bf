//! Idempotent creation of the built-in accounts.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use portal_auth::password::PasswordHasher;
use portal_core::config::SeedConfig;
use portal_core::error::AppError;
use portal_database::UserStore;
use portal_entity::user::{CreateUser, UserRole};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: Vec<String>,
    /// Usernames that already existed and were left untouched.
    pub skipped: Vec<String>,
}

/// Creates `admin`, `teacher001` and `student001` when they are missing.
#[derive(Clone)]
pub struct Seeder {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl Seeder {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
        }
    }

    pub async fn run(&self, config: &SeedConfig) -> Result<SeedReport, AppError> {
        let accounts = [
            ("admin", config.admin_password.as_str(), UserRole::Admin),
            ("teacher001", config.teacher_password.as_str(), UserRole::Teacher),
            ("student001", config.student_password.as_str(), UserRole::Student),
        ];

        let mut report = SeedReport::default();
        for (username, password, role) in accounts {
            if self.store.find_by_username(username).await?.is_some() {
                debug!(username, "Seed account already present");
                report.skipped.push(username.to_string());
                continue;
            }

            self.store
                .create(&CreateUser {
                    username: username.to_string(),
                    password_hash: self.hasher.hash_password(password)?,
                    role,
                    is_active: true,
                })
                .await?;
            report.created.push(username.to_string());
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Default accounts seeded"
        );
        Ok(report)
    }
}
