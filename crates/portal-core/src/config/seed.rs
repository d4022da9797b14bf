//! Default account seeding.

use serde::{Deserialize, Serialize};

/// Controls creation of the built-in admin, teacher and student accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed missing default accounts when the server starts.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_teacher_password")]
    pub teacher_password: String,
    #[serde(default = "default_student_password")]
    pub student_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            admin_password: default_admin_password(),
            teacher_password: default_teacher_password(),
            student_password: default_student_password(),
        }
    }
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_teacher_password() -> String {
    "teacher123".to_string()
}

fn default_student_password() -> String {
    "student123".to_string()
}
