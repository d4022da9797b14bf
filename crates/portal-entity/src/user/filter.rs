//! Listing filter for the user directory.

use serde::{Deserialize, Serialize};

use super::model::User;
use super::role::UserRole;

/// Conjunctive filter; each `Some` field narrows the match set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Case-sensitive username substring.
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

impl UserFilter {
    /// Evaluate the filter against an in-memory record.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(search) = &self.search {
            if !user.username.contains(search.as_str()) {
                return false;
            }
        }
        if self.role.is_some_and(|role| role != user.role) {
            return false;
        }
        if self.is_active.is_some_and(|active| active != user.is_active) {
            return false;
        }
        true
    }
}
