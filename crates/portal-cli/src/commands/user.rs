//! User management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use portal_core::config::AppConfig;
use portal_core::error::AppError;
use portal_core::types::PageRequest;
use portal_entity::user::{UpdateUser, User, UserFilter, UserRole};
use portal_service::{NewUser, UserDirectoryService};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users, newest first
    List {
        /// Filter by role (admin, teacher, student, staff)
        #[arg(short, long)]
        role: Option<UserRole>,
        /// Substring match on username
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
    /// Create an active user
    Create {
        username: String,
        #[arg(short, long, default_value = "student")]
        role: UserRole,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Reactivate a user
    Enable { username: String },
    /// Deactivate a user; existing tokens stop working immediately
    Disable { username: String },
}

#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    role: String,
    active: bool,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            role: u.role.to_string(),
            active: u.is_active,
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let directory = UserDirectoryService::new(store.clone(), &config.auth);

    match &args.command {
        UserCommand::List {
            role,
            search,
            page,
            limit,
        } => {
            let filter = UserFilter {
                search: search.clone(),
                role: *role,
                is_active: None,
            };
            let result = directory
                .list_users(&filter, PageRequest::new(Some(*page), Some(*limit)))
                .await?;

            let rows: Vec<UserRow> = result.items.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table && result.total > 0 {
                println!(
                    "Page {} of {} ({} users)",
                    result.page, result.total_pages, result.total
                );
            }
        }
        UserCommand::Create {
            username,
            role,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = directory
                .create_user(NewUser {
                    username: username.clone(),
                    password,
                    role: *role,
                })
                .await?;

            match format {
                OutputFormat::Json => output::print_json(&UserRow::from(&user)),
                OutputFormat::Table => {
                    output::print_success(&format!("User '{}' created", user.username));
                    output::print_kv("id", &user.id.to_string());
                    output::print_kv("role", user.role.as_str());
                }
            }
        }
        UserCommand::Enable { username } => {
            set_active(&directory, store.as_ref(), username, true).await?;
            output::print_success(&format!("User '{username}' enabled"));
        }
        UserCommand::Disable { username } => {
            set_active(&directory, store.as_ref(), username, false).await?;
            output::print_success(&format!("User '{username}' disabled"));
        }
    }

    Ok(())
}

async fn set_active(
    directory: &UserDirectoryService,
    store: &dyn portal_database::UserStore,
    username: &str,
    is_active: bool,
) -> Result<(), AppError> {
    let user = store
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

    directory
        .update_user(
            user.id,
            UpdateUser {
                role: None,
                is_active: Some(is_active),
            },
        )
        .await?;
    Ok(())
}
