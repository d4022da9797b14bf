//! Command definitions and dispatch.

pub mod migrate;
pub mod seed;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use portal_core::config::{AppConfig, StoreProvider};
use portal_core::error::AppError;
use portal_database::{DatabasePool, UserRepository, UserStore};

/// STMADB portal administration
#[derive(Debug, Parser)]
#[command(name = "portal-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment; selects `config/<env>.toml`
    #[arg(short, long, env = "PORTAL_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Create the default admin, teacher and student accounts
    Seed,
    /// User management
    User(user::UserArgs),
}

impl Cli {
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Seed => seed::execute(&config, self.format).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
        }
    }
}

/// Open a pool against the configured PostgreSQL database.
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(
            "the CLI manages persistent data and requires database.provider = \"postgres\"",
        ));
    }
    DatabasePool::connect(&config.database).await
}

/// PostgreSQL-backed user store for commands that read or write accounts.
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, AppError> {
    let pool = create_db_pool(config).await?;
    Ok(Arc::new(UserRepository::new(pool.into_pool())))
}
