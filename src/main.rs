//! STMADB Portal server.
//!
//! Loads configuration, opens the user store, seeds default accounts when
//! asked to, and serves the HTTP API.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use portal_api::AppState;
use portal_core::config::{AppConfig, StoreProvider};
use portal_core::error::AppError;
use portal_database::{DatabasePool, MemoryUserStore, UserRepository, UserStore};
use portal_service::Seeder;

#[tokio::main]
async fn main() {
    let env = std::env::var("PORTAL_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(%env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting STMADB Portal v{}", env!("CARGO_PKG_VERSION"));

    let (store, pool) = open_store(&config).await?;

    if config.seed.enabled {
        Seeder::new(Arc::clone(&store)).run(&config.seed).await?;
    }

    let state = AppState::new(config, store);
    let result = portal_api::serve(state).await;

    if let Some(pool) = pool {
        pool.close().await;
    }
    result
}

/// Build the configured store; the pool is returned so it can be closed on exit.
async fn open_store(
    config: &AppConfig,
) -> Result<(Arc<dyn UserStore>, Option<DatabasePool>), AppError> {
    match config.database.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                portal_database::migration::run_migrations(pool.pool()).await?;
            }
            let repo = UserRepository::new(pool.pool().clone());
            Ok((Arc::new(repo), Some(pool)))
        }
        StoreProvider::Memory => {
            tracing::warn!("Using the in-memory user store; data is lost on restart");
            Ok((Arc::new(MemoryUserStore::new()), None))
        }
    }
}
