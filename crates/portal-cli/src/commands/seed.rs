//! Default account seeding.

use crate::output::{self, OutputFormat};
use portal_core::config::AppConfig;
use portal_core::error::AppError;
use portal_service::Seeder;

/// Seed regardless of `seed.enabled`; running the command is the opt-in.
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let report = Seeder::new(store).run(&config.seed).await?;

    match format {
        OutputFormat::Json => output::print_json(&report),
        OutputFormat::Table => {
            output::print_success("Seeding finished.");
            output::print_kv("created", &list_or_none(&report.created));
            output::print_kv("skipped", &list_or_none(&report.skipped));
        }
    }
    Ok(())
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
