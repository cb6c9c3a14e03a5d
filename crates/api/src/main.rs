//! Agendar - law office booking form
//!
//! Main entry point for the console application.

use agendar_lib::adapters::{run_console, ConsoleView};
use agendar_lib::utils::logging::init_tracing;
use agendar_lib::{load_config, AppContext};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before configuration is read
    let dotenv = dotenvy::dotenv();

    let config = load_config()?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => tracing::info!("Loaded .env from: {:?}", path),
        Err(e) => tracing::warn!("Could not load .env file: {}", e),
    }

    tracing::info!("Agendar starting...");
    let ctx = AppContext::new_with_config(config)?;

    let view = ConsoleView::new(std::io::stdout());
    let mut input = BufReader::new(tokio::io::stdin());
    let summary = run_console(&ctx, &mut input, &view).await?;

    tracing::info!(
        confirmed = summary.confirmed,
        rejected = summary.rejected,
        "Agendar session finished"
    );
    Ok(())
}
