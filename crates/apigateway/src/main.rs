use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::Config, utils::Logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let logger = Logger::new("apigateway", config.is_dev);

    let state = AppState::from_config(&config);

    info!(
        "⚙️ Page controls default to {} slots with a window of {}",
        config.pagination.max_pages_to_show, config.pagination.window_size
    );

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    logger.shutdown();

    Ok(())
}
