mod bot;
mod config;
mod error;
mod model;
mod service;
mod util;

use dioxus_logger::tracing::{self, Level};

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!("Discord bot error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting the bot...");
    tracing::info!("geokyle version: {}", env!("CARGO_PKG_VERSION"));

    let client = bot::start::init_bot(&config).await?;
    bot::start::start_bot(client).await?;

    tracing::info!("Bot shut down");

    Ok(())
}
