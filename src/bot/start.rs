use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use serenity::cache::Settings as CacheSettings;

use crate::bot::handler::{CrosspostHandler, ReadyHandler, RoleToggleHandler};
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord bot client
///
/// Registers one handler per event type and injects the configuration each one
/// needs. Nothing is cached: handlers only read data carried on the events.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Client)` - Client ready to connect to the gateway
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config) -> Result<Client, AppError> {
    // Interactions are delivered regardless of intents
    let intents = GatewayIntents::GUILD_MESSAGES;

    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = 0;
    cache_settings.cache_guilds = false;
    cache_settings.cache_channels = false;
    cache_settings.cache_users = false;

    let client = Client::builder(&config.discord_bot_token, intents)
        .cache_settings(cache_settings)
        .event_handler(ReadyHandler)
        .event_handler(RoleToggleHandler)
        .event_handler(CrosspostHandler::new(config.videos_channel_id))
        .await?;

    Ok(client)
}

/// Runs the Discord bot until it is told to shut down
///
/// Connects to the gateway and blocks until an interrupt or terminate signal
/// closes every shard. Handler tasks still in flight at that point are not
/// awaited.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` - The bot shut down after a signal
/// - `Err(AppError)` - Connecting to the gateway failed (e.g. invalid token)
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        tracing::info!("Shutdown signal received, closing gateway connection");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    // Blocks until every shard has shut down
    client.start().await?;

    Ok(())
}

/// Waits for Ctrl-C, or SIGTERM on unix
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
