use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use birdcalls::bot;
use birdcalls::catalog::Catalog;
use birdcalls::config::BotConfig;
use birdcalls::localization::init_localization;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Bird Calls Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Arc::new(BotConfig::from_env()?);

    let catalog = Arc::new(Catalog::load(&config.birds_file, config.voices_dir.clone())?);
    info!(
        species_count = catalog.species_count(),
        birds_file = %config.birds_file.display(),
        "Species catalog loaded"
    );

    init_localization()?;

    // Initialize the bot
    let bot = Bot::new(config.token.clone());

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with shared catalog and config
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let catalog = Arc::clone(&catalog);
            let config = Arc::clone(&config);
            move |bot: Bot, msg: Message| {
                let catalog = Arc::clone(&catalog);
                let config = Arc::clone(&config);
                async move { bot::message_handler(bot, msg, catalog, config).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let catalog = Arc::clone(&catalog);
            let config = Arc::clone(&config);
            move |bot: Bot, q: CallbackQuery| {
                let catalog = Arc::clone(&catalog);
                let config = Arc::clone(&config);
                async move { bot::callback_handler(bot, q, catalog, config).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
