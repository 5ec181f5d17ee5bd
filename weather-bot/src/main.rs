//! Binary crate for the Telegram weather bot.
//!
//! This crate focuses on:
//! - Process startup (env loading, logging, fatal config validation)
//! - Wiring teloxide handlers to the core pipeline
//! - Transport selection: webhook on hosted platforms, polling locally

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::info;
use url::Url;

use weather_core::{Config, OpenWeatherProvider};

mod handlers;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Missing token or API key must stop the process before it serves anything.
    let config = Config::from_env().context("configuration is invalid, refusing to start")?;

    let provider =
        Arc::new(OpenWeatherProvider::new(&config).context("failed to build weather provider")?);

    let bot = Bot::new(config.bot_token.clone());

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<handlers::Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(Update::filter_message().endpoint({
            let provider = Arc::clone(&provider);
            move |bot: Bot, msg: Message| {
                let provider = Arc::clone(&provider);
                async move { handlers::handle_text_message(bot, msg, provider).await }
            }
        }));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .enable_ctrlc_handler()
        .build();

    match &config.webhook_host {
        Some(host) => {
            // The platform pushes updates to us; the path is the bot token,
            // so only Telegram (which knows the token) can hit it.
            let addr = ([0, 0, 0, 0], config.port).into();
            let url: Url = format!("https://{host}/{}", config.bot_token)
                .parse()
                .context("webhook URL is not valid")?;

            info!(host = %host, port = config.port, "starting in webhook mode");

            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url))
                .await
                .context("failed to register the webhook")?;

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("error from the webhook listener"),
                )
                .await;
        }
        None => {
            info!("starting in long-polling mode");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
