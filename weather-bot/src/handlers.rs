//! Teloxide handlers: thin adapters from chat updates to the core pipeline.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::debug;

use weather_core::{OpenWeatherProvider, format, pipeline};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Start the bot.
    Start,
    /// Show usage help.
    Help,
}

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> Result<()> {
    let reply = match cmd {
        Command::Start => {
            let first_name = msg
                .from
                .as_ref()
                .map(|user| user.first_name.as_str())
                .unwrap_or("there");
            format::start_reply(first_name)
        }
        Command::Help => format::help_reply(),
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

pub async fn handle_text_message(
    bot: Bot,
    msg: Message,
    provider: Arc<OpenWeatherProvider>,
) -> Result<()> {
    // Photos, stickers and the like have no text; stay silent on those.
    let Some(text) = msg.text() else {
        return Ok(());
    };

    debug!(chat_id = %msg.chat.id, "handling free-text message");
    let reply = pipeline::handle_city_message(provider.as_ref(), text).await;
    bot.send_message(msg.chat.id, reply).await?;

    Ok(())
}
