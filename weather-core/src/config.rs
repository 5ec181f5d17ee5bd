use std::env;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8443;
const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN is not set or empty. Set it to your Telegram bot token.")]
    MissingBotToken,

    #[error("WEATHER_API_KEY is not set or empty. Set it to your OpenWeather API key.")]
    MissingApiKey,

    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

/// Process configuration, resolved once at startup and passed by reference
/// into the transport and the pipeline. Nothing else reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token, used both for authentication and as the
    /// webhook path.
    pub bot_token: String,

    /// OpenWeather API key.
    pub weather_api_key: String,

    /// Port the webhook listener binds to. Ignored in polling mode.
    pub port: u16,

    /// Language hint forwarded to the weather provider.
    pub language: String,

    /// External hostname to serve the webhook on. `None` means long
    /// polling (local runs); set from the hosting platform's marker.
    pub webhook_host: Option<String>,
}

impl Config {
    /// Resolve configuration from process environment variables.
    ///
    /// Missing `BOT_TOKEN` or `WEATHER_API_KEY` is fatal: the caller is
    /// expected to log the error and exit before serving anything.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], but with an injected lookup so tests
    /// never have to mutate process-wide environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingBotToken)?;

        let weather_api_key = lookup("WEATHER_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let language = lookup("WEATHER_LANG").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        // Hosting platform marker: when present, the platform pushes
        // updates to us over HTTPS instead of us polling Telegram.
        let webhook_host = match lookup("RENDER") {
            Some(_) => lookup("RENDER_EXTERNAL_HOSTNAME"),
            None => None,
        };

        Ok(Self {
            bot_token,
            weather_api_key,
            port,
            language,
            webhook_host,
        })
    }
}
