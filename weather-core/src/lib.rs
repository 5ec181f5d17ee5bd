//! Core library for the weather Telegram bot.
//!
//! This crate defines:
//! - Configuration resolved from the process environment
//! - Abstraction over the weather provider and its OpenWeather client
//! - The message-to-reply pipeline (validation, lookup, formatting)
//!
//! It is used by `weather-bot`, but carries no Telegram types itself, so any
//! other transport binding could reuse it.

pub mod config;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use config::{Config, ConfigError};
pub use model::{WeatherQuery, WeatherReport, WeatherResult};
pub use pipeline::handle_city_message;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
