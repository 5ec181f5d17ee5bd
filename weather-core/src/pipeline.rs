//! The message-to-reply pipeline: normalize input, run the lookup, render.
//!
//! One implementation shared by every transport binding. The transport only
//! supplies the raw text and sends the returned string back; it never sees
//! an error.

use tracing::debug;

use crate::format;
use crate::model::WeatherQuery;
use crate::provider::WeatherProvider;

/// Trim the raw message text into a city query, or reject it.
///
/// Empty and whitespace-only input short-circuits the pipeline: no network
/// call is made for it.
pub fn normalize_city(text: &str) -> Option<WeatherQuery> {
    let city = text.trim();
    if city.is_empty() {
        None
    } else {
        Some(WeatherQuery::new(city))
    }
}

/// Handle one free-text message end to end. Always produces a reply.
pub async fn handle_city_message(provider: &dyn WeatherProvider, text: &str) -> String {
    let Some(query) = normalize_city(text) else {
        return format::EMPTY_INPUT_REPLY.to_string();
    };

    debug!(city = %query.city, "looking up current weather");
    let result = provider.current_weather(&query).await;
    format::render(&result)
}
