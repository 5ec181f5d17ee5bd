//! User-facing reply text.
//!
//! Everything the bot ever says lives here as fixed templates. Rendering is
//! a total function over [`WeatherResult`]: no variant leaks raw provider
//! output to the user.

use crate::model::{WeatherReport, WeatherResult};

pub const EMPTY_INPUT_REPLY: &str = "❌ Please enter a city name.";

pub const CITY_NOT_FOUND_REPLY: &str = "❌ I couldn't find that city.\n\
    • Check that the name is spelled correctly\n\
    • Try the English name for smaller cities\n\
    • Example: 'New York' instead of 'Nueva York'";

pub const NETWORK_FAILURE_REPLY: &str = "🌐 Connection error. Please try again in a moment.";

pub const UNEXPECTED_FAILURE_REPLY: &str =
    "⚠️ Something unexpected went wrong. Please try again later.";

/// Fallback icon for categories the table doesn't know.
const GENERIC_ICON: &str = "🌤️";

/// Icon for a provider weather category ("Clear", "Rain", ...).
pub fn weather_icon(category: &str) -> &'static str {
    match category {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Fog" => "🌫️",
        _ => GENERIC_ICON,
    }
}

/// Map a lookup outcome to the reply the user sees.
pub fn render(result: &WeatherResult) -> String {
    match result {
        WeatherResult::Report(report) => render_report(report),
        WeatherResult::CityNotFound => CITY_NOT_FOUND_REPLY.to_string(),
        WeatherResult::NetworkFailure => NETWORK_FAILURE_REPLY.to_string(),
        WeatherResult::UnexpectedFailure => UNEXPECTED_FAILURE_REPLY.to_string(),
    }
}

fn render_report(report: &WeatherReport) -> String {
    format!(
        "{icon} **Weather in {city}, {country}**\n\n\
         🌡️ **Temperature:** {temp:.1}°C\n\
         🤔 **Feels like:** {feels:.1}°C\n\
         💧 **Humidity:** {humidity}%\n\
         💨 **Wind:** {wind:.1} m/s\n\
         📝 **Conditions:** {description}\n\n\
         Have a nice day! ☀️",
        icon = weather_icon(&report.category),
        city = report.city_name,
        country = report.country_code,
        temp = report.temperature_c,
        feels = report.feels_like_c,
        humidity = report.humidity_pct,
        wind = report.wind_speed_ms,
        description = title_case(&report.description),
    )
}

/// Greeting for `/start`.
pub fn start_reply(first_name: &str) -> String {
    format!(
        "Hi {first_name}! 👋 🌤️\n\n\
         I'm your personal weather bot.\n\n\
         📍 **How to use me:**\n\
         Just type the name of any city and I'll tell you the current weather.\n\n\
         **Examples:**\n\
         • Madrid\n\
         • Buenos Aires\n\
         • Mexico City\n\
         • Tokyo\n\n\
         Try it now! ✨"
    )
}

/// Reply for `/help`.
pub fn help_reply() -> String {
    "🆘 **Help — Weather Bot** 🌤️\n\n\
     **Available commands:**\n\
     /start - Start the bot\n\
     /help - Show this help\n\n\
     **Basic usage:**\n\
     Just type the name of any city and you'll get its current weather.\n\n\
     **Example cities:**\n\
     • Madrid\n\
     • London\n\
     • Tokyo\n\
     • New York\n\
     • Paris\n\n\
     **Support:**\n\
     If something doesn't work, check that the city name is spelled correctly."
        .to_string()
}

/// Capitalize each word, lowering the rest: "clear sky" -> "Clear Sky".
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
