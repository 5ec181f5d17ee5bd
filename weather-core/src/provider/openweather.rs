use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::model::{WeatherQuery, WeatherReport, WeatherResult};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Upper bound for one lookup; a hanging provider must not hang the handler.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    language: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Like [`OpenWeatherProvider::new`] but against a custom endpoint.
    /// Tests point this at a local mock server.
    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key: config.weather_api_key.clone(),
            language: config.language.clone(),
            base_url: base_url.into(),
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> WeatherResult {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.language.as_str()),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, city, "weather request did not reach the provider");
                return WeatherResult::NetworkFailure;
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => classify_response(status, &body),
            Err(err) => {
                warn!(error = %err, city, "failed to read provider response body");
                WeatherResult::NetworkFailure
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> WeatherResult {
        self.fetch_current(&query.city).await
    }
}

/// Decide what one provider answer means.
///
/// Priority order: the caller has already ruled out transport failure, so
/// here it is status first, payload shape second. Any non-success status is
/// uniformly "city not found" — auth failures and rate limits included.
fn classify_response(status: StatusCode, body: &str) -> WeatherResult {
    if !status.is_success() {
        debug!(%status, "provider returned non-success status");
        return WeatherResult::CityNotFound;
    }

    match serde_json::from_str::<OwCurrentResponse>(body) {
        Ok(payload) => match report_from_payload(payload) {
            Some(report) => WeatherResult::Report(report),
            None => {
                warn!("provider payload contained no weather entries");
                WeatherResult::UnexpectedFailure
            }
        },
        Err(err) => {
            warn!(error = %err, "provider payload did not match the expected shape");
            WeatherResult::UnexpectedFailure
        }
    }
}

fn report_from_payload(payload: OwCurrentResponse) -> Option<WeatherReport> {
    let entry = payload.weather.into_iter().next()?;

    Some(WeatherReport {
        city_name: payload.name,
        country_code: payload.sys.country,
        temperature_c: payload.main.temp,
        feels_like_c: payload.main.feels_like,
        humidity_pct: payload.main.humidity,
        wind_speed_ms: payload.wind.speed,
        description: entry.description,
        category: entry.main,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}
