use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{WeatherQuery, WeatherResult};

pub mod openweather;

/// Abstraction over the weather data source.
///
/// Infallible by construction: transport and payload problems come back as
/// [`WeatherResult`] variants, so callers handle one shape and tests can
/// substitute a canned implementation.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> WeatherResult;
}
