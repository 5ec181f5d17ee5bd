/// A normalized lookup request, built from one inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Current conditions for one city, as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_ms: f64,
    /// Free-form condition text, e.g. "clear sky".
    pub description: String,
    /// Coarse provider category, e.g. "Clear" or "Rain". Drives icon choice.
    pub category: String,
}

/// Outcome of one weather lookup. Exactly one variant per query.
///
/// Failures are data here, not errors: every variant maps to a fixed
/// user-facing reply and none of them propagates to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherResult {
    Report(WeatherReport),
    /// Provider answered with a non-success status. The provider body is
    /// deliberately not surfaced to the user.
    CityNotFound,
    /// The HTTP call itself failed: timeout, DNS, connection refused.
    NetworkFailure,
    /// Anything else, e.g. a 200 whose payload misses expected fields.
    UnexpectedFailure,
}
