//! Integration tests for the OpenWeather lookup against a mock HTTP server.
//!
//! These drive the full pipeline (normalization, HTTP call, classification,
//! formatting) and verify the reply text for each outcome.

use weather_core::{Config, OpenWeatherProvider, WeatherQuery, WeatherResult};
use weather_core::{format, pipeline};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "BOT_TOKEN" => Some("123:test-token".to_string()),
        "WEATHER_API_KEY" => Some("test-api-key".to_string()),
        _ => None,
    })
    .expect("test config must resolve")
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url(&test_config(), server.uri())
        .expect("failed to build provider")
}

fn madrid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Madrid",
        "sys": {"country": "ES"},
        "main": {"temp": 21.5, "feels_like": 20.0, "humidity": 40},
        "weather": [{"main": "Clear", "description": "clear sky"}],
        "wind": {"speed": 3.1}
    })
}

#[tokio::test]
async fn madrid_lookup_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Madrid"))
        .and(query_param("appid", "test-api-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(madrid_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let reply = pipeline::handle_city_message(&provider, "Madrid").await;

    assert!(reply.starts_with("☀️"));
    assert!(reply.contains("Madrid, ES"));
    assert!(reply.contains("21.5°C"));
    assert!(reply.contains("20.0°C"));
    assert!(reply.contains("40%"));
    assert!(reply.contains("3.1 m/s"));
    assert!(reply.contains("Clear Sky"));
}

#[tokio::test]
async fn not_found_status_gives_fixed_reply_and_no_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let reply = pipeline::handle_city_message(&provider, "Atlantis").await;

    assert_eq!(reply, format::CITY_NOT_FOUND_REPLY);
}

#[tokio::test]
async fn server_errors_also_read_as_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider_result(&provider, "Madrid").await;

    assert_eq!(result, WeatherResult::CityNotFound);
}

#[tokio::test]
async fn malformed_payload_gives_unexpected_failure_reply() {
    let server = MockServer::start().await;

    // 200 but `main.temp` is missing.
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Madrid",
            "sys": {"country": "ES"},
            "main": {"feels_like": 20.0, "humidity": 40},
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "wind": {"speed": 3.1}
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let reply = pipeline::handle_city_message(&provider, "Madrid").await;

    assert_eq!(reply, format::UNEXPECTED_FAILURE_REPLY);
}

#[tokio::test]
async fn connection_refused_gives_network_failure_reply() {
    // Bind a port, then free it again so nothing is listening there.
    let refused_addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        addr
    };

    let provider =
        OpenWeatherProvider::with_base_url(&test_config(), format!("http://{refused_addr}"))
            .expect("failed to build provider");

    let reply = pipeline::handle_city_message(&provider, "Madrid").await;
    assert_eq!(reply, format::NETWORK_FAILURE_REPLY);
}

#[tokio::test]
async fn empty_input_records_no_http_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(madrid_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let provider = provider_for(&server);

    for input in ["", "   ", "\t\n"] {
        let reply = pipeline::handle_city_message(&provider, input).await;
        assert_eq!(reply, format::EMPTY_INPUT_REPLY);
    }

    // MockServer verifies expect(0) on drop.
}

async fn provider_result(provider: &OpenWeatherProvider, city: &str) -> WeatherResult {
    use weather_core::WeatherProvider;
    provider.current_weather(&WeatherQuery::new(city)).await
}
