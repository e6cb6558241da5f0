//! Integration tests for the WeatherAPI.com client using wiremock.
//!
//! These verify request construction (endpoint, query parameters) and the
//! mapping of provider payloads, including the error-message passthrough.

use skycast_core::{ClientError, ForecastOptions, LocationQuery, WeatherClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url("TESTKEY".to_string(), format!("{}/v1", server.uri()))
}

fn current_payload(name: &str, condition: &str) -> serde_json::Value {
    serde_json::json!({
        "location": { "name": name, "country": "France", "localtime": "2026-08-07 13:30" },
        "current": {
            "temp_c": 21.0,
            "temp_f": 69.8,
            "condition": {
                "text": condition,
                "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png",
                "code": 1000
            }
        }
    })
}

fn forecast_payload(name: &str, hours: usize) -> serde_json::Value {
    let hour: Vec<serde_json::Value> = (0..hours)
        .map(|h| {
            serde_json::json!({
                "time": format!("2026-08-07 {h:02}:00"),
                "temp_c": 15.0 + h as f64,
                "temp_f": 59.0 + h as f64,
                "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png" }
            })
        })
        .collect();

    let mut payload = current_payload(name, "Sunny");
    payload["forecast"] = serde_json::json!({ "forecastday": [{ "hour": hour }] });
    payload
}

#[tokio::test]
async fn current_request_carries_key_query_and_aqi_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "TESTKEY"))
        .and(query_param("q", "Paris"))
        .and(query_param("aqi", "no"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload("Paris", "Sunny")))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server)
        .fetch_current(&LocationQuery::place("  Paris  "))
        .await
        .expect("current fetch must succeed");

    assert_eq!(snapshot.location_name, "Paris");
    assert_eq!(snapshot.condition_text, "Sunny");
    assert_eq!(snapshot.temperature_c, 21.0);
    assert_eq!(snapshot.temperature_f, 69.8);
    assert_eq!(
        snapshot.condition_icon.as_deref(),
        Some("https://cdn.weatherapi.com/weather/64x64/day/113.png")
    );
}

#[tokio::test]
async fn coordinates_are_sent_as_a_comma_joined_pair() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "48.8566,2.3522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload("Paris", "Sunny")))
        .mount(&server)
        .await;

    let snapshot = client_for(&server)
        .fetch_current(&LocationQuery::coordinates(48.8566, 2.3522))
        .await
        .expect("current fetch must succeed");

    assert_eq!(snapshot.location_name, "Paris");
}

#[tokio::test]
async fn forecast_request_asks_for_one_day_with_hourly_breakdown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", "TESTKEY"))
        .and(query_param("q", "Oslo"))
        .and(query_param("days", "1"))
        .and(query_param("hours", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload("Oslo", 24)))
        .expect(1)
        .mount(&server)
        .await;

    let bundle = client_for(&server)
        .fetch_forecast(&LocationQuery::place("Oslo"), ForecastOptions::default())
        .await
        .expect("forecast fetch must succeed");

    assert_eq!(bundle.current.location_name, "Oslo");
    assert_eq!(bundle.hourly.len(), 24);
    // Source order is preserved.
    assert_eq!(bundle.hourly[0].time_label, "00:00");
    assert_eq!(bundle.hourly[23].time_label, "23:00");
    assert_eq!(bundle.hourly[5].temperature_c, 20.0);
}

#[tokio::test]
async fn provider_error_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_current(&LocationQuery::place("Nowhereville"))
        .await
        .expect_err("fetch must fail");

    match err {
        ClientError::Request(message) => assert_eq!(message, "No matching location found."),
        other => panic!("expected a request error, got {other:?}"),
    }
}

#[tokio::test]
async fn unstructured_provider_failure_uses_the_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_forecast(&LocationQuery::place("Oslo"), ForecastOptions::default())
        .await
        .expect_err("fetch must fail");

    assert_eq!(err.user_message(), skycast_core::client::GENERIC_REQUEST_ERROR);
}

#[tokio::test]
async fn empty_forecastday_array_is_a_distinct_error() {
    let server = MockServer::start().await;

    let mut payload = current_payload("Oslo", "Sunny");
    payload["forecast"] = serde_json::json!({ "forecastday": [] });

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_forecast(&LocationQuery::place("Oslo"), ForecastOptions::default())
        .await
        .expect_err("fetch must fail");

    assert!(matches!(err, ClientError::MissingForecast));
}
