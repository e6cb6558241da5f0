//! HTTP client for WeatherAPI.com.
//!
//! Two lookups are supported: current conditions and a one-day hourly
//! forecast. Failures normalize to [`ClientError`]; when the provider
//! returns a structured error payload its message is surfaced verbatim,
//! otherwise callers see a generic fallback.

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{ForecastBundle, HourlyEntry, LocationQuery, WeatherSnapshot};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Shown when the provider fails without a structured error message.
pub const GENERIC_REQUEST_ERROR: &str = "Failed to fetch weather data. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The provider rejected the request; the message is the provider's own
    /// `error.message` when present, [`GENERIC_REQUEST_ERROR`] otherwise.
    #[error("{0}")]
    Request(String),

    #[error("Failed to reach WeatherAPI.com: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse WeatherAPI.com response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("WeatherAPI.com response contained no forecast data")]
    MissingForecast,
}

impl ClientError {
    /// Message suitable for the inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Request(message) => message.clone(),
            _ => GENERIC_REQUEST_ERROR.to_string(),
        }
    }
}

/// Options for the forecast endpoint. All observed callers ask for a single
/// day with a 24-hour breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastOptions {
    pub days: u32,
    pub hours: u32,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self { days: 1, hours: 24 }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint root, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    pub async fn fetch_current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, ClientError> {
        let url = format!("{}/current.json", self.base_url);
        let q = query.as_query_value();

        tracing::debug!(query = %q, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", q.as_str()), ("aqi", "no")])
            .send()
            .await?;

        let body = success_body(res).await?;
        let parsed: WaCurrentResponse = serde_json::from_str(&body)?;

        Ok(snapshot_from(parsed.location, parsed.current))
    }

    pub async fn fetch_forecast(
        &self,
        query: &LocationQuery,
        options: ForecastOptions,
    ) -> Result<ForecastBundle, ClientError> {
        let url = format!("{}/forecast.json", self.base_url);
        let q = query.as_query_value();
        let days = options.days.to_string();
        let hours = options.hours.to_string();

        tracing::debug!(query = %q, days = %days, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", q.as_str()),
                ("days", days.as_str()),
                ("hours", hours.as_str()),
            ])
            .send()
            .await?;

        let body = success_body(res).await?;
        let parsed: WaForecastResponse = serde_json::from_str(&body)?;

        let current = snapshot_from(parsed.location, parsed.current);
        let day = parsed
            .forecast
            .forecastday
            .into_iter()
            .next()
            .ok_or(ClientError::MissingForecast)?;
        let hourly = day.hour.into_iter().map(hourly_from).collect();

        Ok(ForecastBundle { current, hourly })
    }
}

/// Returns the response body on success, a normalized error otherwise.
async fn success_body(res: reqwest::Response) -> Result<String, ClientError> {
    let status = res.status();
    let body = res.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    tracing::warn!(%status, body = %truncate_body(&body), "provider request failed");
    Err(ClientError::Request(provider_error_message(&body)))
}

fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<WaErrorResponse>(body)
        .map(|payload| payload.error.message)
        .unwrap_or_else(|_| GENERIC_REQUEST_ERROR.to_string())
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaCurrentResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

#[derive(Debug, Deserialize)]
struct WaError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorResponse {
    error: WaError,
}

fn snapshot_from(location: WaLocation, current: WaCurrent) -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: location.name,
        condition_text: current.condition.text,
        temperature_c: current.temp_c,
        temperature_f: current.temp_f,
        condition_icon: current.condition.icon.as_deref().map(absolute_icon_url),
    }
}

fn hourly_from(hour: WaHour) -> HourlyEntry {
    HourlyEntry {
        time_label: hour_label(&hour.time),
        condition_text: hour.condition.text,
        temperature_c: hour.temp_c,
        temperature_f: hour.temp_f,
    }
}

/// Provider icon refs are protocol-relative (`//cdn.weatherapi.com/...`).
fn absolute_icon_url(raw: &str) -> String {
    if raw.starts_with("//") { format!("https:{raw}") } else { raw.to_string() }
}

/// Provider hour timestamps look like `2026-08-07 14:00`; display only the
/// clock part, keeping the raw string if the shape ever changes.
fn hour_label(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_is_passed_through() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        assert_eq!(provider_error_message(body), "No matching location found.");
    }

    #[test]
    fn unstructured_error_body_falls_back_to_generic_message() {
        assert_eq!(provider_error_message("Bad Gateway"), GENERIC_REQUEST_ERROR);
        assert_eq!(provider_error_message(r#"{"detail":"nope"}"#), GENERIC_REQUEST_ERROR);
        assert_eq!(provider_error_message(""), GENERIC_REQUEST_ERROR);
    }

    #[test]
    fn protocol_relative_icons_become_https() {
        assert_eq!(
            absolute_icon_url("//cdn.weatherapi.com/weather/64x64/day/113.png"),
            "https://cdn.weatherapi.com/weather/64x64/day/113.png"
        );
        assert_eq!(
            absolute_icon_url("https://cdn.weatherapi.com/x.png"),
            "https://cdn.weatherapi.com/x.png"
        );
    }

    #[test]
    fn hour_labels_keep_only_the_clock_part() {
        assert_eq!(hour_label("2026-08-07 09:00"), "09:00");
        assert_eq!(hour_label("2026-08-07 23:00"), "23:00");
    }

    #[test]
    fn unparseable_hour_labels_are_kept_verbatim() {
        assert_eq!(hour_label("tomorrow-ish"), "tomorrow-ish");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(300);
        let truncated = truncate_body(&body);
        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }
}
