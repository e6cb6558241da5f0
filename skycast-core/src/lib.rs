//! Core library for the `skycast` weather lookup tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com HTTP client
//! - Condition classification and shared domain models
//! - The view state machine driven by front-ends such as `skycast-cli`
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod app;
pub mod client;
pub mod condition;
pub mod config;
pub mod location;
pub mod model;

pub use app::{AppState, Effect, Event, Phase, Theme, UiError};
pub use client::{ClientError, ForecastOptions, WeatherClient};
pub use condition::ConditionKind;
pub use config::Config;
pub use location::{Coordinates, LocationError, LocationSource};
pub use model::{ForecastBundle, HourlyEntry, LocationQuery, TemperatureUnit, WeatherSnapshot};
