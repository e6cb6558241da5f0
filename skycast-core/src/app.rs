//! View state machine for the lookup flow.
//!
//! Front-ends translate user actions into [`Event`]s and feed them through
//! [`AppState::handle`], which mutates the state and may hand back an
//! [`Effect`] to execute (resolve the location, issue a fetch). Resolutions
//! come back as events, so the transition logic stays pure and testable while
//! all I/O lives with the caller.
//!
//! Fetches carry a monotonically increasing sequence number. A resolution
//! whose number is no longer the latest issued one is discarded, so when two
//! fetches overlap the last one requested wins regardless of arrival order.

use crate::client::ClientError;
use crate::location::Coordinates;
use crate::model::{ForecastBundle, HourlyEntry, LocationQuery, TemperatureUnit, WeatherSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// What went wrong, for the inline banner. At most one is shown at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    LocationUnavailable,
    EmptyQuery,
    Request(String),
}

impl UiError {
    pub fn message(&self) -> &str {
        match self {
            UiError::LocationUnavailable => {
                "Unable to access your location. Search for a city instead."
            }
            UiError::EmptyQuery => "Enter a city name to search.",
            UiError::Request(message) => message,
        }
    }
}

#[derive(Debug)]
pub enum Event {
    /// Initial bootstrap: resolve the location, then fetch.
    Started,
    /// The "use my location" action; same flow as `Started`, re-triggerable.
    LocationRequested,
    LocationResolved(Coordinates),
    LocationDenied,
    SearchSubmitted(String),
    UnitToggled,
    ThemeToggled,
    FetchFinished {
        seq: u64,
        outcome: Result<ForecastBundle, ClientError>,
    },
}

/// Side effect the caller must execute after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResolveLocation,
    Fetch { seq: u64, query: LocationQuery },
}

#[derive(Debug, Default)]
pub struct AppState {
    pub phase: Phase,
    pub unit: TemperatureUnit,
    pub theme: Theme,
    /// Last successfully fetched conditions. A later failed fetch leaves
    /// these in place; the banner renders alongside the stale data.
    pub weather: Option<WeatherSnapshot>,
    pub hourly: Vec<HourlyEntry>,
    pub error: Option<UiError>,
    latest_seq: u64,
}

impl AppState {
    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Started | Event::LocationRequested => {
                self.phase = Phase::Loading;
                self.error = None;
                Some(Effect::ResolveLocation)
            }
            Event::LocationResolved(coords) => {
                self.phase = Phase::Loading;
                self.error = None;
                Some(self.issue_fetch(LocationQuery::coordinates(
                    coords.latitude,
                    coords.longitude,
                )))
            }
            Event::LocationDenied => {
                self.phase = Phase::Error;
                self.error = Some(UiError::LocationUnavailable);
                None
            }
            Event::SearchSubmitted(text) => {
                let query = LocationQuery::place(&text);
                if query.is_empty() {
                    self.phase = Phase::Error;
                    self.error = Some(UiError::EmptyQuery);
                    return None;
                }

                self.phase = Phase::Loading;
                self.error = None;
                Some(self.issue_fetch(query))
            }
            Event::UnitToggled => {
                self.unit = self.unit.toggled();
                None
            }
            Event::ThemeToggled => {
                self.theme = self.theme.toggled();
                None
            }
            Event::FetchFinished { seq, outcome } => {
                if seq != self.latest_seq {
                    tracing::debug!(seq, latest = self.latest_seq, "discarding superseded fetch");
                    return None;
                }

                match outcome {
                    Ok(bundle) => {
                        self.phase = Phase::Success;
                        self.weather = Some(bundle.current);
                        self.hourly = bundle.hourly;
                        self.error = None;
                    }
                    Err(err) => {
                        self.phase = Phase::Error;
                        self.error = Some(UiError::Request(err.user_message()));
                    }
                }
                None
            }
        }
    }

    fn issue_fetch(&mut self, query: LocationQuery) -> Effect {
        self.latest_seq += 1;
        Effect::Fetch { seq: self.latest_seq, query }
    }

    /// Temperature to display for the current conditions, honoring the unit.
    pub fn displayed_temperature(&self) -> Option<f64> {
        self.weather.as_ref().map(|w| w.temperature(self.unit))
    }
}
