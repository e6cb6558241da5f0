use serde::{Deserialize, Serialize};

/// Where to look up weather: a coordinate pair or a place name.
/// Exactly one representation is active per request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates { latitude: f64, longitude: f64 },
    Place(String),
}

impl LocationQuery {
    pub fn place(text: &str) -> Self {
        LocationQuery::Place(text.trim().to_string())
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        LocationQuery::Coordinates { latitude, longitude }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LocationQuery::Coordinates { .. } => false,
            LocationQuery::Place(text) => text.is_empty(),
        }
    }

    /// Value of the provider's `q` parameter: `"<lat>,<lon>"` or the place name.
    pub fn as_query_value(&self) -> String {
        match self {
            LocationQuery::Coordinates { latitude, longitude } => {
                format!("{latitude},{longitude}")
            }
            LocationQuery::Place(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Parsed current conditions for one location. Replaced wholesale on each
/// successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition_text: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
    /// Absolute URL of the provider's condition icon, when one was supplied.
    pub condition_icon: Option<String>,
}

impl WeatherSnapshot {
    /// The provider supplies both units; no conversion happens client-side.
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_c,
            TemperatureUnit::Fahrenheit => self.temperature_f,
        }
    }
}

/// One hour of today's forecast, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time_label: String,
    pub condition_text: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
}

impl HourlyEntry {
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_c,
            TemperatureUnit::Fahrenheit => self.temperature_f,
        }
    }
}

/// Result of a forecast lookup: current conditions plus the hourly breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub current: WeatherSnapshot,
    pub hourly: Vec<HourlyEntry>,
}
