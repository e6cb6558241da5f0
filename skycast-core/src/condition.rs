//! Classification of provider condition texts into display categories.
//!
//! The provider sends free-form texts like "Patchy rain possible". Rendering
//! only needs a coarse category, picked by case-insensitive substring tests
//! evaluated in a fixed priority order. The order is a contract: a text
//! containing both "cloud" and "rain" classifies as `Cloudy`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConditionKind {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Thunder,
    Foggy,
    #[default]
    Default,
}

/// Ordered classification table; first matching needle wins.
const CLASSIFICATION: &[(&str, ConditionKind)] = &[
    ("sun", ConditionKind::Sunny),
    ("clear", ConditionKind::Sunny),
    ("cloud", ConditionKind::Cloudy),
    ("overcast", ConditionKind::Cloudy),
    ("rain", ConditionKind::Rainy),
    ("drizzle", ConditionKind::Rainy),
    ("snow", ConditionKind::Snowy),
    ("sleet", ConditionKind::Snowy),
    ("blizzard", ConditionKind::Snowy),
    ("thunder", ConditionKind::Thunder),
    ("fog", ConditionKind::Foggy),
    ("mist", ConditionKind::Foggy),
];

pub fn classify(condition_text: &str) -> ConditionKind {
    let lower = condition_text.to_lowercase();

    CLASSIFICATION
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, kind)| *kind)
        .unwrap_or_default()
}

impl ConditionKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ConditionKind::Sunny => "☀",
            ConditionKind::Cloudy => "☁",
            ConditionKind::Rainy => "🌧",
            ConditionKind::Snowy => "❄",
            ConditionKind::Thunder => "🌩",
            ConditionKind::Foggy => "🌫",
            ConditionKind::Default => "🌡",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConditionKind::Sunny => "Sunny",
            ConditionKind::Cloudy => "Cloudy",
            ConditionKind::Rainy => "Rainy",
            ConditionKind::Snowy => "Snowy",
            ConditionKind::Thunder => "Thunder",
            ConditionKind::Foggy => "Foggy",
            ConditionKind::Default => "Weather",
        }
    }
}
