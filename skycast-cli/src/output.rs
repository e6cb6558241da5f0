//! Terminal rendering of the view state.
//!
//! Rendering is a pure function of the state: nothing here mutates it.

use chrono::Local;

use skycast_core::condition;
use skycast_core::{AppState, HourlyEntry, Phase, TemperatureUnit, Theme, WeatherSnapshot};

pub fn render(state: &AppState) {
    println!();
    println!("skycast · {} · {}", Local::now().format("%a %H:%M"), theme_badge(state.theme));

    if state.phase == Phase::Loading {
        println!("Loading...");
    }

    if state.phase == Phase::Error {
        if let Some(error) = &state.error {
            println!("! {}", error.message());
        }
    }

    if let Some(weather) = &state.weather {
        print_current(weather, state.unit);
        print_hourly(&state.hourly, state.unit);
    }
    println!();
}

pub fn print_current(snapshot: &WeatherSnapshot, unit: TemperatureUnit) {
    let kind = condition::classify(&snapshot.condition_text);

    println!("{} {}: {}", kind.glyph(), snapshot.location_name, snapshot.condition_text);
    println!("  {:.1}{}", snapshot.temperature(unit), unit.suffix());
}

pub fn print_hourly(entries: &[HourlyEntry], unit: TemperatureUnit) {
    if entries.is_empty() {
        return;
    }

    println!("  Today, hour by hour:");
    for entry in entries {
        let kind = condition::classify(&entry.condition_text);
        println!(
            "  {}  {:>6.1}{}  {} {}",
            entry.time_label,
            entry.temperature(unit),
            unit.suffix(),
            kind.glyph(),
            entry.condition_text,
        );
    }
}

fn theme_badge(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}
