use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::Text;

use skycast_core::{Config, ForecastOptions, LocationQuery, TemperatureUnit, WeatherClient};

use crate::output;
use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup for your terminal")]
pub struct Cli {
    /// With no subcommand, starts the interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com credential and an optional home location.
    Configure,

    /// Show current conditions for a place name or "lat,lon" pair.
    Current {
        /// Place name or "lat,lon".
        query: String,

        #[arg(long, value_enum, default_value_t)]
        unit: UnitArg,
    },

    /// Show today's hourly forecast for a place name or "lat,lon" pair.
    Forecast {
        /// Place name or "lat,lon".
        query: String,

        #[arg(long, value_enum, default_value_t)]
        unit: UnitArg,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum UnitArg {
    #[default]
    C,
    F,
}

impl From<UnitArg> for TemperatureUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::C => TemperatureUnit::Celsius,
            UnitArg::F => TemperatureUnit::Fahrenheit,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => session::run().await,
            Some(Command::Configure) => configure(),
            Some(Command::Current { query, unit }) => current(&query, unit.into()).await,
            Some(Command::Forecast { query, unit }) => forecast(&query, unit.into()).await,
        }
    }
}

async fn current(raw: &str, unit: TemperatureUnit) -> anyhow::Result<()> {
    let client = client_from_config()?;
    let snapshot = client.fetch_current(&lookup_query(raw)?).await?;

    output::print_current(&snapshot, unit);
    Ok(())
}

async fn forecast(raw: &str, unit: TemperatureUnit) -> anyhow::Result<()> {
    let client = client_from_config()?;
    let bundle = client.fetch_forecast(&lookup_query(raw)?, ForecastOptions::default()).await?;

    output::print_current(&bundle.current, unit);
    output::print_hourly(&bundle.hourly, unit);
    Ok(())
}

fn lookup_query(raw: &str) -> anyhow::Result<LocationQuery> {
    let query = LocationQuery::place(raw);
    anyhow::ensure!(!query.is_empty(), "Query must not be empty");
    Ok(query)
}

fn client_from_config() -> anyhow::Result<WeatherClient> {
    let config = Config::load()?;
    Ok(WeatherClient::new(config.resolve_api_key()?))
}

/// Interactive credential entry, persisted to the platform config directory.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("WeatherAPI.com API key:")
        .with_help_message("Create one at https://www.weatherapi.com")
        .prompt()?;
    anyhow::ensure!(!api_key.trim().is_empty(), "API key must not be empty");
    config.set_api_key(api_key.trim().to_string());

    let latitude = Text::new("Home latitude (blank to skip):").prompt()?;
    if !latitude.trim().is_empty() {
        let longitude = Text::new("Home longitude:").prompt()?;
        let latitude: f64 =
            latitude.trim().parse().context("Latitude must be a decimal number")?;
        let longitude: f64 =
            longitude.trim().parse().context("Longitude must be a decimal number")?;
        config.set_home(latitude, longitude);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
