//! Interactive lookup session.
//!
//! The terminal rendition of the single-page flow: on entry the session
//! resolves the stored location and fetches a forecast, then loops over a
//! menu of triggers. Each choice becomes an [`Event`] for the core state
//! machine; returned effects are executed here and their resolutions fed
//! back in, after which the new state is rendered.

use anyhow::Result;
use inquire::{InquireError, Select, Text};

use skycast_core::{
    AppState, Config, Effect, Event, ForecastOptions, LocationSource, WeatherClient,
};

use crate::geo::StoredLocation;
use crate::output;

const SEARCH: &str = "Search city";
const MY_LOCATION: &str = "Use my location";
const TOGGLE_UNIT: &str = "Toggle °C/°F";
const TOGGLE_THEME: &str = "Toggle theme";
const QUIT: &str = "Quit";

pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let client = WeatherClient::new(config.resolve_api_key()?);
    let source = StoredLocation::new(&config);

    let mut state = AppState::default();
    drive(&client, &source, &mut state, Event::Started).await;

    loop {
        output::render(&state);

        let options = vec![SEARCH, MY_LOCATION, TOGGLE_UNIT, TOGGLE_THEME, QUIT];
        let choice = match Select::new("What next?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match choice {
            SEARCH => {
                let text = match Text::new("City:").prompt() {
                    Ok(text) => text,
                    Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };
                drive(&client, &source, &mut state, Event::SearchSubmitted(text)).await;
            }
            MY_LOCATION => drive(&client, &source, &mut state, Event::LocationRequested).await,
            TOGGLE_UNIT => drive(&client, &source, &mut state, Event::UnitToggled).await,
            TOGGLE_THEME => drive(&client, &source, &mut state, Event::ThemeToggled).await,
            _ => break,
        }
    }

    Ok(())
}

/// Feed one event through the state machine, then execute effects until the
/// chain settles.
async fn drive(
    client: &WeatherClient,
    source: &impl LocationSource,
    state: &mut AppState,
    event: Event,
) {
    let mut next = state.handle(event);
    while let Some(effect) = next {
        next = execute(client, source, state, effect).await;
    }
}

async fn execute(
    client: &WeatherClient,
    source: &impl LocationSource,
    state: &mut AppState,
    effect: Effect,
) -> Option<Effect> {
    match effect {
        Effect::ResolveLocation => match source.current_location().await {
            Ok(coords) => state.handle(Event::LocationResolved(coords)),
            Err(err) => {
                tracing::debug!(%err, "location resolution failed");
                state.handle(Event::LocationDenied)
            }
        },
        Effect::Fetch { seq, query } => {
            let outcome = client.fetch_forecast(&query, ForecastOptions::default()).await;
            state.handle(Event::FetchFinished { seq, outcome })
        }
    }
}
