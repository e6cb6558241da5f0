//! Config-backed location source.
//!
//! The stored home location stands in for a platform geolocation service:
//! a missing entry is the denial/unsupported signal.

use async_trait::async_trait;

use skycast_core::{Config, Coordinates, LocationError, LocationSource};

#[derive(Debug, Clone, Copy)]
pub struct StoredLocation {
    home: Option<Coordinates>,
}

impl StoredLocation {
    pub fn new(config: &Config) -> Self {
        Self { home: config.home_coordinates() }
    }
}

#[async_trait]
impl LocationSource for StoredLocation {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        self.home.ok_or(LocationError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_home_location_is_a_denial() {
        let source = StoredLocation::new(&Config::default());
        let err = source.current_location().await.unwrap_err();
        assert!(matches!(err, LocationError::Unavailable));
    }

    #[tokio::test]
    async fn stored_home_location_resolves() {
        let mut config = Config::default();
        config.set_home(59.91, 10.75);

        let source = StoredLocation::new(&config);
        let coords = source.current_location().await.expect("location must resolve");
        assert_eq!(coords.latitude, 59.91);
        assert_eq!(coords.longitude, 10.75);
    }
}
