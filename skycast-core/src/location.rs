//! Seam for the platform location capability.
//!
//! Resolving the user's position is an external collaborator (browser
//! geolocation, a stored home location, a platform service). The state
//! machine only needs coordinates or a denial signal, so front-ends plug in
//! whatever source they have behind this trait.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum LocationError {
    /// The capability is missing, disabled, or access was denied.
    #[error("Location access is unavailable")]
    Unavailable,

    #[error("Location lookup failed: {0}")]
    Lookup(String),
}

#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}
