//! Error Types Module
//!
//! Input validation failures for the geodesic and solar calculations.
//! A sun that never crosses the requested zenith is a computed outcome,
//! not an error, and lives in [`crate::solar::SunEventOutcome`].

use thiserror::Error;

/// Errors raised when an input falls outside the domain of a formula.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a non-finite value.
    #[error("Invalid coordinate ({latitude}, {longitude}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Planet radius must be finite and strictly positive.
    #[error("Invalid radius {0}: must be a positive finite number")]
    InvalidRadius(f64),

    /// Observer height must be finite and non-negative.
    #[error("Invalid height {0}: must be a non-negative finite number")]
    InvalidHeight(f64),

    /// Custom sun zenith must lie strictly between 0 and 180 degrees.
    #[error("Invalid zenith {0}: must be between 0 and 180 degrees")]
    InvalidZenith(f64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_value() {
        let e = GeoError::InvalidCoordinate { latitude: 91.0, longitude: 0.0 };
        assert!(e.to_string().contains("91"));

        assert_eq!(
            GeoError::InvalidRadius(-1.0).to_string(),
            "Invalid radius -1: must be a positive finite number"
        );
        assert!(GeoError::InvalidHeight(-5.0).to_string().contains("-5"));
        assert!(GeoError::InvalidZenith(190.0).to_string().contains("190"));
    }
}
