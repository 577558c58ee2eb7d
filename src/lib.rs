//! Geodesic and solar-event math on GPS coordinates.
//!
//! Spherical-planet distances (haversine and a naive equirectangular
//! approximation), planar headings, antipodes, degrees-minutes-seconds
//! conversion, horizon distance and almanac sunrise/sunset times.
//!
//! ```
//! use gpsmath::{Coordinate, GeoContext, SunZenith, sunrise_time};
//! use chrono::NaiveDate;
//!
//! let a = Coordinate::new(40.9078414, -74.0105259)?;
//! let b = Coordinate::new(40.9003490, -73.9089020)?;
//! let miles = GeoContext::default().distance_haversine(&a, &b)?;
//! assert!((miles - 5.33).abs() < 0.01);
//!
//! let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
//! let sunrise = sunrise_time(&a, date, SunZenith::Official);
//! assert!(sunrise.is_some());
//! # Ok::<(), gpsmath::GeoError>(())
//! ```

pub mod dms;
pub mod error;
pub mod geo;
pub mod solar;
pub mod time;

pub use dms::{
    Dms, to_decimal, to_decimal_signed, to_degrees_minutes_seconds,
    to_degrees_minutes_seconds_signed,
};
pub use error::{GeoError, Result};
pub use geo::{
    Coordinate, GeoContext, Planet, Units, distance_equirectangular, distance_haversine,
    distance_to_horizon, heading_between, opposite_coordinate,
};
pub use solar::{
    SunEventOutcome, SunPhase, SunZenith, day_length, sun_event, sunrise_time, sunset_time,
};
