//! Geographic and Geometry Module
//!
//! Spherical-planet distance, heading, antipode and horizon calculations.
//! Every function takes the planet radius explicitly (or through a
//! [`GeoContext`]); results come out in the linear unit of that radius.

use serde::Serialize;

use crate::error::{GeoError, Result};

// ===================== CONSTANTS =====================

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Kilometres per statute mile
pub const KM_PER_MILE: f64 = 1.60934;

/// Feet per statute mile
pub const FEET_PER_MILE: f64 = 5280.0;

/// Metres per kilometre
pub const METERS_PER_KM: f64 = 1000.0;

/// Mean radius of the Earth in miles
pub const EARTH_RADIUS: f64 = 3959.0;
/// Mean radius of the Earth in kilometres
pub const EARTH_RADIUS_METRIC: f64 = EARTH_RADIUS * KM_PER_MILE;
/// Mean radius of the Moon in miles
pub const MOON_RADIUS: f64 = 1079.0;
/// Mean radius of the Moon in kilometres
pub const MOON_RADIUS_METRIC: f64 = MOON_RADIUS * KM_PER_MILE;
/// Mean radius of Mars in miles
pub const MARS_RADIUS: f64 = 2106.0;
/// Mean radius of Mars in kilometres
pub const MARS_RADIUS_METRIC: f64 = MARS_RADIUS * KM_PER_MILE;

// ===================== UNITS & PLANETS =====================

/// Linear unit system for radii, distances and heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Radius and distances in miles, heights in feet
    #[default]
    Imperial,
    /// Radius and distances in kilometres, heights in metres
    Metric,
}

impl Units {
    /// How many height units make up one distance unit (ft per mile or m per km).
    pub fn height_per_distance(self) -> f64 {
        match self {
            Units::Imperial => FEET_PER_MILE,
            Units::Metric => METERS_PER_KM,
        }
    }

    pub fn distance_label(self) -> &'static str {
        match self {
            Units::Imperial => "mi",
            Units::Metric => "km",
        }
    }

    pub fn height_label(self) -> &'static str {
        match self {
            Units::Imperial => "ft",
            Units::Metric => "m",
        }
    }
}

/// Bodies with a built-in mean radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    #[default]
    Earth,
    Moon,
    Mars,
}

impl Planet {
    /// Mean radius in the requested unit system.
    pub fn radius(self, units: Units) -> f64 {
        let miles = match self {
            Planet::Earth => EARTH_RADIUS,
            Planet::Moon => MOON_RADIUS,
            Planet::Mars => MARS_RADIUS,
        };
        match units {
            Units::Imperial => miles,
            Units::Metric => miles * KM_PER_MILE,
        }
    }
}

// ===================== COORDINATE =====================

/// A latitude/longitude pair in decimal degrees.
///
/// Values built through [`Coordinate::new`] are always inside
/// [-90, 90] x [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// # Errors
    /// `InvalidCoordinate` if either component is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = latitude.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude);
        let lon_ok =
            longitude.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(GeoError::InvalidCoordinate { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The point on the other side of the planet. See [`opposite_coordinate`].
    pub fn opposite(&self) -> Coordinate {
        opposite_coordinate(self)
    }

    /// Haversine distance to `other`. See [`distance_haversine`].
    pub fn distance_haversine_to(&self, other: &Coordinate, radius: f64) -> Result<f64> {
        distance_haversine(self, other, radius)
    }

    /// Equirectangular distance to `other`. See [`distance_equirectangular`].
    pub fn distance_equirectangular_to(&self, other: &Coordinate, radius: f64) -> Result<f64> {
        distance_equirectangular(self, other, radius)
    }

    /// Planar heading towards `other`. See [`heading_between`].
    pub fn heading_to(&self, other: &Coordinate) -> f64 {
        heading_between(self, other)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

// ===================== CALCULATION CONTEXT =====================

/// Radius and unit system shared by a group of distance/horizon calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoContext {
    radius: f64,
    units: Units,
}

impl Default for GeoContext {
    fn default() -> Self {
        Self::for_planet(Planet::Earth, Units::Imperial)
    }
}

impl GeoContext {
    pub fn for_planet(planet: Planet, units: Units) -> Self {
        Self { radius: planet.radius(units), units }
    }

    /// Context with an arbitrary radius, expressed in the distance unit of `units`.
    ///
    /// # Errors
    /// `InvalidRadius` if `radius` is not a positive finite number.
    pub fn with_radius(radius: f64, units: Units) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self { radius, units })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn distance_haversine(&self, a: &Coordinate, b: &Coordinate) -> Result<f64> {
        distance_haversine(a, b, self.radius)
    }

    pub fn distance_equirectangular(&self, a: &Coordinate, b: &Coordinate) -> Result<f64> {
        distance_equirectangular(a, b, self.radius)
    }

    /// Horizon distance for a height given in feet (imperial) or metres (metric).
    pub fn distance_to_horizon(&self, height: f64) -> Result<f64> {
        distance_to_horizon(height, self.radius, self.units)
    }
}

// ===================== GEOMETRY FUNCTIONS =====================

fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeoError::InvalidRadius(radius));
    }
    Ok(())
}

/// Approximate distance using a flat equirectangular arc.
///
/// The latitude and longitude differences are combined as one planar arc
/// `sqrt(dlon^2 + dlat^2)` in degrees, then scaled by the radius.
/// Longitude is **not** weighted by `cos(latitude)`, so the result
/// overestimates east-west separation away from the equator. Use it only for
/// short hops at low latitude, or prefer [`distance_haversine`].
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
/// * `radius` - Planet radius; the result has the same unit
///
/// # Errors
/// `InvalidRadius` if `radius` is not a positive finite number
pub fn distance_equirectangular(a: &Coordinate, b: &Coordinate, radius: f64) -> Result<f64> {
    validate_radius(radius)?;
    let long_difference = (a.longitude - b.longitude).abs();
    let lat_difference = (a.latitude - b.latitude).abs();
    let combined_arc = long_difference.hypot(lat_difference);
    Ok(radius * combined_arc.to_radians())
}

/// Great-circle distance using the haversine formula.
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
/// * `radius` - Planet radius; the result has the same unit
///
/// # Errors
/// `InvalidRadius` if `radius` is not a positive finite number
pub fn distance_haversine(a: &Coordinate, b: &Coordinate, radius: f64) -> Result<f64> {
    validate_radius(radius)?;
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let long_difference = (a.longitude.to_radians() - b.longitude.to_radians()).abs();
    let lat_difference = (lat1 - lat2).abs();

    let h = (lat_difference / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (long_difference / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    Ok(c * radius)
}

/// Heading from `from` towards `to` in degrees.
///
/// This is the planar angle of the (dlon, dlat) vector, measured
/// counter-clockwise from east, in (-180, 180]. It is not a great-circle
/// initial bearing and ignores meridian convergence.
pub fn heading_between(from: &Coordinate, to: &Coordinate) -> f64 {
    (to.latitude - from.latitude).atan2(to.longitude - from.longitude).to_degrees()
}

/// The antipode: both components negated, without normalisation.
///
/// Negation maps [-90, 90] x [-180, 180] onto itself, so the result is a
/// valid coordinate, e.g. `(90, 180)` becomes `(-90, -180)`.
pub fn opposite_coordinate(p: &Coordinate) -> Coordinate {
    Coordinate { latitude: -p.latitude, longitude: -p.longitude }
}

/// Distance to the geometric horizon for an observer at `height`.
///
/// `sqrt(2 * R * h + h^2)` with `h` converted into the radius unit:
/// feet to miles for [`Units::Imperial`], metres to kilometres for
/// [`Units::Metric`]. Refraction is not taken into account.
///
/// # Arguments
/// * `height` - Observer height in feet (imperial) or metres (metric)
/// * `radius` - Planet radius in miles (imperial) or kilometres (metric)
/// * `units` - Unit system of both arguments
///
/// # Errors
/// `InvalidHeight` for negative or non-finite heights, `InvalidRadius` for a bad radius
pub fn distance_to_horizon(height: f64, radius: f64, units: Units) -> Result<f64> {
    if !height.is_finite() || height < 0.0 {
        return Err(GeoError::InvalidHeight(height));
    }
    validate_radius(radius)?;
    let h = height / units.height_per_distance();
    Ok((2.0 * radius * h + h.powi(2)).sqrt())
}

// ===================== TESTS =====================
