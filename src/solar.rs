//! Solar Event Calculation Module
//!
//! Sunrise and sunset times from the classic almanac algorithm
//! (Almanac for Computers, 1990). The computation is done entirely in UTC
//! and resolves to whole minutes. Accuracy is within a couple of minutes
//! for latitudes outside the polar circles.
//!
//! All trigonometry in this module is in degrees.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{GeoError, Result};
use crate::geo::Coordinate;

// ===================== TYPES =====================

/// Zenith angle that defines when the sun counts as crossing the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SunZenith {
    /// Upper limb on the horizon with standard refraction (90°50')
    #[default]
    Official,
    /// Civil twilight (sun 8° below the horizon in this almanac's convention)
    Civil,
    /// Nautical twilight
    Nautical,
    /// Astronomical twilight
    Astronomical,
    /// Any zenith in degrees, strictly between 0 and 180
    Custom(f64),
}

impl SunZenith {
    /// Build a custom zenith, rejecting angles outside (0, 180).
    pub fn custom(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || degrees <= 0.0 || degrees >= 180.0 {
            return Err(GeoError::InvalidZenith(degrees));
        }
        Ok(SunZenith::Custom(degrees))
    }

    pub fn degrees(self) -> f64 {
        match self {
            SunZenith::Official => 90.888888,
            SunZenith::Civil => 98.0,
            SunZenith::Nautical => 102.0,
            SunZenith::Astronomical => 108.0,
            SunZenith::Custom(z) => z,
        }
    }
}

/// Which crossing of the zenith to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SunPhase {
    Sunrise,
    Sunset,
}

impl std::fmt::Display for SunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SunPhase::Sunrise => write!(f, "Sunrise"),
            SunPhase::Sunset => write!(f, "Sunset"),
        }
    }
}

/// Result of solving for a single sun event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "time", rename_all = "snake_case")]
pub enum SunEventOutcome {
    /// The sun crosses the zenith at this UTC time
    At(DateTime<Utc>),
    /// The sun stays below the zenith all day (polar night)
    NeverRises,
    /// The sun stays above the zenith all day (polar day)
    NeverSets,
}

impl SunEventOutcome {
    pub fn time(self) -> Option<DateTime<Utc>> {
        match self {
            SunEventOutcome::At(t) => Some(t),
            SunEventOutcome::NeverRises | SunEventOutcome::NeverSets => None,
        }
    }
}

// ===================== DEGREE TRIGONOMETRY =====================

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Bring `value` into [0, period) with at most one correction.
///
/// Assumes the raw value lies within one period of the target range.
fn normalize_once(value: f64, period: f64) -> f64 {
    if value >= period {
        value - period
    } else if value < 0.0 {
        value + period
    } else {
        value
    }
}

// ===================== ALMANAC ALGORITHM =====================

/// Almanac approximation of the day of the year.
fn day_of_year(date: NaiveDate) -> f64 {
    let year = f64::from(date.year());
    let month = f64::from(date.month());
    let day = f64::from(date.day());

    let n1 = (275.0 * month / 9.0).floor();
    let n2 = ((month + 9.0) / 12.0).floor();
    let n3 = 1.0 + ((year - 4.0 * (year / 4.0).floor() + 2.0) / 3.0).floor();
    n1 - (n2 * n3) + day - 30.0
}

/// Solve for the sunrise or sunset time on a UTC calendar date.
///
/// # Arguments
/// * `coord` - Observer position
/// * `date` - Calendar date, interpreted in UTC
/// * `zenith` - Horizon definition
/// * `phase` - Sunrise or sunset
///
/// # Returns
/// The UTC event time truncated to the minute, or which way the sun
/// fails to cross the zenith on that date
pub fn sun_event(
    coord: &Coordinate,
    date: NaiveDate,
    zenith: SunZenith,
    phase: SunPhase,
) -> SunEventOutcome {
    let n = day_of_year(date);
    let long_hour = coord.longitude() / 15.0;

    let t = match phase {
        SunPhase::Sunrise => n + ((6.0 - long_hour) / 24.0),
        SunPhase::Sunset => n + ((18.0 - long_hour) / 24.0),
    };

    // Sun's mean anomaly and true longitude
    let m = (0.9856 * t) - 3.289;
    let l = normalize_once(m + (1.916 * sin_deg(m)) + (0.020 * sin_deg(2.0 * m)) + 282.634, 360.0);

    // Right ascension, moved into the same quadrant as L, in hours
    let mut ra = normalize_once(atan_deg(0.91764 * tan_deg(l)), 360.0);
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    ra /= 15.0;

    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    let cos_h = (cos_deg(zenith.degrees()) - (sin_dec * sin_deg(coord.latitude())))
        / (cos_dec * cos_deg(coord.latitude()));

    trace!(n, t, m, l, ra, sin_dec, "almanac intermediates");
    debug!(%date, %phase, cos_h, "solved local hour angle cosine");

    if cos_h > 1.0 {
        return SunEventOutcome::NeverRises;
    }
    if cos_h < -1.0 {
        return SunEventOutcome::NeverSets;
    }

    let h = match phase {
        SunPhase::Sunset => acos_deg(cos_h),
        SunPhase::Sunrise => 360.0 - acos_deg(cos_h),
    } / 15.0;

    let local_mean_time = h + ra - (0.06571 * t) - 6.622;
    let ut = normalize_once(local_mean_time - long_hour, 24.0);

    let hour = ut.floor();
    let minute = ((ut - hour) * 60.0).floor();
    let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
    SunEventOutcome::At(midnight + Duration::minutes((hour * 60.0 + minute) as i64))
}

/// Sunrise time in UTC, or `None` during polar day or polar night.
pub fn sunrise_time(coord: &Coordinate, date: NaiveDate, zenith: SunZenith) -> Option<DateTime<Utc>> {
    sun_event(coord, date, zenith, SunPhase::Sunrise).time()
}

/// Sunset time in UTC, or `None` during polar day or polar night.
pub fn sunset_time(coord: &Coordinate, date: NaiveDate, zenith: SunZenith) -> Option<DateTime<Utc>> {
    sun_event(coord, date, zenith, SunPhase::Sunset).time()
}

// ===================== HELPER FUNCTIONS =====================

/// Time between sunrise and sunset on `date`.
///
/// Both events are pinned to the UTC calendar date, so for observers far
/// from Greenwich the sunset can come out earlier than the sunrise; a day
/// is added in that case.
///
/// # Returns
/// Day length, or None if either event is missing
pub fn day_length(coord: &Coordinate, date: NaiveDate, zenith: SunZenith) -> Option<Duration> {
    let sr = sunrise_time(coord, date, zenith)?;
    let ss = sunset_time(coord, date, zenith)?;
    let len = ss - sr;
    Some(if len < Duration::zero() { len + Duration::days(1) } else { len })
}

// ===================== TESTS =====================
