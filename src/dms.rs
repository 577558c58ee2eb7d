//! Degrees-Minutes-Seconds Module
//!
//! Converts between decimal degrees and sexagesimal (D°M'S") notation.
//!
//! Two conversions are offered. [`to_degrees_minutes_seconds`] is the plain
//! floor-based form: it is exact for non-negative input, but for negative
//! input the floor pulls the degrees one step further from zero
//! (`-1.5` becomes `-2° 30' 0"`). [`to_degrees_minutes_seconds_signed`]
//! works on the magnitude and puts the sign back on the leading component.

use serde::Serialize;

// ===================== TYPES =====================

/// An angle split into degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self { degrees, minutes, seconds }
    }

    /// Decimal degrees via [`to_decimal`].
    pub fn to_decimal(&self) -> f64 {
        to_decimal(self.degrees, self.minutes, self.seconds)
    }

    fn is_negative(&self) -> bool {
        [self.degrees, self.minutes, self.seconds].iter().any(|v| v.is_sign_negative() && *v != 0.0)
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{}'{:.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

// ===================== CONVERSIONS =====================

/// Split decimal degrees into degrees, minutes and seconds using `floor`.
///
/// # Arguments
/// * `decimal` - Angle in decimal degrees
///
/// # Returns
/// `Dms` where `degrees = floor(decimal)`, `minutes` is a whole number in
/// [0, 60) and `seconds` carries the remaining fraction
pub fn to_degrees_minutes_seconds(decimal: f64) -> Dms {
    let degrees = decimal.floor();
    let minutes = ((decimal - degrees) * 60.0).floor();
    let seconds = (((decimal - degrees) * 60.0) - minutes) * 60.0;
    Dms { degrees, minutes, seconds }
}

/// Sign-safe variant of [`to_degrees_minutes_seconds`].
///
/// The magnitude is converted and the sign is applied to the first non-zero
/// component, so `-1.5` gives `-1° 30' 0"` and `-0.5` gives `0° -30' 0"`.
pub fn to_degrees_minutes_seconds_signed(decimal: f64) -> Dms {
    let Dms { degrees, minutes, seconds } = to_degrees_minutes_seconds(decimal.abs());
    if decimal >= 0.0 {
        return Dms { degrees, minutes, seconds };
    }
    if degrees != 0.0 {
        Dms { degrees: -degrees, minutes, seconds }
    } else if minutes != 0.0 {
        Dms { degrees, minutes: -minutes, seconds }
    } else {
        Dms { degrees, minutes, seconds: -seconds }
    }
}

/// Combine degrees, minutes and seconds into decimal degrees.
///
/// `degrees + minutes / 60 + seconds / 3600`, inverse of
/// [`to_degrees_minutes_seconds`].
pub fn to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Inverse of [`to_degrees_minutes_seconds_signed`].
///
/// A negative sign on any component makes the whole angle negative.
pub fn to_decimal_signed(dms: &Dms) -> f64 {
    let magnitude = to_decimal(dms.degrees.abs(), dms.minutes.abs(), dms.seconds.abs());
    if dms.is_negative() { -magnitude } else { magnitude }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_latitude_to_dms() {
        let dms = to_degrees_minutes_seconds(40.9078414);
        assert_eq!(dms.degrees, 40.0);
        assert_eq!(dms.minutes, 54.0);
        assert!((dms.seconds - 28.22904).abs() < 1e-4, "seconds were {}", dms.seconds);
    }

    #[test]
    fn test_to_decimal_known_value() {
        let d = to_decimal(40.0, 54.0, 28.22);
        assert!((d - 40.9078).abs() < 1e-4);
        assert!((d - 40.907839).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_non_negative() {
        for v in [0.0, 0.5, 1.0, 12.3456789, 40.9078414, 89.999999, 179.25] {
            let back = to_degrees_minutes_seconds(v).to_decimal();
            assert!((back - v).abs() < 1e-9, "{} came back as {}", v, back);
        }
    }

    #[test]
    fn test_raw_mode_biases_negative_degrees() {
        let dms = to_degrees_minutes_seconds(-1.5);
        assert_eq!((dms.degrees, dms.minutes), (-2.0, 30.0));
        assert!(dms.seconds.abs() < 1e-9);
        // Still inverts exactly through to_decimal
        assert!((dms.to_decimal() + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_signed_mode() {
        let dms = to_degrees_minutes_seconds_signed(-74.0105259);
        assert_eq!((dms.degrees, dms.minutes), (-74.0, 0.0));
        assert!((dms.seconds - 37.89324).abs() < 1e-4);
        assert!((to_decimal_signed(&dms) + 74.0105259).abs() < 1e-9);

        let small = to_degrees_minutes_seconds_signed(-0.5);
        assert_eq!((small.degrees, small.minutes), (0.0, -30.0));
        assert!((to_decimal_signed(&small) + 0.5).abs() < 1e-12);

        let tiny = to_degrees_minutes_seconds_signed(-0.001);
        assert_eq!((tiny.degrees, tiny.minutes), (0.0, 0.0));
        assert!((tiny.seconds + 3.6).abs() < 1e-9);

        let positive = to_degrees_minutes_seconds_signed(40.9078414);
        assert_eq!(positive, to_degrees_minutes_seconds(40.9078414));
    }

    #[test]
    fn test_signed_components_invert_signed_mode() {
        // Components as typed on the command line for -1.5 in signed mode
        let dms = Dms::new(-1.0, 30.0, 0.0);
        assert_eq!(dms, to_degrees_minutes_seconds_signed(-1.5));
        assert!((to_decimal_signed(&dms) + 1.5).abs() < 1e-12);
        // Raw combination treats the minutes as positive
        assert!((to_decimal(-1.0, 30.0, 0.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let dms = Dms::new(40.0, 54.0, 28.229);
        assert_eq!(dms.to_string(), "40°54'28.23\"");
    }
}
