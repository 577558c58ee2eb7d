//! Time and Timezone Utilities Module
//!
//! Date parsing, display-zone selection and duration formatting for the
//! command-line host. Solar calculations themselves always run in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_english::{Dialect, parse_date_string};
use chrono_tz::Tz;
use iana_time_zone::get_timezone;
use tracing::warn;

// ===================== DATE PARSING =====================

/// Parse a calendar date such as "2019-01-01", "01/01/2019", "today" or "next friday".
///
/// Relative expressions are resolved against `now` in UTC.
///
/// # Errors
/// Returns an error if the expression cannot be understood
pub fn parse_date(s: &str, now: DateTime<Utc>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Ok(parse_date_string(s, now, Dialect::Us)?.date_naive())
}

// ===================== TIMEZONE UTILITIES =====================

/// Get the system's configured timezone.
///
/// Falls back to UTC if the system timezone cannot be determined.
pub fn system_timezone() -> Tz {
    match get_timezone() {
        Ok(name) => zone_or_utc(&name),
        Err(e) => {
            warn!(error = %e, "system time zone unavailable, using UTC");
            Tz::UTC
        }
    }
}

fn zone_or_utc(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        warn!(zone = name, "system time zone not in tz database, using UTC");
        Tz::UTC
    })
}

/// Resolve the zone used to display results.
///
/// # Arguments
/// * `name` - "utc", "system", or an IANA zone name
///
/// # Errors
/// Returns an error for an unknown zone name
pub fn resolve_display_timezone(name: &str) -> Result<Tz, String> {
    match name {
        "utc" | "UTC" => Ok(Tz::UTC),
        "system" => Ok(system_timezone()),
        other => other.parse().map_err(|_| format!("Unknown time zone: {}", other)),
    }
}

// ===================== FORMATTING =====================

/// Format a duration in seconds as "Xh Ym Zs".
///
/// # Arguments
/// * `seconds` - Duration in seconds (can be negative, abs value is used)
pub fn format_hms(seconds: i64) -> String {
    let total_seconds = seconds.abs();
    if total_seconds == 0 {
        return "0s".to_string();
    }

    let parts = [
        (total_seconds / 3600, "h"),
        ((total_seconds % 3600) / 60, "m"),
        (total_seconds % 60, "s"),
    ];
    parts
        .iter()
        .filter(|(v, _)| *v > 0)
        .map(|(v, unit)| format!("{}{}", v, unit))
        .collect::<Vec<_>>()
        .join(" ")
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_date_iso() {
        let d = parse_date("2019-01-01", anchor()).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        let leap = parse_date("2024-02-29", anchor()).unwrap();
        assert_eq!(leap, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_relative() {
        let today = parse_date("today", anchor()).unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        let tomorrow = parse_date("tomorrow", anchor()).unwrap();
        assert_eq!(tomorrow, NaiveDate::from_ymd_opt(2019, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("not a date", anchor()).is_err());
    }

    #[test]
    fn test_resolve_display_timezone() {
        use chrono_tz::America::New_York;

        assert_eq!(resolve_display_timezone("utc").unwrap(), Tz::UTC);
        assert_eq!(resolve_display_timezone("America/New_York").unwrap(), New_York);
        assert!(resolve_display_timezone("Mars/Olympus_Mons").is_err());
    }

    #[test]
    fn test_unknown_system_zone_falls_back_to_utc() {
        use chrono_tz::Europe::Oslo;

        assert_eq!(zone_or_utc("Europe/Oslo"), Oslo);
        assert_eq!(zone_or_utc("Local/Nowhere"), Tz::UTC);
    }

    #[test]
    fn test_new_york_display_of_utc_sunrise() {
        use chrono_tz::America::New_York;

        let sunrise_utc = Utc.with_ymd_and_hms(2019, 1, 1, 12, 20, 0).unwrap();
        let local = sunrise_utc.with_timezone(&New_York);
        assert_eq!(local.format("%H:%M %Z").to_string(), "07:20 EST");
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(3661), "1h 1m 1s");
        assert_eq!(format_hms(7200), "2h");
        assert_eq!(format_hms(45), "45s");
        assert_eq!(format_hms(0), "0s");
        assert_eq!(format_hms(-3660), "1h 1m");
    }
}
