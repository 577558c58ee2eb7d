//! Command-Line Interface Module
//!
//! Handles argument parsing and validation for the gpsmath application.

use clap::{Parser, Subcommand, ValueEnum};
use gpsmath::{Coordinate, Planet, SunZenith};
use serde::Deserialize;

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Body whose mean radius is used for distances and horizons
    #[arg(long, global = true, default_value = "earth", value_parser = parse_planet, env = "GPSMATH_PLANET")]
    pub planet: Planet,
    /// Use kilometres and metres instead of miles and feet
    #[arg(long, global = true, env = "GPSMATH_METRIC")]
    pub metric: bool,
    /// Print results as JSON
    #[arg(long, global = true, env = "GPSMATH_JSON")]
    pub json: bool,
    /// Log calculation details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Distance between two points (LAT,LON)
    Distance {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
        from: Coordinate,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
        to: Coordinate,
        /// Formula to use; equirectangular ignores cos(latitude) and is only a rough estimate
        #[arg(long, value_enum, default_value_t = DistanceMethod::Haversine)]
        method: DistanceMethod,
    },
    /// Planar heading from one point towards another (degrees counter-clockwise from east)
    Heading {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
        from: Coordinate,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
        to: Coordinate,
    },
    /// Point on the opposite side of the planet
    Antipode {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
        at: Coordinate,
    },
    /// Convert decimal degrees to degrees, minutes and seconds
    Dms {
        #[arg(allow_negative_numbers = true)]
        decimal: f64,
        /// Keep the sign on the leading component instead of flooring negative values
        #[arg(long)]
        signed: bool,
    },
    /// Convert degrees, minutes and seconds to decimal degrees
    Decimal {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
        #[arg(allow_negative_numbers = true)]
        minutes: f64,
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        /// Read a minus sign on any component as a negative angle (inverse of `dms --signed`)
        #[arg(long)]
        signed: bool,
    },
    /// Distance to the horizon from a height (feet, or metres with --metric)
    Horizon {
        #[arg(long, value_parser = parse_height)]
        height: f64,
    },
    /// Sunrise and sunset times
    Sun {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate, env = "GPSMATH_LOCATION")]
        at: Coordinate,
        /// Date for calculations (e.g., "2019-01-01" or "today"); defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
        /// Use civil, nautical, or astronomical twilight instead of sunrise/sunset
        #[arg(long, conflicts_with_all = ["nautical", "astro", "zenith"])]
        civil: bool,
        #[arg(long, conflicts_with_all = ["civil", "astro", "zenith"])]
        nautical: bool,
        #[arg(long, conflicts_with_all = ["civil", "nautical", "zenith"])]
        astro: bool,
        /// Custom sun zenith in degrees (0-180)
        #[arg(long, value_parser = parse_zenith)]
        zenith: Option<SunZenith>,
        /// Time zone for display ("utc", "system", or IANA time zone name)
        #[arg(long, default_value = "utc", env = "GPSMATH_TIMEZONE")]
        timezone: String,
        /// Display in UTC regardless of --timezone
        #[arg(long)]
        utc: bool,
    },
    /// Show build info from Cargo.lock at time of building
    BuildInfo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMethod {
    Haversine,
    Equirectangular,
    Both,
}

/// Zenith selected by the sun subcommand flags.
pub fn select_zenith(
    civil: bool,
    nautical: bool,
    astro: bool,
    zenith: Option<SunZenith>,
) -> SunZenith {
    if let Some(z) = zenith {
        z
    } else if civil {
        SunZenith::Civil
    } else if nautical {
        SunZenith::Nautical
    } else if astro {
        SunZenith::Astronomical
    } else {
        SunZenith::Official
    }
}

/// One `Cargo.lock` package as written by build.rs.
#[derive(Debug, Deserialize)]
pub struct DepInfo {
    pub name: String,
    pub version: String,
    pub checksum: Option<String>,
    pub source: Option<String>,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim().parse().map_err(|_| format!("Invalid number: {}", s))
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lat, lon) = s.split_once(',').ok_or_else(|| {
        format!("Coordinate must be in format LAT,LON (e.g., '40.9,-74.0'), got '{}'", s)
    })?;
    Coordinate::new(parse_latitude(lat)?, parse_longitude(lon)?).map_err(|e| e.to_string())
}

fn parse_height(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if v < 0.0 {
        return Err(format!("Height must not be negative, got {}", v));
    }
    Ok(v)
}

fn parse_zenith(s: &str) -> Result<SunZenith, String> {
    SunZenith::custom(parse_number(s)?).map_err(|e| e.to_string())
}

fn parse_planet(s: &str) -> Result<Planet, String> {
    match s.to_ascii_lowercase().as_str() {
        "earth" => Ok(Planet::Earth),
        "moon" => Ok(Planet::Moon),
        "mars" => Ok(Planet::Mars),
        other => Err(format!("Unknown planet '{}', expected earth, moon or mars", other)),
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_coordinate() {
        let c = parse_coordinate("40.9078414,-74.0105259").unwrap();
        assert_eq!((c.latitude(), c.longitude()), (40.9078414, -74.0105259));
        assert!(parse_coordinate(" -33.87 , 151.21 ").is_ok());

        assert_eq!(
            parse_coordinate("91,0").unwrap_err(),
            "Latitude must be between -90 and 90, got 91"
        );
        assert!(parse_coordinate("0,181").is_err());
        assert!(parse_coordinate("40.9").is_err());
        assert!(parse_coordinate("north,west").is_err());
    }

    #[test]
    fn test_parse_height_and_zenith() {
        assert_eq!(parse_height("29029").unwrap(), 29029.0);
        assert!(parse_height("-1").is_err());
        assert_eq!(parse_zenith("96").unwrap(), SunZenith::Custom(96.0));
        assert!(parse_zenith("200").is_err());
    }

    #[test]
    fn test_parse_planet() {
        assert_eq!(parse_planet("Mars").unwrap(), Planet::Mars);
        assert!(parse_planet("pluto").is_err());
    }

    #[test]
    fn test_distance_subcommand_with_negative_longitudes() {
        let args = Args::try_parse_from([
            "gpsmath",
            "distance",
            "--from",
            "40.9078414,-74.0105259",
            "--to",
            "40.9003490,-73.9089020",
            "--method",
            "both",
        ])
        .unwrap();
        assert_eq!(args.planet, Planet::Earth);
        match args.command {
            Command::Distance { method, .. } => assert_eq!(method, DistanceMethod::Both),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_twilight_flags_conflict() {
        let res = Args::try_parse_from(["gpsmath", "sun", "--at", "40,-74", "--civil", "--astro"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_sun_zenith_selection() {
        assert_eq!(select_zenith(false, false, false, None), SunZenith::Official);
        assert_eq!(select_zenith(false, true, false, None), SunZenith::Nautical);
        let custom = Some(SunZenith::Custom(96.0));
        assert_eq!(select_zenith(false, false, false, custom), SunZenith::Custom(96.0));
    }

    #[test]
    fn test_signed_decimal_subcommand() {
        let args =
            Args::try_parse_from(["gpsmath", "decimal", "-1", "30", "0", "--signed"]).unwrap();
        match args.command {
            Command::Decimal { degrees, minutes, seconds, signed } => {
                assert_eq!((degrees, minutes, seconds), (-1.0, 30.0, 0.0));
                assert!(signed);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_negative_decimal_positional() {
        let args = Args::try_parse_from(["gpsmath", "dms", "-74.0105259", "--signed"]).unwrap();
        match args.command {
            Command::Dms { decimal, signed } => {
                assert_eq!(decimal, -74.0105259);
                assert!(signed);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
