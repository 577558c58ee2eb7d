//! Output Formatting Module
//!
//! Report types for every subcommand, printed either as aligned terminal
//! text or as JSON.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use gpsmath::time::format_hms;
use gpsmath::{Coordinate, Dms, Planet, SunEventOutcome, Units};

// ===================== REPORTS =====================

#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub from: Coordinate,
    pub to: Coordinate,
    pub planet: Planet,
    pub units: Units,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haversine: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equirectangular: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct HeadingReport {
    pub from: Coordinate,
    pub to: Coordinate,
    pub heading_deg: f64,
}

#[derive(Debug, Serialize)]
pub struct AntipodeReport {
    pub at: Coordinate,
    pub antipode: Coordinate,
}

#[derive(Debug, Serialize)]
pub struct AngleReport {
    pub decimal: f64,
    pub dms: Dms,
}

#[derive(Debug, Serialize)]
pub struct HorizonReport {
    pub planet: Planet,
    pub units: Units,
    pub height: f64,
    pub distance: f64,
}

#[derive(Debug, Serialize)]
pub struct SunReport {
    pub at: Coordinate,
    pub date: NaiveDate,
    pub zenith_deg: f64,
    pub timezone: String,
    pub sunrise: SunEventOutcome,
    pub sunset: SunEventOutcome,
    pub day_length_seconds: Option<i64>,
}

// ===================== JSON OUTPUT =====================

pub fn print_json<T: Serialize>(report: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

// ===================== TERMINAL OUTPUT =====================

pub fn print_distance(r: &DistanceReport) {
    let unit = r.units.distance_label();
    println!("From        : {}", r.from);
    println!("To          : {}", r.to);
    if let Some(d) = r.haversine {
        println!("Haversine   : {:.4} {}", d, unit);
    }
    if let Some(d) = r.equirectangular {
        println!("Equirect.   : {:.4} {} (approximate)", d, unit);
    }
}

pub fn print_heading(r: &HeadingReport) {
    println!("Heading     : {:.4}° (counter-clockwise from east)", r.heading_deg);
}

pub fn print_antipode(r: &AntipodeReport) {
    println!("Location    : {}", r.at);
    println!("Antipode    : {}", r.antipode);
}

pub fn print_angle(r: &AngleReport) {
    println!("Decimal     : {:.7}°", r.decimal);
    println!("DMS         : {}", r.dms);
}

pub fn print_horizon(r: &HorizonReport) {
    println!("Height      : {} {}", r.height, r.units.height_label());
    println!("Horizon     : {:.3} {}", r.distance, r.units.distance_label());
}

/// Print sun events rendered in the display time zone.
///
/// # Arguments
/// * `r` - Computed report (event times are in UTC)
/// * `tz` - Zone used only for display
pub fn print_sun_events(r: &SunReport, tz: &Tz) {
    let show = |outcome: &SunEventOutcome| {
        outcome.time().map(|t| t.with_timezone(tz).format("%Y-%m-%d %H:%M %Z").to_string())
    };

    println!("Location    : {}", r.at);
    println!("Date        : {} (UTC)", r.date);
    println!("Zenith      : {:.3}°", r.zenith_deg);

    match (show(&r.sunrise), show(&r.sunset)) {
        (Some(sr), Some(ss)) => {
            println!("Sunrise     : {}", sr);
            println!("Sunset      : {}", ss);
            if let Some(len) = r.day_length_seconds {
                println!("Daylight    : {}", format_hms(len));
            }
        }
        (sr, ss) => {
            match [r.sunrise, r.sunset].into_iter().find(|o| o.time().is_none()) {
                Some(SunEventOutcome::NeverRises) => println!("Polar Night."),
                Some(SunEventOutcome::NeverSets) => println!("Polar Day (Midnight Sun)."),
                _ => println!("Sun does not cross target zenith today."),
            }
            if let Some(sr) = sr {
                println!("Sunrise     : {}", sr);
            }
            if let Some(ss) = ss {
                println!("Sunset      : {}", ss);
            }
        }
    }
}
