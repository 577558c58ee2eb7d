use chrono::Utc;
use clap::Parser;
use tracing::debug;

use gpsmath::time::{parse_date, resolve_display_timezone};
use gpsmath::{
    Coordinate, GeoContext, SunPhase, Units, day_length, heading_between, sun_event,
    to_decimal, to_decimal_signed, to_degrees_minutes_seconds,
    to_degrees_minutes_seconds_signed,
};

mod cli;
mod logging;
mod output;

use cli::{Args, Command, DepInfo, DistanceMethod, select_zenith};
use output::{
    AngleReport, AntipodeReport, DistanceReport, HeadingReport, HorizonReport, SunReport,
};

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let units = if args.metric { Units::Metric } else { Units::Imperial };
    let ctx = GeoContext::for_planet(args.planet, units);
    debug!(planet = ?args.planet, radius = ctx.radius(), ?units, "calculation context");

    match args.command {
        Command::Distance { from, to, method } => {
            let haversine = match method {
                DistanceMethod::Haversine | DistanceMethod::Both => {
                    Some(ctx.distance_haversine(&from, &to)?)
                }
                DistanceMethod::Equirectangular => None,
            };
            let equirectangular = match method {
                DistanceMethod::Equirectangular | DistanceMethod::Both => {
                    Some(ctx.distance_equirectangular(&from, &to)?)
                }
                DistanceMethod::Haversine => None,
            };
            let report =
                DistanceReport { from, to, planet: args.planet, units, haversine, equirectangular };
            if args.json { output::print_json(&report)? } else { output::print_distance(&report) }
        }
        Command::Heading { from, to } => {
            let report = HeadingReport { from, to, heading_deg: heading_between(&from, &to) };
            if args.json { output::print_json(&report)? } else { output::print_heading(&report) }
        }
        Command::Antipode { at } => {
            let report = AntipodeReport { at, antipode: at.opposite() };
            if args.json { output::print_json(&report)? } else { output::print_antipode(&report) }
        }
        Command::Dms { decimal, signed } => {
            let dms = if signed {
                to_degrees_minutes_seconds_signed(decimal)
            } else {
                to_degrees_minutes_seconds(decimal)
            };
            let report = AngleReport { decimal, dms };
            if args.json { output::print_json(&report)? } else { output::print_angle(&report) }
        }
        Command::Decimal { degrees, minutes, seconds, signed } => {
            let dms = gpsmath::Dms::new(degrees, minutes, seconds);
            let decimal = if signed {
                to_decimal_signed(&dms)
            } else {
                to_decimal(degrees, minutes, seconds)
            };
            let report = AngleReport { decimal, dms };
            if args.json { output::print_json(&report)? } else { output::print_angle(&report) }
        }
        Command::Horizon { height } => {
            let report = HorizonReport {
                planet: args.planet,
                units,
                height,
                distance: ctx.distance_to_horizon(height)?,
            };
            if args.json { output::print_json(&report)? } else { output::print_horizon(&report) }
        }
        Command::Sun { at, date, civil, nautical, astro, zenith, timezone, utc } => {
            let tz = if utc { chrono_tz::Tz::UTC } else { resolve_display_timezone(&timezone)? };
            let date = match date.as_deref() {
                Some(s) => parse_date(s, Utc::now())?,
                None => Utc::now().date_naive(),
            };
            let report = sun_report(at, date, select_zenith(civil, nautical, astro, zenith), &tz);
            if args.json {
                output::print_json(&report)?
            } else {
                output::print_sun_events(&report, &tz)
            }
        }
        Command::BuildInfo => print_build_info()?,
    }

    Ok(())
}

fn sun_report(
    at: Coordinate,
    date: chrono::NaiveDate,
    zenith: gpsmath::SunZenith,
    tz: &chrono_tz::Tz,
) -> SunReport {
    SunReport {
        at,
        date,
        zenith_deg: zenith.degrees(),
        timezone: tz.name().to_string(),
        sunrise: sun_event(&at, date, zenith, SunPhase::Sunrise),
        sunset: sun_event(&at, date, zenith, SunPhase::Sunset),
        day_length_seconds: day_length(&at, date, zenith).map(|d| d.num_seconds()),
    }
}

fn print_build_info() -> Result<(), Box<dyn std::error::Error>> {
    println!("Built from Git commit: {}\n", env!("GPSMATH_GIT_HASH"));
    const DEP_INFO_RAW: &str = include_str!(env!("GPSMATH_DEPS_PATH"));
    let deps: Vec<DepInfo> = serde_json::from_str(DEP_INFO_RAW)?;

    println!("Found {} dependencies.", deps.len());
    for dep in deps {
        println!("- {} v{}", dep.name, dep.version);
        if let Some(sum) = dep.checksum {
            println!("    Checksum: {}", sum);
        }
        if let Some(src) = dep.source {
            println!("    Source:   {}", src);
        }
    }
    Ok(())
}
