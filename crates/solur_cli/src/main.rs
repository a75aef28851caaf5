//! Week-at-a-glance sunrise/sunset tables on the command line.
//!
//! Thin shell over `solur_core`: parses coordinates, zone, and date or
//! ISO week, calls the calculator per day, and renders the results.
//! System-clock defaults live here, not in the calculator.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use solur_core::{Location, SolarError, sunrise, sunset};
use solur_time::{CivilDate, HourMinute, TzOffsetResolver, format_hours};

/// Default location: Århus, Denmark.
const DEFAULT_LAT: f64 = 56.09;
const DEFAULT_LON: f64 = 10.11;
const DEFAULT_ZONE: &str = "Europe/Copenhagen";

#[derive(Parser)]
#[command(name = "solur", about = "Sunrise/sunset calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Place {
    /// Latitude in decimal degrees, north positive
    #[arg(long, default_value_t = DEFAULT_LAT)]
    lat: f64,
    /// Longitude in decimal degrees, east positive
    #[arg(long, default_value_t = DEFAULT_LON)]
    lon: f64,
    /// IANA timezone for local times
    #[arg(long, default_value = DEFAULT_ZONE)]
    tz: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset, and day length for a single date
    Day {
        #[command(flatten)]
        place: Place,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Table for Monday..Sunday of an ISO week
    Week {
        #[command(flatten)]
        place: Place,
        /// ISO week-numbering year (defaults to the current one)
        #[arg(long)]
        year: Option<i32>,
        /// ISO week number, 1..=53 (defaults to the current one)
        #[arg(long)]
        week: Option<u32>,
    },
}

fn resolve_place(place: &Place) -> (Location, TzOffsetResolver) {
    let location = match Location::new(place.lat, place.lon) {
        Ok(loc) => loc,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let resolver = match TzOffsetResolver::new(&place.tz) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    (location, resolver)
}

fn parse_date(arg: Option<&str>) -> NaiveDate {
    match arg {
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                eprintln!("Invalid date: {s}. Use YYYY-MM-DD.");
                std::process::exit(1);
            }
        },
        None => Local::now().date_naive(),
    }
}

/// One day's computed events; polar failures are rendered, not fatal.
struct DayRow {
    date: NaiveDate,
    times: Result<(f64, f64), SolarError>,
}

fn compute_row(location: &Location, resolver: &TzOffsetResolver, date: NaiveDate) -> DayRow {
    let civil = CivilDate::from_naive(date);
    let times = sunrise(location, &civil, resolver)
        .and_then(|rise| sunset(location, &civil, resolver).map(|set| (rise, set)));
    DayRow { date, times }
}

fn day_length_text(rise: f64, set: f64) -> String {
    let length = HourMinute::from_hours((set - rise).rem_euclid(24.0));
    format!("{} hours, {} minutes", length.hour, length.minute)
}

fn print_rows(rows: &[DayRow]) {
    println!(
        "{:<26}  {:>7}  {:>7}  {}",
        "Date", "Sunrise", "Sunset", "Day length"
    );
    for row in rows {
        let label = format!("{}, {}", weekday_name(row.date.weekday()), row.date);
        match &row.times {
            Ok((rise, set)) => println!(
                "{:<26}  {:>7}  {:>7}  {}",
                label,
                format_hours(*rise),
                format_hours(*set),
                day_length_text(*rise, *set)
            ),
            Err(SolarError::NeverRises) => {
                println!("{label:<26}  sun never rises");
            }
            Err(SolarError::NeverSets) => {
                println!("{label:<26}  sun never sets");
            }
            Err(e) => {
                eprintln!("{label}: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Day { place, date } => {
            let (location, resolver) = resolve_place(&place);
            let date = parse_date(date.as_deref());
            let row = compute_row(&location, &resolver, date);
            println!(
                "Location: {:.4}, {:.4} ({})",
                location.latitude_deg(),
                location.longitude_deg(),
                resolver.zone_name()
            );
            print_rows(std::slice::from_ref(&row));
        }

        Commands::Week { place, year, week } => {
            let (location, resolver) = resolve_place(&place);
            let today = Local::now().date_naive();
            let iso_year = year.unwrap_or_else(|| today.iso_week().year());
            let iso_week = week.unwrap_or_else(|| today.iso_week().week());

            let Some(monday) =
                NaiveDate::from_isoywd_opt(iso_year, iso_week, Weekday::Mon)
            else {
                eprintln!("Invalid ISO week: year {iso_year}, week {iso_week}.");
                std::process::exit(1);
            };

            println!(
                "Location: {:.4}, {:.4} ({})",
                location.latitude_deg(),
                location.longitude_deg(),
                resolver.zone_name()
            );
            println!("Year {iso_year}, week {iso_week}");

            let rows: Vec<DayRow> = monday
                .iter_days()
                .take(7)
                .map(|d| compute_row(&location, &resolver, d))
                .collect();
            print_rows(&rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_length_formatting() {
        // Recorded Århus midsummer values
        assert_eq!(day_length_text(4.5345, 22.18), "17 hours, 38 minutes");
    }

    #[test]
    fn day_length_wraps_across_midnight() {
        // Sunset past midnight relative to a same-day sunrise
        assert_eq!(day_length_text(22.0, 2.0), "4 hours, 0 minutes");
    }

    #[test]
    fn week_rows_cover_monday_to_sunday() {
        let monday = NaiveDate::from_isoywd_opt(2024, 25, Weekday::Mon).unwrap();
        let days: Vec<NaiveDate> = monday.iter_days().take(7).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6].weekday(), Weekday::Sun);
    }

    #[test]
    fn week_53_exists_only_in_long_years() {
        // 2020 has 53 ISO weeks; 2024 does not
        assert!(NaiveDate::from_isoywd_opt(2020, 53, Weekday::Mon).is_some());
        assert!(NaiveDate::from_isoywd_opt(2024, 53, Weekday::Mon).is_none());
    }
}
