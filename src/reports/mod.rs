//! Statistics reporters over a filtered trip table.
//!
//! Each reporter computes a typed summary, prints its section, and reports
//! how long it took. They run in a fixed order: time, station, duration, user.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;
pub mod utility;

use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use crate::loader::LoadedData;

pub use duration::{DurationBreakdown, DurationStats, trip_duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYears, UserStats, user_stats};

pub const SEPARATOR: &str = "----------------------------------------";

pub(crate) const NO_TRIPS: &str = "No trips match the selected filters.";

/// Prints the elapsed time and the section separator.
pub(crate) fn finish_section<W: Write>(out: &mut W, started: Instant) -> Result<()> {
    writeln!(out, "This took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Runs all four reporters in order.
pub fn print_all<W: Write>(out: &mut W, loaded: &LoadedData) -> Result<()> {
    time_stats(out, &loaded.table, loaded.flags)?;
    station_stats(out, &loaded.table)?;
    trip_duration_stats(out, &loaded.table)?;
    user_stats(out, &loaded.table)?;
    Ok(())
}
