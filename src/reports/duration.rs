use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::time::Instant;

use super::utility::mean;
use super::{NO_TRIPS, finish_section};
use crate::trip::TripTable;

pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;
pub const WEEK: u64 = 7 * DAY;
/// 365/12 days; leap years are ignored.
pub const MONTH: u64 = 365 * DAY / 12;
pub const YEAR: u64 = 365 * DAY;

/// A number of seconds split into calendar-style units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationBreakdown {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    /// Splits `total` by successive division, largest unit first.
    pub fn from_seconds(total: u64) -> Self {
        let mut rest = total;
        let mut take = |unit: u64| {
            let count = rest / unit;
            rest %= unit;
            count
        };

        let years = take(YEAR);
        let months = take(MONTH);
        let weeks = take(WEEK);
        let days = take(DAY);
        let hours = take(HOUR);
        let minutes = take(MINUTE);

        DurationBreakdown {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds: rest,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.years * YEAR
            + self.months * MONTH
            + self.weeks * WEEK
            + self.days * DAY
            + self.hours * HOUR
            + self.minutes * MINUTE
            + self.seconds
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} weeks, {} days, {} hours, {} minutes and {} seconds",
            self.years, self.months, self.weeks, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    /// `total_secs` rounded to whole seconds and split into units.
    pub total: DurationBreakdown,
    pub mean_secs: f64,
    pub mean_minutes: u64,
    pub mean_remainder_secs: u64,
}

impl DurationStats {
    /// Returns `None` for an empty table.
    pub fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let durations: Vec<f64> = table.trips.iter().map(|t| t.duration_secs).collect();
        let total_secs: f64 = durations.iter().sum();
        let mean_secs = mean(&durations);
        let minute = MINUTE as f64;

        Some(DurationStats {
            total_secs,
            total: DurationBreakdown::from_seconds(total_secs.round() as u64),
            mean_secs,
            mean_minutes: (mean_secs / minute).floor() as u64,
            mean_remainder_secs: (mean_secs % minute).floor() as u64,
        })
    }
}

/// Prints total and mean trip duration.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn trip_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    match DurationStats::compute(table) {
        Some(stats) => {
            writeln!(
                out,
                "The total duration of all trips for the selected city and timeframe is {} seconds.",
                stats.total_secs
            )?;
            writeln!(out, "-------> This equates to {}.\n", stats.total)?;
            writeln!(
                out,
                "The mean travel time for all trips for the selected city and timeframe is {} seconds.",
                stats.mean_secs
            )?;
            writeln!(
                out,
                "-------> This equates to roughly {} minutes and {} seconds.\n",
                stats.mean_minutes, stats.mean_remainder_secs
            )?;
        }
        None => writeln!(out, "{NO_TRIPS}\n")?,
    }

    finish_section(out, started)
}
