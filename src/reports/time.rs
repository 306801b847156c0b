use anyhow::Result;
use chrono::{Month, Weekday};
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use super::utility::mode;
use super::{NO_TRIPS, finish_section};
use crate::filters::{WEEKDAYS, weekday_name};
use crate::loader::FilterFlags;
use crate::trip::TripTable;

/// Most frequent times of travel.
///
/// Month and day are only computed when that dimension was not filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub popular_month: Option<Month>,
    pub popular_day: Option<Weekday>,
    pub popular_hour: u32,
}

impl TimeStats {
    /// Returns `None` for an empty table.
    pub fn compute(table: &TripTable, flags: FilterFlags) -> Option<Self> {
        let popular_hour = mode(table.trips.iter().map(|t| t.hour))?;

        let popular_month = if flags.all_months {
            mode(table.trips.iter().map(|t| t.month))
                .and_then(|n| u8::try_from(n).ok())
                .and_then(|n| Month::try_from(n).ok())
        } else {
            None
        };

        let popular_day = if flags.all_days {
            // ties resolve by day name, not week order
            mode(table.trips.iter().map(|t| weekday_name(t.weekday)))
                .and_then(|name| WEEKDAYS.into_iter().find(|d| weekday_name(*d) == name))
        } else {
            None
        };

        Some(TimeStats {
            popular_month,
            popular_day,
            popular_hour,
        })
    }
}

/// Prints the most popular month, day of week and start hour.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn time_stats<W: Write>(out: &mut W, table: &TripTable, flags: FilterFlags) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    let Some(stats) = TimeStats::compute(table, flags) else {
        writeln!(out, "{NO_TRIPS}\n")?;
        return finish_section(out, started);
    };
    debug!(?stats, "Time stats computed");

    match stats.popular_month {
        Some(month) if flags.all_months => writeln!(
            out,
            "The most popular month to use bikeshare assets is: {}.\n",
            month.name()
        )?,
        _ => writeln!(out, "Displaying data for selected month.\n")?,
    }

    match stats.popular_day {
        Some(day) if flags.all_days => writeln!(
            out,
            "The most popular day of the week to start using bikeshare assets is: {}.\n",
            weekday_name(day)
        )?,
        _ => writeln!(out, "Displaying data for selected day of the week.\n")?,
    }

    writeln!(
        out,
        "Given the supplied filters, the most popular hour to start using bikeshare assets is: {}:00.\n",
        stats.popular_hour
    )?;

    finish_section(out, started)
}
