use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use super::utility::{mode, most_common};
use super::{NO_TRIPS, finish_section};
use crate::trip::TripTable;

/// Most used stations and the most frequent start/end combination.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub trip: (String, String),
    pub trip_count: usize,
}

impl StationStats {
    /// Returns `None` for an empty table.
    pub fn compute(table: &TripTable) -> Option<Self> {
        let start_station = mode(table.trips.iter().map(|t| t.start_station.as_str()))?;
        let end_station = mode(table.trips.iter().map(|t| t.end_station.as_str()))?;
        let ((from, to), trip_count) = most_common(
            table
                .trips
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )?;

        Some(StationStats {
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            trip: (from.to_string(), to.to_string()),
            trip_count,
        })
    }
}

/// Prints the most popular start station, end station and trip.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn station_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match StationStats::compute(table) {
        Some(stats) => {
            writeln!(
                out,
                "The most commonly used start station is {}.\n",
                stats.start_station
            )?;
            writeln!(
                out,
                "The most commonly used end station is {}.\n",
                stats.end_station
            )?;
            writeln!(
                out,
                "The most frequent combination of start and end stations is {} and {} ({} trips).\n",
                stats.trip.0, stats.trip.1, stats.trip_count
            )?;
        }
        None => writeln!(out, "{NO_TRIPS}\n")?,
    }

    finish_section(out, started)
}
