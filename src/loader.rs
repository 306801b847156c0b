//! Loads a city's trip file and applies the month/day filters.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use thiserror::Error;
use tracing::{debug, info};

use crate::cities::CityCatalog;
use crate::filters::{DayFilter, MonthFilter, Selection};
use crate::trip::{REQUIRED_COLUMNS, Trip, TripRecord, TripTable};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: unparseable start time '{value}'")]
    BadTimestamp { row: usize, value: String },

    #[error("row {row}: {source}")]
    Row { row: usize, source: csv::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Whether each dimension was left unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterFlags {
    pub all_months: bool,
    pub all_days: bool,
}

impl FilterFlags {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self {
            all_months: month.is_all(),
            all_days: day.is_all(),
        }
    }
}

/// The filtered table together with its filter flags.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    pub table: TripTable,
    pub flags: FilterFlags,
}

/// Reads the file for `selection.city` and keeps the trips matching the
/// month and day filters.
///
/// # Errors
///
/// Fails if the file is missing, lacks a required column, or holds a row
/// that cannot be parsed.
#[tracing::instrument(skip(catalog), fields(city = %selection.city, month = %selection.month, day = %selection.day))]
pub fn load_data(catalog: &CityCatalog, selection: &Selection) -> anyhow::Result<LoadedData> {
    let path = catalog.path_for(selection.city);
    debug!(path = %path.display(), "Opening trip file");

    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;

    let loaded = load_from_reader(file, selection.month, selection.day)
        .with_context(|| format!("loading trips from {}", path.display()))?;

    info!(
        rows = loaded.table.len(),
        all_months = loaded.flags.all_months,
        all_days = loaded.flags.all_days,
        "Trip data loaded"
    );
    Ok(loaded)
}

/// Parses trip CSV from any reader and applies the filters.
pub fn load_from_reader<R: Read>(
    reader: R,
    month: MonthFilter,
    day: DayFilter,
) -> Result<LoadedData, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut trips = Vec::new();
    let mut total_rows = 0usize;

    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        total_rows += 1;

        let record = result.map_err(|source| LoadError::Row { row, source })?;
        let parsed: TripRecord = record
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::Row { row, source })?;

        let start_time = parsed.start_time.clone();
        let fields = record.iter().map(String::from).collect();
        let trip = Trip::from_record(parsed, fields).ok_or(LoadError::BadTimestamp {
            row,
            value: start_time,
        })?;

        if month.matches(trip.month) && day.matches(trip.weekday) {
            trips.push(trip);
        }
    }

    debug!(total_rows, kept = trips.len(), "Filters applied");

    Ok(LoadedData {
        table: TripTable::new(headers.iter().map(String::from).collect(), trips),
        flags: FilterFlags::new(month, day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};

    const CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 09:07:57,2017-01-01 09:20:53,776,A,B,Subscriber
1,2017-01-02 18:00:00,2017-01-02 18:10:00,600,B,C,Customer
2,2017-02-05 07:30:00,2017-02-05 07:35:00,300,A,C,Subscriber
";

    #[test]
    fn test_no_filters_keeps_all_rows() {
        let loaded = load_from_reader(CSV.as_bytes(), MonthFilter::All, DayFilter::All).unwrap();

        assert_eq!(loaded.table.len(), 3);
        assert_eq!(
            loaded.flags,
            FilterFlags {
                all_months: true,
                all_days: true
            }
        );
        assert!(!loaded.table.has_column("Gender"));
    }

    #[test]
    fn test_month_filter() {
        let loaded = load_from_reader(
            CSV.as_bytes(),
            MonthFilter::Only(Month::February),
            DayFilter::All,
        )
        .unwrap();

        assert_eq!(loaded.table.len(), 1);
        assert!(!loaded.flags.all_months);
        assert!(loaded.flags.all_days);
        assert!(loaded.table.trips.iter().all(|t| t.month == 2));
    }

    #[test]
    fn test_day_filter() {
        let loaded = load_from_reader(
            CSV.as_bytes(),
            MonthFilter::All,
            DayFilter::Only(Weekday::Sun),
        )
        .unwrap();

        // 2017-01-01 and 2017-02-05 are both Sundays
        assert_eq!(loaded.table.len(), 2);
        assert!(loaded.flags.all_months);
        assert!(!loaded.flags.all_days);
    }

    #[test]
    fn test_raw_fields_are_kept() {
        let loaded = load_from_reader(CSV.as_bytes(), MonthFilter::All, DayFilter::All).unwrap();
        let first = &loaded.table.trips[0];

        assert_eq!(loaded.table.columns[1], "Start Time");
        assert_eq!(first.fields[3], "776");
        assert_eq!(first.fields.len(), loaded.table.columns.len());
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,Start Station,End Station,User Type\n";
        let err = load_from_reader(csv.as_bytes(), MonthFilter::All, DayFilter::All).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Trip Duration")));
    }

    #[test]
    fn test_bad_timestamp_reports_row() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 09:07:57,10,A,B,Subscriber
not a time,10,A,B,Subscriber
";
        let err = load_from_reader(csv.as_bytes(), MonthFilter::All, DayFilter::All).unwrap_err();
        match err {
            LoadError::BadTimestamp { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "not a time");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_duration_is_an_error() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 09:07:57,ten,A,B,Subscriber
";
        let err = load_from_reader(csv.as_bytes(), MonthFilter::All, DayFilter::All).unwrap_err();
        assert!(matches!(err, LoadError::Row { row: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let catalog = CityCatalog::new("/nonexistent/bikeshare_stats");
        let selection = Selection::new(crate::filters::City::Chicago, MonthFilter::All, DayFilter::All);
        assert!(load_data(&catalog, &selection).is_err());
    }
}
