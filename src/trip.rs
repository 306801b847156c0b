//! Trip records and the in-memory trip table.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    START_TIME,
    START_STATION,
    END_STATION,
    TRIP_DURATION,
    USER_TYPE,
];

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A single CSV row as written in the city files.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A parsed trip plus the columns derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,

    /// Raw CSV fields, in header order.
    pub fields: Vec<String>,
}

impl Trip {
    /// Builds a trip from a deserialized row. Returns `None` when the start
    /// time cannot be parsed.
    pub fn from_record(record: TripRecord, fields: Vec<String>) -> Option<Self> {
        let start_time = parse_start_time(&record.start_time)?;

        Some(Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            start_station: record.start_station,
            end_station: record.end_station,
            duration_secs: record.trip_duration.max(0.0),
            user_type: non_blank(record.user_type),
            gender: non_blank(record.gender),
            birth_year: record
                .birth_year
                .filter(|year| year.is_finite())
                .map(|year| year as i32),
            fields,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a start timestamp such as `2017-01-01 09:07:57`.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Trips for one city after month/day filtering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    pub columns: Vec<String>,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(columns: Vec<String>, trips: Vec<Trip>) -> Self {
        Self { columns, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Rows `start..start + size`, clipped to the table.
    pub fn window(&self, start: usize, size: usize) -> &[Trip] {
        let start = start.min(self.trips.len());
        let stop = start.saturating_add(size).min(self.trips.len());
        &self.trips[start..stop]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start_time: &str) -> TripRecord {
        TripRecord {
            start_time: start_time.to_string(),
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            trip_duration: 489.6,
            user_type: Some("Subscriber".to_string()),
            gender: Some(" ".to_string()),
            birth_year: Some(1989.0),
        }
    }

    #[test]
    fn test_parse_start_time_formats() {
        assert!(parse_start_time("2017-01-01 09:07:57").is_some());
        assert!(parse_start_time("2017-01-01 09:07:57.250").is_some());
        assert!(parse_start_time("2017-01-01T09:07:57").is_some());
        assert!(parse_start_time("01/01/2017 09:07").is_none());
        assert!(parse_start_time("").is_none());
    }

    #[test]
    fn test_from_record_derives_columns() {
        let trip = Trip::from_record(record("2017-01-01 09:07:57"), vec![]).unwrap();

        assert_eq!(trip.month, 1);
        assert_eq!(trip.weekday, Weekday::Sun);
        assert_eq!(trip.hour, 9);
        assert_eq!(trip.duration_secs, 489.6);
        assert_eq!(trip.birth_year, Some(1989));
        assert_eq!(trip.gender, None);
    }

    #[test]
    fn test_non_finite_birth_year_is_blank() {
        for year in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut rec = record("2017-01-01 09:07:57");
            rec.birth_year = Some(year);
            let trip = Trip::from_record(rec, vec![]).unwrap();
            assert_eq!(trip.birth_year, None);
        }
    }

    #[test]
    fn test_from_record_rejects_bad_timestamp() {
        assert!(Trip::from_record(record("yesterday"), vec![]).is_none());
    }

    #[test]
    fn test_window_clips_to_table() {
        let trip = Trip::from_record(record("2017-01-01 09:07:57"), vec![]).unwrap();
        let table = TripTable::new(vec![], vec![trip; 7]);

        assert_eq!(table.window(0, 5).len(), 5);
        assert_eq!(table.window(5, 5).len(), 2);
        assert!(table.window(10, 5).is_empty());
    }
}
