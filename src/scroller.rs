//! Paged display of the raw rows behind the reports.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::Console;
use crate::filters::weekday_name;
use crate::trip::{Trip, TripTable};

pub const DEFAULT_WINDOW: usize = 5;

const YES_OR_NO: &str = "Please choose yes or no.\n";

/// Offers to show the table's rows, `window` at a time, starting from row 0.
///
/// Stops on "no" or at the end of the data. Never prompts again after the
/// last window has been shown.
pub fn scroll_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    window: usize,
) -> Result<()> {
    let window = window.max(1);
    console.say("")?;

    if !console.ask_yes_no(
        "Would you like to see the source data? Choose yes or no:",
        YES_OR_NO,
    )? {
        console.say("Got it... you just want the highlights.\n")?;
        return Ok(());
    }

    let mut start = 0;
    while start < table.len() {
        for (offset, trip) in table.window(start, window).iter().enumerate() {
            write_row(console.out(), &table.columns, start + offset, trip)?;
        }
        debug!(start, window, rows = table.len(), "Raw data window shown");

        if start + window >= table.len() {
            break;
        }

        let question = format!("\nWould you like to see the next {window} row(s)? Choose yes or no:");
        if !console.ask_yes_no(&question, YES_OR_NO)? {
            console.say("Got it... that's enough.")?;
            return Ok(());
        }

        start += window;
    }

    console.say("End of file.\n")?;
    Ok(())
}

/// Writes one row as `column: value` lines, followed by the derived columns.
fn write_row<W: Write>(out: &mut W, columns: &[String], index: usize, trip: &Trip) -> Result<()> {
    writeln!(out, "[row {index}]")?;
    for (i, (column, value)) in columns.iter().zip(&trip.fields).enumerate() {
        if column.is_empty() {
            writeln!(out, "  Unnamed: {i}: {value}")?;
        } else {
            writeln!(out, "  {column}: {value}")?;
        }
    }
    writeln!(out, "  month: {}", trip.month)?;
    writeln!(out, "  day_of_week: {}", weekday_name(trip.weekday))?;
    writeln!(out, "  hour: {}", trip.hour)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{DayFilter, MonthFilter};
    use crate::loader::load_from_reader;
    use std::io::Cursor;

    fn table(rows: usize) -> TripTable {
        let mut csv = String::from(",Start Time,Trip Duration,Start Station,End Station,User Type\n");
        for i in 0..rows {
            csv.push_str(&format!("{i},2017-01-0{} 09:00:00,60,S{i},E{i},Subscriber\n", i % 9 + 1));
        }
        load_from_reader(csv.as_bytes(), MonthFilter::All, DayFilter::All)
            .unwrap()
            .table
    }

    fn run(table: &TripTable, window: usize, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        scroll_raw_data(&mut console, table, window).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_declining_shows_nothing() {
        let out = run(&table(7), 5, "no\n");

        assert!(out.contains("you just want the highlights"));
        assert!(!out.contains("[row 0]"));
    }

    #[test]
    fn test_seven_rows_two_windows() {
        let out = run(&table(7), 5, "yes\nyes\n");

        for i in 0..7 {
            assert!(out.contains(&format!("[row {i}]")), "missing row {i}");
        }
        assert!(!out.contains("[row 7]"));
        // only one "next rows" prompt: none after the final window
        assert_eq!(out.matches("see the next 5 row(s)").count(), 1);
        assert!(out.contains("End of file."));
    }

    #[test]
    fn test_stop_after_first_window() {
        let out = run(&table(7), 5, "yes\nno\n");

        assert!(out.contains("[row 4]"));
        assert!(!out.contains("[row 5]"));
        assert!(out.contains("that's enough"));
        assert!(!out.contains("End of file."));
    }

    #[test]
    fn test_invalid_answer_reprompts_without_advancing() {
        let out = run(&table(7), 5, "yes\nsure\nyes\n");

        assert_eq!(out.matches("Please choose yes or no.").count(), 1);
        assert_eq!(out.matches("[row 0]").count(), 1);
        assert!(out.contains("[row 6]"));
        assert!(out.contains("End of file."));
    }

    #[test]
    fn test_empty_table_reports_end_of_file() {
        let out = run(&TripTable::default(), 5, "yes\n");
        assert!(out.contains("End of file."));
    }

    #[test]
    fn test_row_shows_raw_and_derived_columns() {
        let out = run(&table(1), 5, "yes\n");

        assert!(out.contains("  Unnamed: 0: 0"));
        assert!(out.contains("  Start Station: S0"));
        assert!(out.contains("  month: 1"));
        assert!(out.contains("  day_of_week: Sunday"));
        assert!(out.contains("  hour: 9"));
    }
}
