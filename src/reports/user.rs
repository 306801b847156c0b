use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use super::finish_section;
use super::utility::{mode, value_counts};
use crate::trip::{BIRTH_YEAR, GENDER, TripTable};

/// Birth-year facts for cities that record them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthYears {
    /// The city's file has no Birth Year column.
    NotCaptured,
    /// The column exists but every matching row is blank.
    NoneRecorded,
    Summary {
        oldest: i32,
        youngest: i32,
        most_common: i32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city's file has no Gender column.
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: BirthYears,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Self {
        let user_types = owned(value_counts(
            table.trips.iter().filter_map(|t| t.user_type.as_deref()),
        ));

        let genders = table.has_column(GENDER).then(|| {
            owned(value_counts(
                table.trips.iter().filter_map(|t| t.gender.as_deref()),
            ))
        });

        let birth_years = if table.has_column(BIRTH_YEAR) {
            summarize_birth_years(table.trips.iter().filter_map(|t| t.birth_year))
        } else {
            BirthYears::NotCaptured
        };

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

fn summarize_birth_years(years: impl Iterator<Item = i32> + Clone) -> BirthYears {
    let (Some(oldest), Some(youngest), Some(most_common)) =
        (years.clone().min(), years.clone().max(), mode(years))
    else {
        return BirthYears::NoneRecorded;
    };

    BirthYears::Summary {
        oldest,
        youngest,
        most_common,
    }
}

/// Prints user type, gender and birth year statistics.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn user_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    let stats = UserStats::compute(table);

    writeln!(out, "User Types: ")?;
    if stats.user_types.is_empty() {
        writeln!(out, "-------> No user types recorded.")?;
    }
    for (user_type, count) in &stats.user_types {
        writeln!(out, "-------> {user_type}: {count}")?;
    }
    writeln!(out)?;

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "Counts for each gender: ")?;
            if genders.is_empty() {
                writeln!(out, "-------> No gender values recorded.")?;
            }
            for (gender, count) in genders {
                writeln!(out, "-------> {gender}: {count}")?;
            }
            writeln!(out)?;
        }
        None => writeln!(out, "Gender data was not captured for this city.\n")?,
    }

    match stats.birth_years {
        BirthYears::Summary {
            oldest,
            youngest,
            most_common,
        } => {
            writeln!(out, "Interesting facts: \n")?;
            writeln!(out, "The oldest person in the dataset was born in {oldest}.\n")?;
            writeln!(out, "The youngest person in the dataset was born in {youngest}.\n")?;
            writeln!(
                out,
                "The most common year for a person in the dataset to be born is {most_common}.\n"
            )?;
        }
        BirthYears::NoneRecorded => {
            writeln!(out, "No birth years were recorded for the selected trips.\n")?
        }
        BirthYears::NotCaptured => {
            writeln!(out, "Birth year data was not captured for this city.\n")?
        }
    }

    finish_section(out, started)
}
