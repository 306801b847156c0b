//! Interactive collection of the city, month and day filters.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::console::Console;
use crate::filters::{City, DayFilter, MonthFilter, Selection};
use crate::reports::SEPARATOR;

/// Asks for city, month and day until the user confirms the summary.
///
/// Invalid answers re-ask the same question. "no" at the confirmation
/// starts over from the city.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Selection> {
    loop {
        console.say("\nHello! Let's explore some US bikeshare data!\n")?;

        let city: City = console.ask_parsed(
            "Select a city to analyze - Chicago, New York City or Washington:",
            "Please choose a valid city.\n",
        )?;
        let month: MonthFilter = console.ask_parsed(
            "Select all or filter by month (January-June):",
            "Please choose a valid month.\n",
        )?;
        let day: DayFilter = console.ask_parsed(
            "Select all or filter by day of week:",
            "Please choose a valid day.\n",
        )?;

        let selection = Selection::new(city, month, day);
        console.say(format!("{}\n", selection.summary()))?;

        if console.ask_yes_no(
            "Is this correct? (Type \"yes\" or \"no\"):",
            "Please type \"yes\" or \"no\".\n",
        )? {
            info!(city = %city, month = %month, day = %day, "Filters confirmed");
            console.say("LET'S GOOOOOOO!")?;
            console.say(SEPARATOR)?;
            return Ok(selection);
        }

        console.say("Let's try again.")?;
    }
}
