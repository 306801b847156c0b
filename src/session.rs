//! One interactive session: prompt, load, report, scroll, restart.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::cities::CityCatalog;
use crate::console::Console;
use crate::filters::Selection;
use crate::loader::load_data;
use crate::prompt::get_filters;
use crate::reports::print_all;
use crate::scroller::scroll_raw_data;

/// Runs session iterations until the user declines to restart.
///
/// Each iteration reloads the city's file; nothing carries over.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &CityCatalog,
    window: usize,
) -> Result<()> {
    let mut iteration = 0usize;

    loop {
        iteration += 1;
        info!(iteration, "Starting session iteration");

        let selection = get_filters(console)?;
        let loaded = load_data(catalog, &selection)?;

        print_all(console.out(), &loaded)?;
        scroll_raw_data(console, &loaded.table, window)?;

        console.say("")?;
        let restart = console.ask_yes_no(
            "Would you like to restart? Enter yes or no:",
            "Please state \"yes\" to restart or \"no\" to quit.",
        )?;

        if !restart {
            console.say("Thanks for taking a look!\n")?;
            return Ok(());
        }
        console.say("Once more into the breach...")?;
    }
}

/// Loads once for `selection` and prints the four reports, with no prompts.
pub fn run_report<W: Write>(out: &mut W, catalog: &CityCatalog, selection: &Selection) -> Result<()> {
    writeln!(out, "{}", selection.summary())?;
    let loaded = load_data(catalog, selection)?;
    print_all(out, &loaded)
}
