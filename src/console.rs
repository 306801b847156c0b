//! Line-based prompt I/O.
//!
//! [`Console`] wraps any `BufRead` + `Write` pair so the interactive flow can
//! run against stdin/stdout or against scripted input in tests.

use anyhow::{Result, bail};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question`, reads one line, and returns it trimmed and lower-cased.
    ///
    /// # Errors
    ///
    /// Fails when input is closed, since no answer can ever arrive.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer to: {question}");
        }
        writeln!(self.output)?;

        Ok(line.trim().to_lowercase())
    }

    /// Asks until the answer parses as `T`, printing `invalid` after each miss.
    pub fn ask_parsed<T: FromStr>(&mut self, question: &str, invalid: &str) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(invalid)?,
            }
        }
    }

    /// Asks until the answer is "yes" or "no", printing `invalid` otherwise.
    pub fn ask_yes_no(&mut self, question: &str, invalid: &str) -> Result<bool> {
        loop {
            match self.ask(question)?.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => self.say(invalid)?,
            }
        }
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writer for report output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
