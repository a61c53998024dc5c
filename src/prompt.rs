//! Interactive input: pure validators plus a thin re-prompting shell around them.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::ExplorerConfig;
use crate::error::BikeshareError;
use crate::models::{DayFilter, FilterSelection, MonthFilter};

/// Validate a city name against the configured cities (case-insensitive).
pub fn parse_city(input: &str, config: &ExplorerConfig) -> Result<String, BikeshareError> {
    let city = input.trim().to_lowercase();
    if config.cities.contains_key(&city) {
        Ok(city)
    } else {
        Err(BikeshareError::InvalidInput(format!(
            "'{}' is not one of: {}",
            input.trim(),
            display_city_list(config)
        )))
    }
}

/// Validate a month filter: `all` or January through June.
pub fn parse_month(input: &str) -> Result<MonthFilter, BikeshareError> {
    input.parse()
}

/// Validate a day filter: `all` or a full weekday name.
pub fn parse_day(input: &str) -> Result<DayFilter, BikeshareError> {
    input.parse()
}

/// Validate a yes/no answer.
pub fn parse_yes_no(input: &str) -> Result<bool, BikeshareError> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        other => Err(BikeshareError::InvalidInput(format!(
            "'{other}' is not yes or no"
        ))),
    }
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Configured cities as "Chicago, New York City, Washington".
pub fn display_city_list(config: &ExplorerConfig) -> String {
    config
        .city_names()
        .into_iter()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Asks questions on `output` and reads answers from `input` until they validate.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask once and return the raw answer. End of input is `InputClosed`.
    pub fn ask_raw(&mut self, question: &str) -> Result<String, BikeshareError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer. Only `InvalidInput` triggers a retry;
    /// any other error is returned.
    pub fn ask<T>(
        &mut self,
        question: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Result<T, BikeshareError>,
    ) -> Result<T, BikeshareError> {
        loop {
            let answer = self.ask_raw(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(BikeshareError::InvalidInput(reason)) => {
                    debug!(%answer, %reason, "answer rejected");
                    writeln!(self.output, "{rejection} {reason}.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Strict yes/no question; anything else is re-asked.
    pub fn confirm(&mut self, question: &str) -> Result<bool, BikeshareError> {
        self.ask(question, "Please answer yes or no:", parse_yes_no)
    }

    /// Collect a city, month and day selection.
    pub fn collect_filters(
        &mut self,
        config: &ExplorerConfig,
    ) -> Result<FilterSelection, BikeshareError> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city_question = format!(
            "Which city would you like to explore? ({}): ",
            display_city_list(config)
        );
        let city = self.ask(&city_question, "That city is not available:", |s| {
            parse_city(s, config)
        })?;

        let month = self.ask(
            "Which month? (all, January, February, March, April, May, June): ",
            "That month is not available:",
            parse_month,
        )?;

        let day = self.ask(
            "Which day of the week? (all, Monday, Tuesday, ..., Sunday): ",
            "That day is not available:",
            parse_day,
        )?;

        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(FilterSelection::new(city, month, day))
    }
}
