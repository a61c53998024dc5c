//! The interactive explore loop and the one-shot statistics report it prints.

use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::{info, warn};

use crate::analysis::{Analyzer, Paginator};
use crate::config::ExplorerConfig;
use crate::error::BikeshareError;
use crate::io;
use crate::models::{Column, FilterSelection, TripDataset};
use crate::prompt::Prompter;
use crate::visualization::{
    format_duration_stats, format_hourly_histogram, format_station_stats, format_summary,
    format_time_stats, format_trip_page, format_user_stats,
};

const SEPARATOR_WIDTH: usize = 40;

/// Printed when the last page of raw data has been shown.
pub const END_OF_DATA: &str = "No more raw data to display.";

fn timed_section<W: Write>(
    out: &mut W,
    render: impl FnOnce() -> String,
) -> Result<(), BikeshareError> {
    let started = Instant::now();
    let text = render();
    write!(out, "{text}")?;
    writeln!(
        out,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// Print every statistics section for an already filtered dataset.
pub fn write_report<W: Write>(dataset: &TripDataset, out: &mut W) -> Result<(), BikeshareError> {
    let analyzer = Analyzer::new(dataset);
    if dataset.is_empty() {
        warn!(city = %dataset.city, "no trips match the selected filters");
    }

    timed_section(out, || format_time_stats(&analyzer.time_stats()))?;
    timed_section(out, || format_hourly_histogram(&analyzer.hourly_distribution()))?;
    timed_section(out, || format_station_stats(&analyzer.station_stats()))?;
    timed_section(out, || format_duration_stats(analyzer.duration_stats().as_ref()))?;
    timed_section(out, || format_user_stats(&analyzer.user_stats()))?;
    timed_section(out, || format_summary(&analyzer.summary()))?;
    Ok(())
}

/// Load, filter and report on one selection without prompting.
/// Returns the filtered dataset so callers can show or export raw rows.
pub fn run_report<W: Write>(
    config: &ExplorerConfig,
    selection: &FilterSelection,
    out: &mut W,
) -> Result<TripDataset, BikeshareError> {
    let dataset = io::load_city(config, selection)?;
    writeln!(
        out,
        "Exploring {} ({} trips)",
        selection,
        dataset.len()
    )?;
    write_report(&dataset, out)?;
    Ok(dataset)
}

/// Interactive explore loop over a reader/writer pair.
pub struct Session<R, W> {
    config: ExplorerConfig,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: ExplorerConfig, input: R, output: W) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Prompt, report and offer raw data until the user declines to restart.
    pub fn run(&mut self) -> Result<(), BikeshareError> {
        loop {
            let selection = self.prompter.collect_filters(&self.config)?;
            info!(%selection, "starting analysis");

            let dataset = run_report(&self.config, &selection, self.prompter.output())?;
            self.browse_raw_data(&dataset)?;

            let again = match self
                .prompter
                .ask_raw("\nWould you like to restart? Enter yes or no.\n")
            {
                Ok(answer) => answer,
                Err(BikeshareError::InputClosed) => break,
                Err(e) => return Err(e),
            };
            if !again.trim().eq_ignore_ascii_case("yes") {
                break;
            }
        }
        Ok(())
    }

    /// Offer raw trips one page at a time. Returns the number of pages shown.
    pub fn browse_raw_data(&mut self, dataset: &TripDataset) -> Result<usize, BikeshareError> {
        let columns: Vec<Column> = dataset.columns.iter().copied().collect();
        let mut pages = Paginator::new(&dataset.trips, self.config.page_size);
        if pages.is_exhausted() {
            return Ok(0);
        }

        let question = format!(
            "\nWould you like to see {} rows of raw data? Enter yes or no: ",
            pages.page_size()
        );
        let mut shown = 0;
        while self.prompter.confirm(&question)? {
            let first_row = pages.position();
            if let Some(page) = pages.next_page() {
                let table = format_trip_page(page, &columns, first_row);
                write!(self.prompter.output(), "{table}")?;
                shown += 1;
            }
            if pages.is_exhausted() {
                writeln!(self.prompter.output(), "{END_OF_DATA}")?;
                break;
            }
        }
        Ok(shown)
    }
}
