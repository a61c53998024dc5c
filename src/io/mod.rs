mod csv_io;

use tracing::{debug, info};

use crate::config::ExplorerConfig;
use crate::error::BikeshareError;
use crate::models::{FilterSelection, TripDataset};

pub use csv_io::{read_trips, read_trips_from_reader, trip_cells, write_trips, write_trips_to_writer};

/// Load the trip log for the selected city and apply the month/day filters.
pub fn load_city(
    config: &ExplorerConfig,
    selection: &FilterSelection,
) -> Result<TripDataset, BikeshareError> {
    let path = config.city_path(&selection.city)?;
    info!(city = %selection.city, path = %path.display(), "loading trip log");

    let dataset = read_trips(&path, &selection.city)?;
    debug!(rows = dataset.len(), "trip log loaded");

    let filtered = dataset.filter(selection.month, selection.day);
    info!(
        kept = filtered.len(),
        total = dataset.len(),
        month = %selection.month,
        day = %selection.day,
        "filters applied"
    );
    Ok(filtered)
}
