use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::BikeshareError;
use crate::models::{Column, Trip, TripDataset};

/// Timestamp layouts seen in trip logs, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV row structure for trip data. Columns other than `Start Time` may be absent.
#[derive(Debug, serde::Deserialize)]
struct TripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Parse a start/end timestamp in any of the accepted layouts.
pub(crate) fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn row_to_trip(row: TripRow, row_number: usize) -> Result<Trip, BikeshareError> {
    let start_time = parse_timestamp(&row.start_time).ok_or_else(|| {
        BikeshareError::ParseError(format!(
            "Row {row_number}: invalid Start Time '{}'",
            row.start_time
        ))
    })?;

    let end_time = match non_empty(row.end_time) {
        Some(text) => Some(parse_timestamp(&text).ok_or_else(|| {
            BikeshareError::ParseError(format!("Row {row_number}: invalid End Time '{text}'"))
        })?),
        None => None,
    };

    Ok(Trip {
        start_time,
        end_time,
        duration_secs: row.trip_duration,
        start_station: non_empty(row.start_station),
        end_station: non_empty(row.end_station),
        user_type: non_empty(row.user_type),
        gender: non_empty(row.gender),
        birth_year: row.birth_year.map(|y| y.round() as i32),
    })
}

fn parse_csv_records<R: Read>(
    rdr: &mut csv::Reader<R>,
    city: &str,
) -> Result<TripDataset, BikeshareError> {
    let columns: Vec<Column> = rdr
        .headers()?
        .iter()
        .filter_map(Column::from_header)
        .collect();

    if !columns.contains(&Column::StartTime) {
        return Err(BikeshareError::MissingColumn(
            Column::StartTime.header().to_string(),
        ));
    }

    let mut dataset = TripDataset::new(city, columns);
    for (index, result) in rdr.deserialize().enumerate() {
        let row: TripRow = result?;
        dataset.trips.push(row_to_trip(row, index + 1)?);
    }

    Ok(dataset)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

/// Read a city's trip log from a CSV file.
pub fn read_trips(path: impl AsRef<Path>, city: &str) -> Result<TripDataset, BikeshareError> {
    let mut rdr = reader_builder().from_path(path.as_ref())?;
    parse_csv_records(&mut rdr, city)
}

/// Read a city's trip log from any CSV source.
pub fn read_trips_from_reader<R: Read>(
    reader: R,
    city: &str,
) -> Result<TripDataset, BikeshareError> {
    let mut rdr = reader_builder().from_reader(reader);
    parse_csv_records(&mut rdr, city)
}

fn cell(trip: &Trip, column: Column) -> String {
    match column {
        Column::StartTime => trip.start_time.format(TIMESTAMP_OUTPUT_FORMAT).to_string(),
        Column::EndTime => trip
            .end_time
            .map(|t| t.format(TIMESTAMP_OUTPUT_FORMAT).to_string())
            .unwrap_or_default(),
        Column::TripDuration => trip
            .duration_secs
            .map(|d| d.to_string())
            .unwrap_or_default(),
        Column::StartStation => trip.start_station.clone().unwrap_or_default(),
        Column::EndStation => trip.end_station.clone().unwrap_or_default(),
        Column::UserType => trip.user_type.clone().unwrap_or_default(),
        Column::Gender => trip.gender.clone().unwrap_or_default(),
        Column::BirthYear => trip.birth_year.map(|y| y.to_string()).unwrap_or_default(),
    }
}

/// Render one trip as display cells for the given columns.
pub fn trip_cells(trip: &Trip, columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| cell(trip, *c)).collect()
}

/// Write a dataset's trips as CSV, keeping only the columns the dataset has.
pub fn write_trips_to_writer<W: Write>(
    dataset: &TripDataset,
    writer: W,
) -> Result<(), BikeshareError> {
    let columns: Vec<Column> = dataset.columns.iter().copied().collect();
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(columns.iter().map(|c| c.header()))?;
    for trip in &dataset.trips {
        wtr.write_record(trip_cells(trip, &columns))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a dataset's trips to a CSV file.
pub fn write_trips(dataset: &TripDataset, path: impl AsRef<Path>) -> Result<(), BikeshareError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_trips_to_writer(dataset, file)
}
