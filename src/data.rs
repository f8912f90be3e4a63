//! Historical infection counts bundled with the crate.
use std::path::{Path, PathBuf};

use log::{info, trace};
use serde::Deserialize;
use time::macros::format_description;
use time::Date;

use crate::error::ModelError;
use crate::time_series::TimeSeries;

/// Directory holding the bundled data files, relative to the directory with the Cargo.toml file.
pub const DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

const INFECTION_FILE: &str = "infections.csv";

#[derive(Deserialize, Debug)]
struct InfectionRecord {
    date: String,
    infection: f64,
}

#[must_use]
pub fn infection_data_path() -> PathBuf {
    Path::new(DATA_PATH).join(INFECTION_FILE)
}

/// Loads the bundled daily infection counts, indexed by date.
///
/// # Errors
/// See [`load_infection_data_from`].
pub fn load_infection_data() -> Result<TimeSeries, ModelError> {
    load_infection_data_from(&infection_data_path())
}

/// Reads a CSV file with at least a `date` column (`YYYY-MM-DD`) and an `infection` column and
/// returns the `infection` column indexed by date. Other columns are ignored.
///
/// # Errors
/// - `ModelError::CSVError` if the file is missing, a row is malformed or a column is absent
/// - `ModelError::DateError` if a date does not parse
/// - `ModelError::UnorderedIndex` if the dates are not strictly increasing
pub fn load_infection_data_from(path: &Path) -> Result<TimeSeries, ModelError> {
    info!("Loading infection data from {}", path.display());
    let date_format = format_description!("[year]-[month]-[day]");
    let mut reader = csv::Reader::from_path(path)?;

    let mut index: Vec<Date> = Vec::new();
    let mut values = Vec::new();
    for result in reader.deserialize() {
        let record: InfectionRecord = result?;
        trace!("{record:?}");
        index.push(Date::parse(record.date.trim(), date_format)?);
        values.push(record.infection);
    }

    let series = TimeSeries::new("infection", index, values)?;
    info!("Loaded {} days of infection data", series.len());
    Ok(series)
}
