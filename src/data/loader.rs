use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Column headers the loader requires. Any other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Flight Number",
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not find data file at {}; make sure the launch CSV is in place", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV row {row}: payload mass must be a finite number, got {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("CSV row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },

    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    // Integral floats such as `1.0` are accepted as well.
    class: f64,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, LoadError> {
        if !self.payload_mass_kg.is_finite() {
            return Err(LoadError::InvalidPayload {
                row,
                value: self.payload_mass_kg,
            });
        }

        let outcome = if self.class.fract() == 0.0 {
            Outcome::from_class(self.class as i64)
        } else {
            None
        };
        let outcome = outcome.ok_or(LoadError::InvalidClass {
            row,
            value: self.class,
        })?;

        Ok(LaunchRecord {
            flight_number: self.flight_number,
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            booster_version_category: self.booster_version_category,
            outcome,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!("Loaded {} launch records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse launch records from any CSV source with a header row.
pub fn load_reader<R: Read>(source: R) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { row: 0, source })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        // 1-based data row, header excluded.
        let row = row_no + 1;
        let raw = result.map_err(|source| LoadError::Csv { row, source })?;
        records.push(raw.into_record(row)?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(LaunchDataset::from_records(records))
}
