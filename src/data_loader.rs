//! CSV observation loading.
//!
//! Reads one row per region (id plus two numeric columns) into an
//! [`Observations`] map. Rows whose values are missing or not numeric become
//! absent observations rather than errors.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::classify::{Observations, Pair};
use crate::config::DataConfig;
use crate::error::{BivarmapError, Result};

/// Load observations from a CSV file
pub fn load_observations(path: &Path, data_config: &DataConfig) -> Result<Observations> {
    if !path.exists() {
        return Err(BivarmapError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = std::fs::File::open(path)?;
    info!("Opened data file: {}", path.display());

    let observations = read_observations(file, data_config)?;

    let absent = observations.values().filter(|o| o.is_none()).count();
    info!(
        operation = "data_load",
        file_path = %path.display(),
        region_count = observations.len(),
        absent_count = absent,
        "Observations loaded"
    );

    Ok(observations)
}

/// Read observations from any CSV source with a header row
pub fn read_observations<R: Read>(source: R, data_config: &DataConfig) -> Result<Observations> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let id_idx = column_index(&headers, &data_config.id_column)?;
    let a_idx = column_index(&headers, &data_config.a_column)?;
    let b_idx = column_index(&headers, &data_config.b_column)?;
    debug!(id_idx, a_idx, b_idx, "Resolved CSV columns");

    let mut observations = Observations::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let id = record.get(id_idx).unwrap_or_default();
        if id.is_empty() {
            warn!(row = line + 1, "Skipping row without region id");
            continue;
        }

        let pair = match (parse_value(record.get(a_idx)), parse_value(record.get(b_idx))) {
            (Some(a), Some(b)) => Some(Pair::new(a, b)),
            _ => {
                warn!(row = line + 1, id = id, "Region has no usable data");
                None
            }
        };

        // Later rows replace earlier ones with the same id
        observations.insert(id.to_string(), pair);
    }

    Ok(observations)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| BivarmapError::DataNotFound {
            message: format!("Column not found in CSV header: {}", name),
        })
}

fn parse_value(field: Option<&str>) -> Option<f64> {
    field
        .filter(|f| !f.is_empty())
        .and_then(|f| f.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
