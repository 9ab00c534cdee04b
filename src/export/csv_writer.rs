//! CSV output: header row of column names, one row per point, no index column.

use std::path::Path;

use super::ExportError;
use crate::types::{Dataset, PointRecord};

/// Write `dataset` as CSV to `path`, replacing any existing file.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in dataset {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Read a CSV previously produced by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Dataset, ExportError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let records = rdr
        .deserialize::<PointRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(records))
}
