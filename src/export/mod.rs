//! Dataset persistence
//!
//! The table is written twice, CSV first and XLSX second. The two writes are
//! independent calls made in order; if the CSV write fails the XLSX write is
//! never attempted, and nothing already on disk is cleaned up.

mod csv_writer;
mod xlsx_writer;

pub use csv_writer::{read_csv, write_csv};
pub use xlsx_writer::write_xlsx;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::types::{Dataset, DatasetSummary};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths of the files a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub csv: PathBuf,
    pub xlsx: PathBuf,
}

/// Write both table files described by `output`, creating the directory if needed.
pub fn write_all(dataset: &Dataset, output: &OutputConfig) -> Result<WrittenFiles, ExportError> {
    std::fs::create_dir_all(&output.dir).map_err(|e| ExportError::Io {
        path: output.dir.clone(),
        source: e,
    })?;

    let csv = output.csv_path();
    write_csv(dataset, &csv)?;
    debug!(path = %csv.display(), rows = dataset.len(), "CSV written");

    let xlsx = output.xlsx_path();
    write_xlsx(dataset, &xlsx, &output.sheet_name)?;
    debug!(path = %xlsx.display(), rows = dataset.len(), "XLSX written");

    info!(csv = %csv.display(), xlsx = %xlsx.display(), "Dataset written");
    Ok(WrittenFiles { csv, xlsx })
}

/// Write the dataset summary as pretty-printed JSON.
pub fn write_summary(summary: &DatasetSummary, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "Summary written");
    Ok(())
}
