//! Per-column summary of a generated dataset

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use super::{Dataset, COLUMN_NAMES};

/// Min / max / mean of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Whole-table statistics, logged after generation and optionally written as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub at_risk: usize,
    /// Share of rows flagged at risk, 0.0 for an empty dataset
    pub at_risk_fraction: f64,
    pub columns: Vec<ColumnSummary>,
}

impl Dataset {
    /// Summarize every column. Empty datasets yield NaN statistics.
    pub fn summary(&self) -> DatasetSummary {
        let rows = self.len();
        let at_risk = self.at_risk_count();

        let columns = COLUMN_NAMES
            .iter()
            .enumerate()
            .map(|(idx, &name)| {
                let values: Vec<f64> = self.iter().map(|r| r.values()[idx]).collect();
                let (min, max) = if values.is_empty() {
                    (f64::NAN, f64::NAN)
                } else {
                    values
                        .iter()
                        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                            (lo.min(v), hi.max(v))
                        })
                };
                ColumnSummary {
                    name: name.to_string(),
                    min,
                    max,
                    mean: values.mean(),
                }
            })
            .collect();

        DatasetSummary {
            rows,
            at_risk,
            at_risk_fraction: if rows == 0 {
                0.0
            } else {
                at_risk as f64 / rows as f64
            },
            columns,
        }
    }
}

impl DatasetSummary {
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}
