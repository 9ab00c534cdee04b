//! Numeric processing - grids, derivatives and whole-set normalizations

mod normalize;

pub use normalize::*;

use thiserror::Error;

/// Errors raised by whole-series normalizations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizationError {
    #[error("Series '{series}' is empty")]
    EmptySeries { series: &'static str },

    #[error("Series '{series}' has non-finite value {value} at index {index}")]
    NonFinite {
        series: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Series '{series}' has zero variance (std dev {std_dev:e}), cannot standardize")]
    ZeroVariance { series: &'static str, std_dev: f64 },
}
