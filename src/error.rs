//! Typed errors raised by the cleaning stages.
//!
//! Every variant is fatal: the pipeline never recovers from one, it stops
//! and lets the error surface through `main`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("column '{column}' row {row}: '{value}' is not numeric")]
    NonNumeric {
        column: String,
        row: String,
        value: String,
    },

    /// No usable values, so a mean or quantile is undefined.
    #[error("column '{0}' has no values to compute statistics from")]
    EmptyColumn(String),

    #[error("column '{column}' row {row}: cannot convert '{value}' to {target}")]
    Conversion {
        column: String,
        row: String,
        value: String,
        target: &'static str,
    },
}

pub type Result<T, E = CleanError> = std::result::Result<T, E>;
