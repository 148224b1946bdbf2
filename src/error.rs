//! Error type shared by every library module.

use thiserror::Error;

/// Errors surfaced by building, validating, or toggling dashboard charts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A legend click pointed past the station views that exist.
    #[error("invalid series index {index}: only {available} series available")]
    InvalidSeriesIndex { index: usize, available: usize },

    /// Injected data failed boundary validation.
    #[error("malformed input data: {0}")]
    MalformedInputData(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        ChartError::MalformedInputData(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
