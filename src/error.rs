//! Error handling for sleep health processing operations.
//!
//! Provides error types with context for loading, cleaning, chart
//! rendering and report writing failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SleepHealthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Malformed value in column '{column}' at row {row}: {value:?}")]
    MalformedCompositeField {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Failed to write chart {path}: {source}")]
    ChartWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, SleepHealthError>;
