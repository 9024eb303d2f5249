//! CSV read/write boundary.
//!
//! Loads the raw dataset into a polars `DataFrame` and persists the cleaned
//! table. No schema validation happens here; each cleaning step checks for
//! the columns it needs.

use crate::constants::NULL_VALUE_TOKENS;
use crate::error::{Result, SleepHealthError};
use crate::models::TableShape;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read a headered, comma-separated file into a table
pub fn load_table(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    if !path.exists() {
        return Err(SleepHealthError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading data from {}", path.display());

    let null_values = NULL_VALUE_TOKENS.iter().map(|token| (*token).into()).collect();
    let parse_options =
        CsvParseOptions::default().with_null_values(Some(NullValues::AllColumns(null_values)));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(infer_schema_length))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    info!("Data loaded. Shape: {}", TableShape::from(df.shape()));
    Ok(df)
}

/// Write a table as headered CSV without an index column.
///
/// The data lands in a sibling temporary file first and is renamed into
/// place, so a failed write leaves no partial file at `path`.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let staging = staging_path(path);
    debug!("Writing {} rows to {}", df.height(), staging.display());

    let written = File::create(&staging)
        .map_err(SleepHealthError::from)
        .and_then(|mut file| {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .map_err(SleepHealthError::from)
        });

    if let Err(error) = written {
        let _ = fs::remove_file(&staging);
        return Err(error);
    }

    if let Err(error) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(error.into());
    }
    info!("Cleaned data saved to {}", path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
