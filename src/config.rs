//! Configuration management and validation.
//!
//! Holds the file locations and behavioural switches for a pipeline run.
//! Defaults reproduce the fixed layout the tool has always used, so a run
//! without any overrides reads and writes the same paths every time.

use crate::constants::{
    DEFAULT_CLEANED_OUTPUT_PATH, DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_INPUT_PATH,
    DEFAULT_PLOTS_DIR,
};
use crate::error::{Result, SleepHealthError};
use std::path::{Path, PathBuf};

/// Configuration for a single pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Raw CSV to load
    pub input_path: PathBuf,

    /// Where the cleaned CSV is written
    pub cleaned_output_path: PathBuf,

    /// Directory receiving the chart images
    pub plots_dir: PathBuf,

    /// Optional JSON run report destination
    pub report_path: Option<PathBuf>,

    /// Remove fully duplicated rows before cleaning (keeps first occurrence)
    pub drop_duplicates: bool,

    /// Show a progress bar while rendering charts
    pub show_progress: bool,

    /// Rows sampled for CSV type inference
    pub infer_schema_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            cleaned_output_path: PathBuf::from(DEFAULT_CLEANED_OUTPUT_PATH),
            plots_dir: PathBuf::from(DEFAULT_PLOTS_DIR),
            report_path: None,
            drop_duplicates: false,
            show_progress: true,
            infer_schema_length: DEFAULT_INFER_SCHEMA_LENGTH,
        }
    }
}

impl PipelineConfig {
    /// Set the raw input CSV
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the cleaned CSV destination
    pub fn with_cleaned_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cleaned_output_path = path.into();
        self
    }

    /// Set the chart directory
    pub fn with_plots_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.plots_dir = path.into();
        self
    }

    /// Write a JSON run report to `path`
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Enable duplicate row removal
    pub fn with_drop_duplicates(mut self) -> Self {
        self.drop_duplicates = true;
        self
    }

    /// Disable the chart progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Directories that must exist before anything is written
    pub fn output_dirs(&self) -> Vec<&Path> {
        let mut dirs = Vec::new();
        if let Some(parent) = self.cleaned_output_path.parent() {
            if !parent.as_os_str().is_empty() {
                dirs.push(parent);
            }
        }
        dirs.push(self.plots_dir.as_path());
        if let Some(parent) = self.report_path.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() {
                dirs.push(parent);
            }
        }
        dirs
    }

    /// Reject settings that cannot produce a usable run
    pub fn validate(&self) -> Result<()> {
        if self.cleaned_output_path.file_name().is_none() {
            return Err(SleepHealthError::Configuration {
                message: format!(
                    "cleaned output path has no file name: {}",
                    self.cleaned_output_path.display()
                ),
            });
        }

        if self.cleaned_output_path == self.input_path {
            return Err(SleepHealthError::Configuration {
                message: "cleaned output path must differ from the input path".to_string(),
            });
        }

        if self.plots_dir.as_os_str().is_empty() {
            return Err(SleepHealthError::Configuration {
                message: "plots directory must not be empty".to_string(),
            });
        }

        if self.infer_schema_length == 0 {
            return Err(SleepHealthError::Configuration {
                message: "infer_schema_length must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
