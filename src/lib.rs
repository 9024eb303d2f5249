//! Sleep Health Processor Library
//!
//! Cleans the Sleep Health and Lifestyle survey extract and produces a
//! fixed set of exploratory charts.
//!
//! This library provides tools for:
//! - Loading the raw CSV and reporting its schema, missing values and duplicates
//! - Cleaning: imputing absent sleep disorders, splitting blood pressure
//!   readings and canonicalizing BMI labels
//! - Writing the cleaned table back to CSV
//! - Rendering distribution, correlation and box plot charts as PNG
//! - Summary statistics and an optional JSON run report

pub mod charts;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inspector;
pub mod loader;
pub mod models;
pub mod processor;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use charts::Visualizer;
pub use cleaner::{Cleaner, CleaningStep};
pub use config::PipelineConfig;
pub use error::{Result, SleepHealthError};
pub use models::{ChartKind, ChartOutcome, CleaningReport, RunOutcome, RunReport, StepOutcome};
pub use processor::Pipeline;
