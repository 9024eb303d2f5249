//! Column-level cleaning pipeline.
//!
//! The cleaner runs an ordered list of [`CleaningStep`]s over a table. Each
//! step declares the column it operates on; when that column is absent the
//! step is recorded as skipped and the table passes through untouched.
//! Every step is deterministic and idempotent, so cleaning an already
//! cleaned table changes nothing.

pub mod steps;

#[cfg(test)]
mod tests;

pub use steps::{
    BloodPressureSplit, BmiCategoryCanonicalization, DuplicateRowRemoval,
    SleepDisorderImputation,
};

use crate::error::Result;
use crate::models::{CleaningReport, StepOutcome, StepRecord};
use polars::prelude::DataFrame;
use tracing::{debug, info};

/// A single table transformation
pub trait CleaningStep {
    /// Stable identifier used in reports
    fn name(&self) -> &'static str;

    /// Human readable summary printed after the step runs
    fn description(&self) -> &'static str;

    /// Column that must be present for the step to run, if any
    fn required_column(&self) -> Option<&'static str>;

    /// Transform the table, returning it with the number of rows changed
    fn apply(&self, df: DataFrame) -> Result<(DataFrame, usize)>;
}

/// Ordered collection of cleaning steps
pub struct Cleaner {
    steps: Vec<Box<dyn CleaningStep>>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::standard()
    }
}

impl Cleaner {
    /// Imputation, blood pressure split, then BMI canonicalization
    pub fn standard() -> Self {
        Self {
            steps: vec![
                Box::new(SleepDisorderImputation),
                Box::new(BloodPressureSplit),
                Box::new(BmiCategoryCanonicalization),
            ],
        }
    }

    /// Build a cleaner from an explicit step list
    pub fn from_steps(steps: Vec<Box<dyn CleaningStep>>) -> Self {
        Self { steps }
    }

    /// Remove fully duplicated rows before any other step
    pub fn with_duplicate_removal(mut self) -> Self {
        self.steps.insert(0, Box::new(DuplicateRowRemoval));
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step in order.
    ///
    /// Fails on the first step error; no partially cleaned table is returned.
    pub fn clean(&self, mut df: DataFrame) -> Result<(DataFrame, CleaningReport)> {
        let mut report = CleaningReport::default();

        for step in &self.steps {
            if let Some(column) = step.required_column() {
                if df.get_column_index(column).is_none() {
                    debug!("Skipping {}: column '{}' not present", step.name(), column);
                    report.steps.push(StepRecord {
                        step: step.name(),
                        outcome: StepOutcome::Skipped {
                            missing_column: column.to_string(),
                        },
                    });
                    continue;
                }
            }

            let (next, rows_affected) = step.apply(df)?;
            df = next;

            info!("{} ({} rows affected)", step.description(), rows_affected);
            report.steps.push(StepRecord {
                step: step.name(),
                outcome: StepOutcome::Applied { rows_affected },
            });
        }

        Ok((df, report))
    }
}
