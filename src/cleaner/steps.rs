//! The individual cleaning steps.

use super::CleaningStep;
use crate::constants::columns::{
    BLOOD_PRESSURE, BMI_CATEGORY, BP_DIASTOLIC, BP_SYSTOLIC, SLEEP_DISORDER,
};
use crate::constants::labels::{BMI_NORMAL, BMI_NORMAL_WEIGHT, NO_DISORDER};
use crate::constants::BLOOD_PRESSURE_DELIMITER;
use crate::error::{Result, SleepHealthError};
use polars::prelude::*;

/// Replace missing sleep disorder values with the explicit "None" category.
///
/// Nulls and blank strings both count as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepDisorderImputation;

impl CleaningStep for SleepDisorderImputation {
    fn name(&self) -> &'static str {
        "sleep_disorder_imputation"
    }

    fn description(&self) -> &'static str {
        "Filled missing 'Sleep Disorder' values with 'None'"
    }

    fn required_column(&self) -> Option<&'static str> {
        Some(SLEEP_DISORDER)
    }

    fn apply(&self, mut df: DataFrame) -> Result<(DataFrame, usize)> {
        let column = df.column(SLEEP_DISORDER)?.cast(&DataType::String)?;

        let mut filled_count = 0;
        let filled: StringChunked = column
            .str()?
            .into_iter()
            .map(|value| match value {
                Some(label) if !label.trim().is_empty() => Some(label),
                _ => {
                    filled_count += 1;
                    Some(NO_DISORDER)
                }
            })
            .collect();

        df.with_column(filled.with_name(SLEEP_DISORDER.into()).into_series())?;
        Ok((df, filled_count))
    }
}

/// Split "systolic/diastolic" strings into two integer columns and drop
/// the source column.
///
/// Parsing is strict: the first value that is missing or not of the form
/// `<int>/<int>` aborts the step with the offending row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureSplit;

impl CleaningStep for BloodPressureSplit {
    fn name(&self) -> &'static str {
        "blood_pressure_split"
    }

    fn description(&self) -> &'static str {
        "Split 'Blood Pressure' into 'BP_Systolic' and 'BP_Diastolic'"
    }

    fn required_column(&self) -> Option<&'static str> {
        Some(BLOOD_PRESSURE)
    }

    fn apply(&self, mut df: DataFrame) -> Result<(DataFrame, usize)> {
        let column = df.column(BLOOD_PRESSURE)?.cast(&DataType::String)?;
        let values = column.str()?;

        let mut systolic = Vec::with_capacity(values.len());
        let mut diastolic = Vec::with_capacity(values.len());

        for (row, value) in values.into_iter().enumerate() {
            let (high, low) = value.and_then(parse_blood_pressure).ok_or_else(|| {
                SleepHealthError::MalformedCompositeField {
                    column: BLOOD_PRESSURE.to_string(),
                    row,
                    value: value.unwrap_or("<missing>").to_string(),
                }
            })?;
            systolic.push(high);
            diastolic.push(low);
        }

        let rows = systolic.len();
        df.with_column(Series::new(BP_SYSTOLIC.into(), systolic))?;
        df.with_column(Series::new(BP_DIASTOLIC.into(), diastolic))?;
        let df = df.drop(BLOOD_PRESSURE)?;

        Ok((df, rows))
    }
}

/// Parse a single "120/80" reading. Surrounding whitespace on either part
/// is tolerated; anything else is rejected.
pub fn parse_blood_pressure(value: &str) -> Option<(i64, i64)> {
    let (systolic, diastolic) = value.split_once(BLOOD_PRESSURE_DELIMITER)?;
    if diastolic.contains(BLOOD_PRESSURE_DELIMITER) {
        return None;
    }

    let systolic = systolic.trim().parse().ok()?;
    let diastolic = diastolic.trim().parse().ok()?;
    Some((systolic, diastolic))
}

/// Collapse the "Normal Weight" BMI label into "Normal".
#[derive(Debug, Clone, Copy, Default)]
pub struct BmiCategoryCanonicalization;

impl CleaningStep for BmiCategoryCanonicalization {
    fn name(&self) -> &'static str {
        "bmi_category_canonicalization"
    }

    fn description(&self) -> &'static str {
        "Normalized 'BMI Category': merged 'Normal Weight' into 'Normal'"
    }

    fn required_column(&self) -> Option<&'static str> {
        Some(BMI_CATEGORY)
    }

    fn apply(&self, df: DataFrame) -> Result<(DataFrame, usize)> {
        let rewritten = df
            .column(BMI_CATEGORY)?
            .cast(&DataType::String)?
            .str()?
            .into_iter()
            .filter(|value| *value == Some(BMI_NORMAL_WEIGHT))
            .count();

        if rewritten == 0 {
            return Ok((df, 0));
        }

        let bmi = col(BMI_CATEGORY).cast(DataType::String);
        let df = df
            .lazy()
            .with_column(
                when(bmi.clone().eq(lit(BMI_NORMAL_WEIGHT)))
                    .then(lit(BMI_NORMAL))
                    .otherwise(bmi)
                    .alias(BMI_CATEGORY),
            )
            .collect()?;

        Ok((df, rewritten))
    }
}

/// Drop rows that repeat an earlier row exactly, keeping the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateRowRemoval;

impl CleaningStep for DuplicateRowRemoval {
    fn name(&self) -> &'static str {
        "duplicate_row_removal"
    }

    fn description(&self) -> &'static str {
        "Dropped duplicate rows"
    }

    fn required_column(&self) -> Option<&'static str> {
        None
    }

    fn apply(&self, df: DataFrame) -> Result<(DataFrame, usize)> {
        if df.height() == 0 || df.width() == 0 {
            return Ok((df, 0));
        }

        let before = df.height();
        let df = df
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        let removed = before - df.height();

        Ok((df, removed))
    }
}
