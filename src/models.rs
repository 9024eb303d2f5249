//! Core data structures and types for sleep health processing.
//!
//! Defines the diagnostics, cleaning outcomes, chart outcomes and run
//! reports passed between the pipeline stages.

use crate::constants::{chart_files, columns};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Row and column counts of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

impl From<(usize, usize)> for TableShape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self { rows, columns }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

/// Per-column schema and completeness information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDiagnostic {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub null_count: usize,
}

/// Read-only diagnostics gathered before cleaning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionReport {
    pub shape: TableShape,
    pub columns: Vec<ColumnDiagnostic>,
    /// Rows identical to an earlier row
    pub duplicate_rows: usize,
}

impl InspectionReport {
    /// Total number of missing cells across all columns
    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.null_count).sum()
    }
}

/// What happened to a single cleaning step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Applied { rows_affected: usize },
    Skipped { missing_column: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: &'static str,
    pub outcome: StepOutcome,
}

/// Ordered record of every cleaning step the cleaner considered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub steps: Vec<StepRecord>,
}

impl CleaningReport {
    pub fn outcome(&self, step: &str) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|record| record.step == step)
            .map(|record| &record.outcome)
    }

    pub fn applied_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|record| matches!(record.outcome, StepOutcome::Applied { .. }))
            .count()
    }
}

/// The fixed set of charts produced from a cleaned table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    DisorderDistribution,
    CorrelationHeatmap,
    SleepDurationBoxplot,
    StressLevelBoxplot,
    BmiByDisorder,
}

impl ChartKind {
    /// Rendering order
    pub const ALL: [ChartKind; 5] = [
        ChartKind::DisorderDistribution,
        ChartKind::CorrelationHeatmap,
        ChartKind::SleepDurationBoxplot,
        ChartKind::StressLevelBoxplot,
        ChartKind::BmiByDisorder,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::DisorderDistribution => chart_files::DISORDER_DISTRIBUTION,
            ChartKind::CorrelationHeatmap => chart_files::CORRELATION_HEATMAP,
            ChartKind::SleepDurationBoxplot => chart_files::SLEEP_DURATION_BOXPLOT,
            ChartKind::StressLevelBoxplot => chart_files::STRESS_LEVEL_BOXPLOT,
            ChartKind::BmiByDisorder => chart_files::BMI_DISTRIBUTION,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::DisorderDistribution => "Distribution of Sleep Disorders",
            ChartKind::CorrelationHeatmap => "Correlation Heatmap",
            ChartKind::SleepDurationBoxplot => "Sleep Duration vs Sleep Disorder",
            ChartKind::StressLevelBoxplot => "Stress Level vs Sleep Disorder",
            ChartKind::BmiByDisorder => "Sleep Disorder Distribution by BMI Category",
        }
    }

    /// Image size in pixels (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ChartKind::DisorderDistribution => (800, 500),
            ChartKind::CorrelationHeatmap => (1000, 800),
            ChartKind::SleepDurationBoxplot | ChartKind::StressLevelBoxplot => (800, 600),
            ChartKind::BmiByDisorder => (1000, 600),
        }
    }

    /// Columns the chart cannot be drawn without.
    /// The heatmap only needs numeric columns, which are discovered at render time.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            ChartKind::DisorderDistribution => &[columns::SLEEP_DISORDER],
            ChartKind::CorrelationHeatmap => &[],
            ChartKind::SleepDurationBoxplot => &[columns::SLEEP_DISORDER, columns::SLEEP_DURATION],
            ChartKind::StressLevelBoxplot => &[columns::SLEEP_DISORDER, columns::STRESS_LEVEL],
            ChartKind::BmiByDisorder => &[columns::BMI_CATEGORY, columns::SLEEP_DISORDER],
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome {
    Written {
        chart: ChartKind,
        path: PathBuf,
    },
    Skipped {
        chart: ChartKind,
        missing_columns: Vec<String>,
    },
}

impl ChartOutcome {
    pub fn chart(&self) -> ChartKind {
        match self {
            ChartOutcome::Written { chart, .. } | ChartOutcome::Skipped { chart, .. } => *chart,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, ChartOutcome::Written { .. })
    }
}

/// Descriptive statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Everything a completed run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub cleaned_output_path: PathBuf,
    pub inspection: InspectionReport,
    pub cleaning: CleaningReport,
    pub cleaned_shape: TableShape,
    pub charts: Vec<ChartOutcome>,
    pub summary: Vec<ColumnSummary>,
    pub processing_time_ms: u128,
}

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed(Box<RunReport>),
    /// The input file did not exist; nothing was written
    InputMissing { path: PathBuf },
}
