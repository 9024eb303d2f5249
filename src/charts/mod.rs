//! Chart rendering for cleaned tables.
//!
//! Renders the five fixed exploratory charts as PNG files. Charts are
//! independent: one whose input columns are missing is skipped with a
//! warning while the rest are still written. Each chart owns its canvas
//! only for the duration of its own render.

pub mod axes;
pub mod bar;
pub mod boxplot;
pub mod canvas;
pub mod font;
pub mod heatmap;

use crate::constants::columns::{SLEEP_DURATION, STRESS_LEVEL};
use crate::error::Result;
use crate::models::{ChartKind, ChartOutcome};
use crate::stats;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes the chart set into a plots directory
#[derive(Debug, Clone)]
pub struct Visualizer {
    plots_dir: PathBuf,
    show_progress: bool,
}

impl Visualizer {
    pub fn new(plots_dir: impl Into<PathBuf>) -> Self {
        Self {
            plots_dir: plots_dir.into(),
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr while rendering
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn plots_dir(&self) -> &Path {
        &self.plots_dir
    }

    pub fn chart_path(&self, chart: ChartKind) -> PathBuf {
        self.plots_dir.join(chart.file_name())
    }

    /// Render every chart in order, creating the plots directory if needed
    pub fn render_all(&self, df: &DataFrame) -> Result<Vec<ChartOutcome>> {
        fs::create_dir_all(&self.plots_dir)?;

        let progress = self.progress_bar();
        let mut outcomes = Vec::with_capacity(ChartKind::ALL.len());

        for chart in ChartKind::ALL {
            progress.set_message(chart.title());

            let missing = missing_columns(chart, df);
            if !missing.is_empty() {
                warn!("Skipping '{}': missing columns {:?}", chart, missing);
                outcomes.push(ChartOutcome::Skipped {
                    chart,
                    missing_columns: missing,
                });
                progress.inc(1);
                continue;
            }

            let path = self.chart_path(chart);
            self.render(chart, df, &path)?;
            debug!("Rendered '{}' to {}", chart, path.display());

            outcomes.push(ChartOutcome::Written { chart, path });
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(outcomes)
    }

    /// Render a single chart to `path`
    pub fn render(&self, chart: ChartKind, df: &DataFrame, path: &Path) -> Result<()> {
        match chart {
            ChartKind::DisorderDistribution => bar::render_disorder_distribution(df, path),
            ChartKind::CorrelationHeatmap => heatmap::render_correlation_heatmap(df, path),
            ChartKind::SleepDurationBoxplot => {
                boxplot::render_boxplot(chart, df, SLEEP_DURATION, path)
            }
            ChartKind::StressLevelBoxplot => boxplot::render_boxplot(chart, df, STRESS_LEVEL, path),
            ChartKind::BmiByDisorder => bar::render_bmi_by_disorder(df, path),
        }
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(ChartKind::ALL.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress
    }
}

/// Input columns `chart` needs that `df` lacks.
///
/// The heatmap is reported as missing numeric columns when none exist.
pub fn missing_columns(chart: ChartKind, df: &DataFrame) -> Vec<String> {
    if chart == ChartKind::CorrelationHeatmap && stats::numeric_columns(df).is_empty() {
        return vec!["<numeric columns>".to_string()];
    }

    chart
        .required_columns()
        .iter()
        .filter(|name| df.get_column_index(name).is_none())
        .map(|name| name.to_string())
        .collect()
}
