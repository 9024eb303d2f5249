//! Pipeline orchestration.
//!
//! Runs the full workflow for one dataset: load, inspect, clean, persist
//! the cleaned CSV, render charts and summarize. Output directories are
//! prepared once up front so later stages never create them.

#[cfg(test)]
pub mod tests;

use crate::charts::Visualizer;
use crate::cleaner::Cleaner;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{RunOutcome, RunReport, TableShape};
use crate::{inspector, loader, report, stats};

use colored::*;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the load → clean → chart workflow described by a [`PipelineConfig`]
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Create every output directory the run writes into. Safe to repeat.
    pub fn prepare_output_dirs(&self) -> Result<()> {
        for dir in self.config.output_dirs() {
            fs::create_dir_all(dir)?;
            debug!("Output directory ready: {}", dir.display());
        }
        Ok(())
    }

    /// Main processing entry point
    pub fn run(&self) -> Result<RunOutcome> {
        let start_time = Instant::now();
        self.config.validate()?;
        self.prepare_output_dirs()?;

        let input_path = &self.config.input_path;
        if !input_path.exists() {
            println!(
                "{} {}",
                "Error: File not found at".bright_red().bold(),
                input_path.display()
            );
            return Ok(RunOutcome::InputMissing {
                path: input_path.clone(),
            });
        }

        println!("{}", "Starting sleep health processing".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), input_path.display());

        let df = loader::load_table(input_path, self.config.infer_schema_length)?;

        let inspection = inspector::inspect(&df)?;
        report::print_inspection(&inspection);

        let mut cleaner = Cleaner::standard();
        if self.config.drop_duplicates {
            cleaner = cleaner.with_duplicate_removal();
        }
        debug!("Cleaning steps: {:?}", cleaner.step_names());
        let (mut cleaned, cleaning) = cleaner.clean(df)?;
        let cleaned_shape = TableShape::from(cleaned.shape());
        report::print_cleaning(&cleaning, cleaned_shape);

        let output_path = &self.config.cleaned_output_path;
        loader::write_table(&mut cleaned, output_path)?;
        println!(
            "\n{} {}",
            "Cleaned data saved to".bright_green(),
            output_path.display().to_string().bright_white()
        );

        println!("\n{}", "Generating plots...".bright_yellow());
        let visualizer =
            Visualizer::new(&self.config.plots_dir).with_progress(self.config.show_progress);
        let charts = visualizer.render_all(&cleaned)?;
        report::print_charts(visualizer.plots_dir(), &charts);

        let summary = stats::describe(&cleaned)?;
        report::print_summary(&summary);

        let run_report = RunReport {
            input_path: input_path.clone(),
            cleaned_output_path: output_path.clone(),
            inspection,
            cleaning,
            cleaned_shape,
            charts,
            summary,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        if let Some(report_path) = &self.config.report_path {
            let json = serde_json::to_string_pretty(&run_report)?;
            fs::write(report_path, json)?;
            info!("Run report written to {}", report_path.display());
        }

        info!(
            "Processing complete in {}ms",
            run_report.processing_time_ms
        );
        Ok(RunOutcome::Completed(Box::new(run_report)))
    }
}
