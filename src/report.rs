//! Console rendering of pipeline diagnostics.
//!
//! Everything here writes human-readable output to stdout. Structured
//! logging goes through `tracing` instead.

use crate::models::{
    ChartOutcome, CleaningReport, ColumnSummary, InspectionReport, StepOutcome, TableShape,
};
use colored::*;
use std::path::Path;

/// Print the raw table overview: shape, schema and completeness
pub fn print_inspection(report: &InspectionReport) {
    println!("\n{}", "Dataset Info".bright_green().bold());
    println!(
        "  {} {}",
        "Shape:".bright_cyan(),
        report.shape.to_string().bright_white().bold()
    );

    let name_width = report
        .columns
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max("Column".len());

    let header = format!("{:<name_width$}  {:<10}  {:>9}", "Column", "Dtype", "Non-Null");
    println!("  {}", header.bright_cyan());
    for column in &report.columns {
        println!(
            "  {:<name_width$}  {:<10}  {:>9}",
            column.name, column.dtype, column.non_null
        );
    }

    println!("\n{}", "Missing Values".bright_green().bold());
    for column in &report.columns {
        let count = column.null_count.to_string();
        let count = if column.null_count > 0 {
            count.bright_yellow().bold()
        } else {
            count.normal()
        };
        println!("  {:<name_width$}  {}", column.name, count);
    }
    println!(
        "  {} {}",
        "Total missing:".bright_cyan(),
        report.total_nulls().to_string().bright_white()
    );

    let duplicates = report.duplicate_rows.to_string();
    println!(
        "\n  {} {}",
        "Duplicate rows:".bright_cyan(),
        if report.duplicate_rows > 0 {
            duplicates.bright_yellow().bold()
        } else {
            duplicates.bright_white()
        }
    );
}

/// Print what each cleaning step did and the resulting shape
pub fn print_cleaning(report: &CleaningReport, cleaned_shape: TableShape) {
    println!("\n{}", "Cleaning".bright_green().bold());
    for record in &report.steps {
        match &record.outcome {
            StepOutcome::Applied { rows_affected } => println!(
                "  {} {} ({} rows affected)",
                "Applied".bright_green(),
                record.step,
                rows_affected.to_string().bright_white()
            ),
            StepOutcome::Skipped { missing_column } => println!(
                "  {} {} (column '{}' not present)",
                "Skipped".bright_yellow(),
                record.step,
                missing_column
            ),
        }
    }
    println!(
        "  {} {}",
        "Cleaned shape:".bright_cyan(),
        cleaned_shape.to_string().bright_white().bold()
    );
}

pub fn print_charts(plots_dir: &Path, charts: &[ChartOutcome]) {
    for outcome in charts {
        if let ChartOutcome::Skipped {
            chart,
            missing_columns,
        } = outcome
        {
            println!(
                "  {} {} (missing {})",
                "Skipped chart".bright_yellow(),
                chart,
                missing_columns.join(", ")
            );
        }
    }
    println!(
        "{} {}",
        "Plots saved in".bright_green(),
        plots_dir.display().to_string().bright_white()
    );
}

/// Print the descriptive statistics table, one row per numeric column
pub fn print_summary(summary: &[ColumnSummary]) {
    println!("\n{}", "Summary Statistics".bright_green().bold());
    if summary.is_empty() {
        println!("  {}", "No numeric columns".bright_black());
        return;
    }

    let name_width = summary
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0)
        .max("Column".len());

    let headers = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
    let header_line: String = headers.iter().map(|h| format!("{:>10}", h)).collect();
    let header = format!("{:<name_width$}{}", "Column", header_line);
    println!("  {}", header.bright_cyan());

    for column in summary {
        let cells = [
            column.mean,
            column.std,
            column.min,
            column.q25,
            column.median,
            column.q75,
            column.max,
        ];
        let values: String = cells.iter().map(|v| format!("{:>10}", format_stat(*v))).collect();
        println!("  {:<name_width$}{:>10}{}", column.name, column.count, values);
    }
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "NaN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Some(7.132)), "7.132");
        assert_eq!(format_stat(Some(2.0)), "2.000");
        assert_eq!(format_stat(None), "NaN");
    }
}
