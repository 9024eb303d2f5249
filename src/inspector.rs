//! Read-only table diagnostics.
//!
//! Computes the schema, per-column null counts and the number of duplicated
//! rows. Nothing here changes the table.

use crate::error::Result;
use crate::models::{ColumnDiagnostic, InspectionReport, TableShape};
use polars::prelude::*;
use tracing::debug;

/// Gather diagnostics for `df`
pub fn inspect(df: &DataFrame) -> Result<InspectionReport> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            let null_count = column.null_count();
            ColumnDiagnostic {
                name: column.name().to_string(),
                dtype: column.dtype().to_string(),
                non_null: column.len() - null_count,
                null_count,
            }
        })
        .collect();

    let duplicate_rows = count_duplicate_rows(df)?;
    debug!("Inspection found {} duplicate rows", duplicate_rows);

    Ok(InspectionReport {
        shape: TableShape::from(df.shape()),
        columns,
        duplicate_rows,
    })
}

/// Rows that repeat an earlier row in every column
pub fn count_duplicate_rows(df: &DataFrame) -> Result<usize> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(0);
    }

    let unique = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;

    Ok(df.height() - unique.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_counts_and_schema() {
        let df = df!(
            "Sleep Disorder" => [None, Some("Insomnia"), None],
            "Age" => [27i64, 28, 29],
        )
        .unwrap();

        let report = inspect(&df).unwrap();

        assert_eq!(report.shape, TableShape { rows: 3, columns: 2 });
        assert_eq!(report.columns[0].name, "Sleep Disorder");
        assert_eq!(report.columns[0].null_count, 2);
        assert_eq!(report.columns[0].non_null, 1);
        assert_eq!(report.columns[1].null_count, 0);
        assert_eq!(report.columns[1].dtype, DataType::Int64.to_string());
        assert_eq!(report.total_nulls(), 2);
    }

    #[test]
    fn test_duplicate_rows_counted_not_removed() {
        let df = df!(
            "Gender" => ["Male", "Male", "Female", "Male"],
            "Age" => [27i64, 27, 30, 27],
        )
        .unwrap();

        let report = inspect(&df).unwrap();

        assert_eq!(report.duplicate_rows, 2);
        assert_eq!(df.height(), 4);
    }

    #[test]
    fn test_rows_differing_in_one_column_are_not_duplicates() {
        let df = df!(
            "Gender" => ["Male", "Male"],
            "Age" => [27i64, 28],
        )
        .unwrap();

        assert_eq!(count_duplicate_rows(&df).unwrap(), 0);
    }

    #[test]
    fn test_empty_table() {
        let df = DataFrame::empty();
        let report = inspect(&df).unwrap();

        assert_eq!(report.shape, TableShape { rows: 0, columns: 0 });
        assert_eq!(report.duplicate_rows, 0);
    }
}
