//! Descriptive statistics over table columns.
//!
//! Shared by the chart renderers and the end-of-run summary. Quantiles use
//! linear interpolation and the standard deviation is the sample (n - 1)
//! estimate, matching the conventions of common dataframe libraries.

use crate::error::Result;
use crate::models::ColumnSummary;
use polars::prelude::*;

/// Whether a dtype holds plain numbers
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Names of the numeric columns, in schema order
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(|column| column.name().to_string())
        .collect()
}

/// Column values as floats, nulls preserved
pub fn column_as_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

/// Column values as text labels, nulls preserved
pub fn column_as_labels(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Distinct labels ordered by first appearance, nulls ignored
pub fn labels_in_order(values: &[Option<String>]) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values.iter().flatten() {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

/// Quantile of already sorted data using linear interpolation.
///
/// Returns `None` for empty input.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation; undefined below two observations
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// Pearson correlation over rows where both values are present
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let (mut covariance, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((covariance / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise correlations between numeric columns
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `columns.len()` squared entries
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let columns = numeric_columns(df);
        let data = columns
            .iter()
            .map(|name| column_as_f64(df, name))
            .collect::<Result<Vec<_>>>()?;

        let values = data
            .iter()
            .map(|x| data.iter().map(|y| pearson(x, y)).collect())
            .collect();

        Ok(Self { columns, values })
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == row)?;
        let j = self.columns.iter().position(|c| c == column)?;
        self.values[i][j]
    }
}

/// Present, finite values sorted ascending
pub fn sorted_finite(values: &[Option<f64>]) -> Vec<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().filter(|v| v.is_finite()).collect();
    present.sort_by(f64::total_cmp);
    present
}

/// Count, mean, spread and quartiles for every numeric column
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    numeric_columns(df)
        .into_iter()
        .map(|name| {
            let sorted = sorted_finite(&column_as_f64(df, &name)?);
            Ok(ColumnSummary {
                count: sorted.len(),
                mean: mean(&sorted),
                std: sample_std(&sorted),
                min: sorted.first().copied(),
                q25: quantile(&sorted, 0.25),
                median: quantile(&sorted, 0.5),
                q75: quantile(&sorted, 0.75),
                max: sorted.last().copied(),
                name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_quantile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];

        assert!(close(quantile(&data, 0.25).unwrap(), 1.75));
        assert!(close(quantile(&data, 0.5).unwrap(), 2.5));
        assert!(close(quantile(&data, 0.75).unwrap(), 3.25));
        assert!(close(quantile(&data, 1.0).unwrap(), 4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_sample_std() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Population std is 2.0; sample std is sqrt(32 / 7)
        assert!(close(sample_std(&data).unwrap(), (32.0f64 / 7.0).sqrt()));
        assert_eq!(sample_std(&[1.0]), None);
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let x = [Some(1.0), Some(2.0), Some(3.0)];
        let y = [Some(2.0), Some(4.0), Some(6.0)];
        let z = [Some(3.0), Some(2.0), Some(1.0)];

        assert!(close(pearson(&x, &y).unwrap(), 1.0));
        assert!(close(pearson(&x, &z).unwrap(), -1.0));
    }

    #[test]
    fn test_pearson_skips_incomplete_pairs() {
        let x = [Some(1.0), None, Some(2.0), Some(3.0)];
        let y = [Some(1.0), Some(100.0), Some(2.0), Some(3.0)];

        assert!(close(pearson(&x, &y).unwrap(), 1.0));
    }

    #[test]
    fn test_pearson_constant_column_is_undefined() {
        let x = [Some(1.0), Some(1.0), Some(1.0)];
        let y = [Some(1.0), Some(2.0), Some(3.0)];

        assert_eq!(pearson(&x, &y), None);
    }

    #[test]
    fn test_correlation_matrix_uses_numeric_columns_only() {
        let df = df!(
            "Age" => [20i64, 30, 40],
            "Gender" => ["Male", "Female", "Male"],
            "Stress Level" => [3.0f64, 5.0, 7.0],
        )
        .unwrap();

        let matrix = CorrelationMatrix::from_frame(&df).unwrap();

        assert_eq!(matrix.columns, vec!["Age", "Stress Level"]);
        assert!(close(matrix.get("Age", "Stress Level").unwrap(), 1.0));
        assert!(close(matrix.get("Age", "Age").unwrap(), 1.0));
        assert_eq!(matrix.get("Age", "Gender"), None);
    }

    #[test]
    fn test_describe() {
        let df = df!(
            "Sleep Duration" => [Some(6.0f64), Some(7.0), None, Some(8.0)],
            "Occupation" => ["Nurse", "Doctor", "Engineer", "Nurse"],
        )
        .unwrap();

        let summary = describe(&df).unwrap();

        assert_eq!(summary.len(), 1);
        let duration = &summary[0];
        assert_eq!(duration.name, "Sleep Duration");
        assert_eq!(duration.count, 3);
        assert!(close(duration.mean.unwrap(), 7.0));
        assert!(close(duration.std.unwrap(), 1.0));
        assert_eq!(duration.min, Some(6.0));
        assert!(close(duration.q25.unwrap(), 6.5));
        assert!(close(duration.median.unwrap(), 7.0));
        assert_eq!(duration.max, Some(8.0));
    }

    #[test]
    fn test_labels_in_order() {
        let values = vec![
            Some("Overweight".to_string()),
            None,
            Some("Normal".to_string()),
            Some("Overweight".to_string()),
        ];

        assert_eq!(labels_in_order(&values), vec!["Overweight", "Normal"]);
    }
}
