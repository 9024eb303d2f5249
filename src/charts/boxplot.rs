//! Box plots of a numeric column grouped by sleep disorder.

use super::axes::{self, PlotArea, ValueAxis};
use super::canvas::Canvas;
use crate::constants::BOXPLOT_WHISKER_IQR;
use crate::constants::columns::SLEEP_DISORDER;
use crate::constants::palettes::{INK, SET2};
use crate::error::Result;
use crate::models::ChartKind;
use crate::stats;
use polars::prelude::DataFrame;
use std::path::Path;

const BOX_FILL: f64 = 0.8;
const MARGINS: (i64, i64, i64, i64) = (80, 60, 30, 70);
const OUTLINE: [u8; 3] = [0x3f, 0x3f, 0x3f];

/// Five-number summary plus outliers for one group
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarize ascending data; `None` when there is nothing to summarize
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = stats::quantile(sorted, 0.25)?;
        let median = stats::quantile(sorted, 0.5)?;
        let q3 = stats::quantile(sorted, 0.75)?;
        let reach = (q3 - q1) * BOXPLOT_WHISKER_IQR;
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low: inside.first().copied().unwrap_or(q1),
            whisker_high: inside.last().copied().unwrap_or(q3),
            outliers,
        })
    }
}

/// Values of `value_column` split by sleep disorder, groups in order of
/// first appearance
pub fn group_values(df: &DataFrame, value_column: &str) -> Result<Vec<(String, Vec<f64>)>> {
    let groups = stats::column_as_labels(df, SLEEP_DISORDER)?;
    let values = stats::column_as_f64(df, value_column)?;

    Ok(stats::labels_in_order(&groups)
        .into_iter()
        .map(|label| {
            let members: Vec<Option<f64>> = groups
                .iter()
                .zip(&values)
                .filter(|(group, _)| group.as_deref() == Some(label.as_str()))
                .map(|(_, value)| *value)
                .collect();
            (label, stats::sorted_finite(&members))
        })
        .collect())
}

pub fn render_boxplot(
    chart: ChartKind,
    df: &DataFrame,
    value_column: &str,
    path: &Path,
) -> Result<()> {
    let groups = group_values(df, value_column)?;
    let boxes: Vec<Option<BoxStats>> = groups
        .iter()
        .map(|(_, values)| BoxStats::from_sorted(values))
        .collect();

    let all = groups.iter().flat_map(|(_, values)| values.iter().copied());
    let (low, high) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let (width, height) = chart.dimensions();
    let mut canvas = Canvas::new(width, height);
    let area = PlotArea::inset(&canvas, MARGINS);
    let axis = ValueAxis::covering(low, high, false);

    axes::draw_value_frame(&mut canvas, &area, &axis, chart.title(), SLEEP_DISORDER, value_column);

    for (i, ((center, band), summary)) in area.bands(groups.len()).into_iter().zip(&boxes).enumerate() {
        let Some(summary) = summary else {
            continue;
        };
        let color = SET2[i % SET2.len()];
        let box_width = (band as f64 * BOX_FILL) as i64;
        let left = center - box_width / 2;
        let y = |value: f64| axis.to_y(value, &area);

        let (top, bottom) = (y(summary.q3), y(summary.q1));
        canvas.fill_rect(left, top, box_width, (bottom - top).max(1), color);
        canvas.stroke_rect(left, top, box_width, (bottom - top).max(1) + 1, OUTLINE);

        let median = y(summary.median);
        canvas.hline(left, left + box_width - 1, median, OUTLINE);
        canvas.hline(left, left + box_width - 1, median + 1, OUTLINE);

        let cap = box_width / 4;
        canvas.vline(center, y(summary.whisker_high), top, OUTLINE);
        canvas.vline(center, bottom, y(summary.whisker_low), OUTLINE);
        canvas.hline(center - cap, center + cap, y(summary.whisker_high), OUTLINE);
        canvas.hline(center - cap, center + cap, y(summary.whisker_low), OUTLINE);

        for outlier in &summary.outliers {
            canvas.stroke_circle(center, y(*outlier), 3, OUTLINE);
        }
    }

    canvas.hline(area.left, area.right, area.bottom, INK);
    let labels: Vec<String> = groups.into_iter().map(|(label, _)| label).collect();
    axes::draw_category_labels(&mut canvas, &area, &labels);
    canvas.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_box_stats_without_outliers() {
        let stats = BoxStats::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_flags_outliers() {
        let stats = BoxStats::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0, 50.0]).unwrap();

        assert_eq!(stats.outliers, vec![50.0]);
        assert_eq!(stats.whisker_high, 5.0);
    }

    #[test]
    fn test_box_stats_empty() {
        assert!(BoxStats::from_sorted(&[]).is_none());
    }

    #[test]
    fn test_group_values_by_first_appearance() {
        let df = df!(
            "Sleep Disorder" => ["Insomnia", "None", "Insomnia", "None"],
            "Stress Level" => [Some(8i64), Some(3), Some(7), None],
        )
        .unwrap();

        let groups = group_values(&df, "Stress Level").unwrap();

        assert_eq!(
            groups,
            vec![
                ("Insomnia".to_string(), vec![7.0, 8.0]),
                ("None".to_string(), vec![3.0]),
            ]
        );
    }
}
