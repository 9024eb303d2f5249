//! Count charts: the disorder distribution and BMI counts split by disorder.

use super::axes::{self, PlotArea, ValueAxis};
use super::canvas::Canvas;
use crate::constants::columns::{BMI_CATEGORY, SLEEP_DISORDER};
use crate::constants::labels::DISORDER_ORDER;
use crate::constants::palettes::{INK, MUTED, VIRIDIS_3};
use crate::error::Result;
use crate::models::ChartKind;
use crate::stats;
use polars::prelude::DataFrame;
use std::path::Path;

/// Fraction of a category band covered by bars
const BAR_FILL: f64 = 0.8;
const MARGINS: (i64, i64, i64, i64) = (80, 60, 30, 70);

/// Occurrences of each label in `order`; labels not in `order` are ignored
pub fn count_in_order(values: &[Option<String>], order: &[String]) -> Vec<usize> {
    order
        .iter()
        .map(|label| {
            values
                .iter()
                .filter(|value| value.as_deref() == Some(label.as_str()))
                .count()
        })
        .collect()
}

/// Counts indexed as `[x category][hue category]`
pub fn grouped_counts(
    x: &[Option<String>],
    hue: &[Option<String>],
    x_order: &[String],
    hue_order: &[String],
) -> Vec<Vec<usize>> {
    let mut counts = vec![vec![0; hue_order.len()]; x_order.len()];
    for (x_value, hue_value) in x.iter().zip(hue) {
        let (Some(x_value), Some(hue_value)) = (x_value, hue_value) else {
            continue;
        };
        let i = x_order.iter().position(|label| label == x_value);
        let j = hue_order.iter().position(|label| label == hue_value);
        if let (Some(i), Some(j)) = (i, j) {
            counts[i][j] += 1;
        }
    }
    counts
}

/// Bar chart of sleep disorder counts in the fixed None, Insomnia,
/// Sleep Apnea order
pub fn render_disorder_distribution(df: &DataFrame, path: &Path) -> Result<()> {
    let chart = ChartKind::DisorderDistribution;
    let labels = stats::column_as_labels(df, SLEEP_DISORDER)?;
    let order: Vec<String> = DISORDER_ORDER.iter().map(|s| s.to_string()).collect();
    let counts = count_in_order(&labels, &order);

    let (width, height) = chart.dimensions();
    let mut canvas = Canvas::new(width, height);
    let area = PlotArea::inset(&canvas, MARGINS);
    let peak = counts.iter().copied().max().unwrap_or(0);
    let axis = ValueAxis::covering(0.0, peak as f64, true);

    axes::draw_value_frame(&mut canvas, &area, &axis, chart.title(), SLEEP_DISORDER, "count");

    for (((center, band), count), color) in area
        .bands(order.len())
        .into_iter()
        .zip(&counts)
        .zip(VIRIDIS_3.iter().cycle())
    {
        let bar_width = (band as f64 * BAR_FILL) as i64;
        let top = axis.to_y(*count as f64, &area);
        canvas.fill_rect(center - bar_width / 2, top, bar_width, area.bottom - top, *color);
    }

    canvas.hline(area.left, area.right, area.bottom, INK);
    axes::draw_category_labels(&mut canvas, &area, &order);
    canvas.save(path)
}

/// Side-by-side bars of BMI category counts, one bar per sleep disorder
pub fn render_bmi_by_disorder(df: &DataFrame, path: &Path) -> Result<()> {
    let chart = ChartKind::BmiByDisorder;
    let bmi = stats::column_as_labels(df, BMI_CATEGORY)?;
    let disorder = stats::column_as_labels(df, SLEEP_DISORDER)?;
    let bmi_order = stats::labels_in_order(&bmi);
    let disorder_order = stats::labels_in_order(&disorder);
    let counts = grouped_counts(&bmi, &disorder, &bmi_order, &disorder_order);

    let (width, height) = chart.dimensions();
    let mut canvas = Canvas::new(width, height);
    let area = PlotArea::inset(&canvas, MARGINS);
    let peak = counts.iter().flatten().copied().max().unwrap_or(0);
    let axis = ValueAxis::covering(0.0, peak as f64, true);

    axes::draw_value_frame(&mut canvas, &area, &axis, chart.title(), BMI_CATEGORY, "count");

    let hues = disorder_order.len().max(1) as i64;
    for ((center, band), row) in area.bands(bmi_order.len()).into_iter().zip(&counts) {
        let group_width = (band as f64 * BAR_FILL) as i64;
        let bar_width = group_width / hues;
        let group_left = center - group_width / 2;

        for (j, count) in row.iter().enumerate() {
            let top = axis.to_y(*count as f64, &area);
            let color = MUTED[j % MUTED.len()];
            canvas.fill_rect(
                group_left + j as i64 * bar_width,
                top,
                bar_width,
                area.bottom - top,
                color,
            );
        }
    }

    canvas.hline(area.left, area.right, area.bottom, INK);
    axes::draw_category_labels(&mut canvas, &area, &bmi_order);

    let legend: Vec<_> = disorder_order
        .iter()
        .enumerate()
        .map(|(j, label)| (label.clone(), MUTED[j % MUTED.len()]))
        .collect();
    axes::draw_legend(&mut canvas, &area, SLEEP_DISORDER, &legend);

    canvas.save(path)
}
