//! Annotated correlation heatmap over the numeric columns.

use super::axes::{self, LABEL_SCALE};
use super::canvas::{Canvas, Color, blend};
use super::font::{self, text_height};
use crate::constants::palettes::{COOLWARM_HIGH, COOLWARM_LOW, COOLWARM_MID, INK, MISSING};
use crate::error::Result;
use crate::models::ChartKind;
use crate::stats::CorrelationMatrix;
use polars::prelude::DataFrame;
use std::path::Path;

const TOP: i64 = 60;
const COLORBAR_WIDTH: i64 = 20;
const COLORBAR_SPACE: i64 = 110;
const LABEL_GAP: i64 = 8;

/// Diverging blue-white-red colour for a coefficient in [-1, 1]
pub fn coolwarm(value: f64) -> Color {
    let value = value.clamp(-1.0, 1.0);
    if value < 0.0 {
        blend(COOLWARM_MID, COOLWARM_LOW, -value)
    } else {
        blend(COOLWARM_MID, COOLWARM_HIGH, value)
    }
}

/// Annotation text and colour for a cell
fn annotation(value: Option<f64>) -> (String, Color) {
    match value {
        Some(v) if v.abs() > 0.6 => (format!("{:.2}", v), [0xff, 0xff, 0xff]),
        Some(v) => (format!("{:.2}", v), INK),
        None => ("NaN".to_string(), INK),
    }
}

pub fn render_correlation_heatmap(df: &DataFrame, path: &Path) -> Result<()> {
    let chart = ChartKind::CorrelationHeatmap;
    let matrix = CorrelationMatrix::from_frame(df)?;
    let n = matrix.columns.len() as i64;

    let (width, height) = chart.dimensions();
    let mut canvas = Canvas::new(width, height);
    axes::draw_title(&mut canvas, chart.title());

    if n == 0 {
        canvas.text_centered(
            canvas.width() / 2,
            canvas.height() / 2,
            "No numeric columns",
            LABEL_SCALE * 2,
            INK,
        );
        return canvas.save(path);
    }

    let label_extent = matrix
        .columns
        .iter()
        .map(|name| font::text_width(name, LABEL_SCALE))
        .max()
        .unwrap_or(0)
        + LABEL_GAP * 2;

    let left = label_extent;
    let available_width = canvas.width() - left - COLORBAR_SPACE;
    let available_height = canvas.height() - TOP - label_extent;
    let cell = (available_width.min(available_height) / n).max(1);
    let grid = cell * n;

    for (i, row) in matrix.values.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            let x = left + j as i64 * cell;
            let y = TOP + i as i64 * cell;
            let fill = value.map(coolwarm).unwrap_or(MISSING);
            canvas.fill_rect(x, y, cell, cell, fill);

            let (text, ink) = annotation(*value);
            let scale = font::fit_scale(&text, cell - 4, 2);
            if font::text_width(&text, scale) <= cell - 2 {
                canvas.text_centered(
                    x + cell / 2,
                    y + (cell - text_height(scale)) / 2,
                    &text,
                    scale,
                    ink,
                );
            }
        }
    }

    for (k, name) in matrix.columns.iter().enumerate() {
        let middle = TOP + k as i64 * cell + cell / 2;
        canvas.text_right(
            left - LABEL_GAP,
            middle - text_height(LABEL_SCALE) / 2,
            name,
            LABEL_SCALE,
            INK,
        );

        let center = left + k as i64 * cell + cell / 2;
        let label_width = font::text_width(name, LABEL_SCALE);
        canvas.text_vertical(
            center - text_height(LABEL_SCALE) / 2,
            TOP + grid + LABEL_GAP + label_width / 2,
            name,
            LABEL_SCALE,
            INK,
        );
    }

    draw_colorbar(&mut canvas, left + grid + 30, TOP, grid);
    canvas.save(path)
}

/// Vertical gradient from +1 (top) to -1 (bottom) with tick labels
fn draw_colorbar(canvas: &mut Canvas, x: i64, top: i64, height: i64) {
    if height <= 1 {
        return;
    }
    for offset in 0..height {
        let value = 1.0 - 2.0 * offset as f64 / (height - 1) as f64;
        canvas.hline(x, x + COLORBAR_WIDTH - 1, top + offset, coolwarm(value));
    }
    canvas.stroke_rect(x, top, COLORBAR_WIDTH, height, INK);

    for tick in [1.0, 0.5, 0.0, -0.5, -1.0] {
        let y = top + ((1.0 - tick) / 2.0 * (height - 1) as f64).round() as i64;
        canvas.hline(x + COLORBAR_WIDTH, x + COLORBAR_WIDTH + 3, y, INK);
        canvas.text(
            x + COLORBAR_WIDTH + 6,
            y - text_height(LABEL_SCALE) / 2,
            &format!("{:.1}", tick),
            LABEL_SCALE,
            INK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_anchors() {
        assert_eq!(coolwarm(-1.0), COOLWARM_LOW);
        assert_eq!(coolwarm(0.0), COOLWARM_MID);
        assert_eq!(coolwarm(1.0), COOLWARM_HIGH);
        assert_eq!(coolwarm(3.0), COOLWARM_HIGH);
    }

    #[test]
    fn test_annotation_contrast() {
        assert_eq!(annotation(Some(0.95)), ("0.95".to_string(), [0xff, 0xff, 0xff]));
        assert_eq!(annotation(Some(-0.12)), ("-0.12".to_string(), INK));
        assert_eq!(annotation(None).0, "NaN");
    }
}
