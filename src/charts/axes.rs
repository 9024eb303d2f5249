//! Plot area layout, value axes and shared chart furniture
//! (titles, grid lines, tick labels, legends).

use super::canvas::{Canvas, Color};
use super::font::{self, text_height};
use crate::constants::palettes::{GRID, INK};

pub const TITLE_SCALE: i64 = 2;
pub const LABEL_SCALE: i64 = 1;
const TICK_LENGTH: i64 = 4;

/// Pixel rectangle that holds the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotArea {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl PlotArea {
    /// Inset a canvas by the given margins (left, top, right, bottom)
    pub fn inset(canvas: &Canvas, margins: (i64, i64, i64, i64)) -> Self {
        let (left, top, right, bottom) = margins;
        Self {
            left,
            top,
            right: canvas.width() - right,
            bottom: canvas.height() - bottom,
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> i64 {
        (self.left + self.right) / 2
    }

    pub fn center_y(&self) -> i64 {
        (self.top + self.bottom) / 2
    }

    /// Centre and width of each of `count` equal category bands
    pub fn bands(&self, count: usize) -> Vec<(i64, i64)> {
        if count == 0 {
            return Vec::new();
        }
        let band = self.width() as f64 / count as f64;
        (0..count)
            .map(|i| {
                let center = self.left as f64 + band * (i as f64 + 0.5);
                (center.round() as i64, band.floor() as i64)
            })
            .collect()
    }
}

/// Linear value axis with "nice" tick spacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueAxis {
    /// Axis spanning `low..=high`, widened to whole tick steps
    pub fn covering(low: f64, high: f64, include_zero: bool) -> Self {
        let (mut low, mut high) = if include_zero {
            (low.min(0.0), high.max(0.0))
        } else {
            (low, high)
        };
        if !low.is_finite() || !high.is_finite() {
            low = 0.0;
            high = 1.0;
        }
        if high - low <= f64::EPSILON {
            low -= 0.5;
            high += 0.5;
        }

        let step = nice_step(high - low, 5);
        Self {
            min: (low / step).floor() * step,
            max: (high / step).ceil() * step,
            step,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as i64;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    /// Pixel row for `value` inside `area`
    pub fn to_y(&self, value: f64, area: &PlotArea) -> i64 {
        let fraction = (value - self.min) / (self.max - self.min);
        area.bottom - (fraction * area.height() as f64).round() as i64
    }

    pub fn label(&self, value: f64) -> String {
        format_tick(value, self.step)
    }
}

/// Round `span / target` to 1, 2 or 5 times a power of ten
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format a tick with just enough decimals for the step size
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil() as usize
    };
    // Avoid "-0"
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Title, horizontal grid lines, y tick labels, axis lines and axis titles
pub fn draw_value_frame(
    canvas: &mut Canvas,
    area: &PlotArea,
    axis: &ValueAxis,
    title: &str,
    x_label: &str,
    y_label: &str,
) {
    draw_title(canvas, title);

    for tick in axis.ticks() {
        let y = axis.to_y(tick, area);
        canvas.hline(area.left, area.right, y, GRID);
        canvas.hline(area.left - TICK_LENGTH, area.left - 1, y, INK);
        canvas.text_right(
            area.left - TICK_LENGTH - 4,
            y - text_height(LABEL_SCALE) / 2,
            &axis.label(tick),
            LABEL_SCALE,
            INK,
        );
    }

    canvas.vline(area.left, area.top, area.bottom, INK);
    canvas.hline(area.left, area.right, area.bottom, INK);

    if !x_label.is_empty() {
        canvas.text_centered(
            area.center_x(),
            canvas.height() - text_height(LABEL_SCALE) - 12,
            x_label,
            LABEL_SCALE,
            INK,
        );
    }
    if !y_label.is_empty() {
        canvas.text_vertical(12, area.center_y(), y_label, LABEL_SCALE, INK);
    }
}

pub fn draw_title(canvas: &mut Canvas, title: &str) {
    let center = canvas.width() / 2;
    canvas.text_centered(center, 16, title, TITLE_SCALE, INK);
}

/// Category names under each band, shrunk to fit when needed
pub fn draw_category_labels(canvas: &mut Canvas, area: &PlotArea, labels: &[String]) {
    for ((center, band), label) in area.bands(labels.len()).into_iter().zip(labels) {
        let scale = font::fit_scale(label, band - 4, 2);
        canvas.vline(center, area.bottom + 1, area.bottom + TICK_LENGTH, INK);
        canvas.text_centered(center, area.bottom + TICK_LENGTH + 6, label, scale, INK);
    }
}

/// Boxed legend anchored to the top-right corner of the plot area
pub fn draw_legend(canvas: &mut Canvas, area: &PlotArea, title: &str, entries: &[(String, Color)]) {
    if entries.is_empty() {
        return;
    }

    let line = text_height(LABEL_SCALE) + 8;
    let swatch = text_height(LABEL_SCALE) + 2;
    let widest = entries
        .iter()
        .map(|(label, _)| font::text_width(label, LABEL_SCALE) + swatch + 6)
        .chain(std::iter::once(font::text_width(title, LABEL_SCALE)))
        .max()
        .unwrap_or(0);

    let width = widest + 16;
    let height = line * (entries.len() as i64 + 1) + 8;
    let x = area.right - width - 8;
    let y = area.top + 8;

    canvas.fill_rect(x, y, width, height, [0xff, 0xff, 0xff]);
    canvas.stroke_rect(x, y, width, height, GRID);
    canvas.text(x + 8, y + 8, title, LABEL_SCALE, INK);

    for (i, (label, color)) in entries.iter().enumerate() {
        let row_y = y + 8 + line * (i as i64 + 1);
        canvas.fill_rect(x + 8, row_y - 1, swatch, swatch, *color);
        canvas.text(x + 8 + swatch + 6, row_y, label, LABEL_SCALE, INK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(nice_step(100.0, 5), 20.0));
        assert!(close(nice_step(10.0, 5), 2.0));
        assert!(close(nice_step(3.0, 5), 1.0));
        assert!(close(nice_step(0.7, 5), 0.2));
    }

    #[test]
    fn test_axis_covers_range_from_zero() {
        let axis = ValueAxis::covering(0.0, 219.0, true);

        assert_eq!(axis.min, 0.0);
        assert!((axis.step - 50.0).abs() < 1e-9);
        assert!((axis.max - 250.0).abs() < 1e-9);
        assert_eq!(axis.ticks().len(), 6);
    }

    #[test]
    fn test_axis_without_zero() {
        let axis = ValueAxis::covering(5.8, 8.5, false);

        assert!(axis.min <= 5.8);
        assert!(axis.max >= 8.5);
        assert!(axis.min > 0.0);
    }

    #[test]
    fn test_degenerate_range_is_widened() {
        let axis = ValueAxis::covering(3.0, 3.0, false);
        assert!(axis.max > axis.min);
    }

    #[test]
    fn test_to_y_maps_extremes() {
        let area = PlotArea {
            left: 0,
            top: 10,
            right: 100,
            bottom: 110,
        };
        let axis = ValueAxis {
            min: 0.0,
            max: 10.0,
            step: 2.0,
        };

        assert_eq!(axis.to_y(0.0, &area), 110);
        assert_eq!(axis.to_y(10.0, &area), 10);
        assert_eq!(axis.to_y(5.0, &area), 60);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(50.0, 10.0), "50");
        assert_eq!(format_tick(6.5, 0.5), "6.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(-0.0000001, 0.5), "0.0");
    }

    #[test]
    fn test_bands_split_width() {
        let area = PlotArea {
            left: 0,
            top: 0,
            right: 300,
            bottom: 100,
        };

        assert_eq!(area.bands(3), vec![(50, 100), (150, 100), (250, 100)]);
        assert!(area.bands(0).is_empty());
    }
}
