//! Raster drawing surface backed by an `image::RgbImage`.
//!
//! Coordinates are signed so shapes may extend past the edges; anything
//! outside the image is clipped.

use super::font::{self, ADVANCE, GLYPH_WIDTH};
use crate::constants::palettes::BACKGROUND;
use crate::error::{Result, SleepHealthError};
use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::debug;

pub type Color = [u8; 3];

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(BACKGROUND)),
        }
    }

    pub fn width(&self) -> i64 {
        self.image.width() as i64
    }

    pub fn height(&self) -> i64 {
        self.image.height() as i64
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.image.get_pixel(x, y).0
    }

    pub fn put(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < self.width() && y < self.height() {
            self.image.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.width());
        let y1 = (y + height).min(self.height());
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px as u32, py as u32, Rgb(color));
            }
        }
    }

    pub fn stroke_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.hline(x, x + width - 1, y, color);
        self.hline(x, x + width - 1, y + height - 1, color);
        self.vline(x, y, y + height - 1, color);
        self.vline(x + width - 1, y, y + height - 1, color);
    }

    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.put(x, y, color);
        }
    }

    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Color) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.put(x, y, color);
        }
    }

    pub fn stroke_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Color) {
        let inner = (radius - 1) * (radius - 1);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d = dx * dx + dy * dy;
                if d <= radius * radius && d > inner {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draw `text` with its top-left corner at (x, y)
    pub fn text(&mut self, x: i64, y: i64, text: &str, scale: i64, color: Color) {
        let mut pen_x = x;
        for c in text.chars() {
            let rows = font::glyph(c);
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - gx)) != 0 {
                        self.fill_rect(
                            pen_x + gx * scale,
                            y + gy as i64 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen_x += ADVANCE * scale;
        }
    }

    pub fn text_centered(&mut self, cx: i64, y: i64, text: &str, scale: i64, color: Color) {
        let x = cx - font::text_width(text, scale) / 2;
        self.text(x, y, text, scale, color);
    }

    /// Draw text whose right edge ends at `right`
    pub fn text_right(&mut self, right: i64, y: i64, text: &str, scale: i64, color: Color) {
        let x = right - font::text_width(text, scale);
        self.text(x, y, text, scale, color);
    }

    /// Draw text rotated a quarter turn counter-clockwise, reading bottom to
    /// top, centred vertically on `cy` with its left (glyph top) edge at `x`.
    pub fn text_vertical(&mut self, x: i64, cy: i64, text: &str, scale: i64, color: Color) {
        let mut pen_y = cy + font::text_width(text, scale) / 2;
        for c in text.chars() {
            let rows = font::glyph(c);
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - gx)) != 0 {
                        self.fill_rect(
                            x + gy as i64 * scale,
                            pen_y - (gx + 1) * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen_y -= ADVANCE * scale;
        }
    }

    /// Encode as PNG; consumes the canvas so its buffer is released afterwards
    pub fn save(self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .map_err(|source| SleepHealthError::ChartWrite {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Linear blend from `from` (t = 0) to `to` (t = 1)
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]
}
