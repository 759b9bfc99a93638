//! Filled circle shape for ratatui's [`Canvas`](ratatui::widgets::canvas::Canvas).

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

// Half a pixel, so a dot never skips a braille cell at any canvas scale we use.
const SAMPLE_STEP: f64 = 0.5;

/// A filled disc. Canvas' own `Circle` only strokes the outline.
///
/// Sampling is limited to `x_bounds` x `y_bounds`, which should match the
/// canvas bounds. Points outside them would be dropped by the painter anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Center x in canvas coordinates.
    pub x: f64,
    /// Center y in canvas coordinates.
    pub y: f64,
    /// Radius in canvas units. Zero paints the center point only.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Horizontal extent of the canvas.
    pub x_bounds: [f64; 2],
    /// Vertical extent of the canvas.
    pub y_bounds: [f64; 2],
}

impl Dot {
    // Sample indices, relative to `center`, that land inside `bounds`.
    fn sample_range(center: f64, radius: f64, bounds: [f64; 2]) -> Option<(i64, i64)> {
        let lo = (center - radius).max(bounds[0]);
        let hi = (center + radius).min(bounds[1]);
        if lo > hi {
            return None;
        }
        let first = ((lo - center) / SAMPLE_STEP).ceil() as i64;
        let last = ((hi - center) / SAMPLE_STEP).floor() as i64;
        (first <= last).then_some((first, last))
    }
}

impl Shape for Dot {
    fn draw(&self, painter: &mut Painter) {
        if !(self.x.is_finite() && self.y.is_finite() && self.radius.is_finite()) {
            return;
        }
        let radius = self.radius.max(0.0);
        let radius_sq = radius * radius;
        let Some((x_first, x_last)) = Self::sample_range(self.x, radius, self.x_bounds) else {
            return;
        };
        let Some((y_first, y_last)) = Self::sample_range(self.y, radius, self.y_bounds) else {
            return;
        };

        for iy in y_first..=y_last {
            let dy = iy as f64 * SAMPLE_STEP;
            for ix in x_first..=x_last {
                let dx = ix as f64 * SAMPLE_STEP;
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
                if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_is_clipped_to_bounds() {
        let range = Dot::sample_range(10.0, 1.0e9, [0.0, 40.0]);
        assert_eq!(range, Some((-20, 60)));
    }

    #[test]
    fn dot_outside_bounds_samples_nothing() {
        assert_eq!(Dot::sample_range(-10.0, 2.0, [0.0, 40.0]), None);
        assert_eq!(Dot::sample_range(50.0, 2.0, [0.0, 40.0]), None);
    }

    #[test]
    fn dot_touching_an_edge_samples_the_overlap() {
        assert_eq!(Dot::sample_range(-1.0, 2.0, [0.0, 40.0]), Some((2, 4)));
    }
}
