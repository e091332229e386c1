//! Mapping between data coordinates and canvas pixels.
//!
//! The y axis is fixed to `[Y_MIN, Y_MAX]` percent. The x axis is
//! categorical: one equal-width band per year, points sit at band centres.

use iced::{Point, Rectangle, Size};

pub const Y_MIN: f64 = 0.0;
pub const Y_MAX: f64 = 100.0;
pub const Y_STEP: f64 = 10.0;

/// Space reserved around the plot for title, legend, ticks and axis titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32,
    pub left:   f32,
}

pub const MARGINS: Margins = Margins {
    top:    84.0,
    right:  24.0,
    bottom: 56.0,
    left:   56.0,
};

/// The inner rectangle where series are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub rect: Rectangle,
}

impl PlotArea {
    /// Plot area for a canvas of `size`; never negative when the canvas is tiny.
    pub fn new(size: Size) -> Self {
        Self {
            rect: Rectangle {
                x:      MARGINS.left,
                y:      MARGINS.top,
                width:  (size.width - MARGINS.left - MARGINS.right).max(0.0),
                height: (size.height - MARGINS.top - MARGINS.bottom).max(0.0),
            },
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.rect.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.rect.x + self.rect.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.rect.y + self.rect.height
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    /// Width of one category band when the axis holds `count` years.
    pub fn band_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        self.rect.width / count as f32
    }

    /// Centre of band `index`.
    pub fn x_for(&self, index: usize, count: usize) -> f32 {
        self.left() + self.band_width(count) * (index as f32 + 0.5)
    }

    /// Pixel row for a percentage; values outside the axis are clamped.
    pub fn y_for(&self, value: f64) -> f32 {
        let t = ((value - Y_MIN) / (Y_MAX - Y_MIN)).clamp(0.0, 1.0) as f32;
        self.bottom() - t * self.rect.height
    }

    /// Band under pixel column `x`, if any.
    pub fn index_at(&self, x: f32, count: usize) -> Option<usize> {
        let band = self.band_width(count);
        if band <= 0.0 || x < self.left() || x >= self.right() {
            return None;
        }
        let i = ((x - self.left()) / band) as usize;
        Some(i.min(count - 1))
    }

    /// Label every `n`th year so labels at least `min_spacing` apart never overlap.
    pub fn label_stride(&self, count: usize, min_spacing: f32) -> usize {
        let band = self.band_width(count);
        if band <= 0.0 {
            return 1;
        }
        (min_spacing / band).ceil().max(1.0) as usize
    }
}

/// Gridline values from `Y_MIN` to `Y_MAX` inclusive.
pub fn y_ticks() -> impl Iterator<Item = f64> {
    let steps = ((Y_MAX - Y_MIN) / Y_STEP).round() as usize;
    (0..=steps).map(|i| Y_MIN + i as f64 * Y_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        // 400 x 200 plot once margins are removed.
        PlotArea::new(Size::new(
            400.0 + MARGINS.left + MARGINS.right,
            200.0 + MARGINS.top + MARGINS.bottom,
        ))
    }

    #[test]
    fn y_axis_spans_plot_height() {
        let a = area();
        assert_eq!(a.y_for(0.0), a.bottom());
        assert_eq!(a.y_for(100.0), a.top());
        assert_eq!(a.y_for(50.0), a.top() + 100.0);
    }

    #[test]
    fn y_values_are_clamped() {
        let a = area();
        assert_eq!(a.y_for(-5.0), a.bottom());
        assert_eq!(a.y_for(250.0), a.top());
    }

    #[test]
    fn points_sit_at_band_centres() {
        let a = area();
        assert_eq!(a.band_width(4), 100.0);
        assert_eq!(a.x_for(0, 4), a.left() + 50.0);
        assert_eq!(a.x_for(3, 4), a.left() + 350.0);
    }

    #[test]
    fn index_at_inverts_x_for() {
        let a = area();
        for i in 0..24 {
            assert_eq!(a.index_at(a.x_for(i, 24), 24), Some(i));
        }
        assert_eq!(a.index_at(a.left() - 1.0, 24), None);
        assert_eq!(a.index_at(a.right(), 24), None);
        assert_eq!(a.index_at(a.left() + 10.0, 0), None);
    }

    #[test]
    fn tiny_canvas_has_empty_plot() {
        let a = PlotArea::new(Size::new(10.0, 10.0));
        assert_eq!(a.rect.width, 0.0);
        assert_eq!(a.rect.height, 0.0);
        assert_eq!(a.index_at(MARGINS.left, 5), None);
    }

    #[test]
    fn labels_thin_out_when_crowded() {
        let a = area();
        assert_eq!(a.label_stride(5, 40.0), 1);
        assert_eq!(a.label_stride(24, 40.0), 3);
    }

    #[test]
    fn ticks_every_ten_percent() {
        let ticks: Vec<f64> = y_ticks().collect();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&100.0));
    }
}
