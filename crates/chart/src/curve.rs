//! Monotone cubic interpolation (Fritsch–Carlson) for smooth series lines.
//!
//! The curve passes through every point and never overshoots between two
//! neighbours, so a series that is flat or rising between two years is drawn
//! flat or rising too.

use iced::Point;

/// One cubic Bézier piece between two consecutive data points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from:  Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to:    Point,
}

/// Bézier segments for `points`, which must be ordered by strictly increasing `x`.
///
/// Fewer than two points yield no segments.
pub fn monotone_segments(points: &[Point]) -> Vec<Segment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let slopes: Vec<f32> = points
        .windows(2)
        .map(|w| {
            let dx = w[1].x - w[0].x;
            if dx == 0.0 { 0.0 } else { (w[1].y - w[0].y) / dx }
        })
        .collect();

    let mut tangents = vec![0.0f32; n];
    tangents[0] = slopes[0];
    tangents[n - 1] = slopes[n - 2];
    for i in 1..n - 1 {
        let (before, after) = (slopes[i - 1], slopes[i]);
        tangents[i] = if before * after <= 0.0 { 0.0 } else { (before + after) / 2.0 };
    }

    for (i, &d) in slopes.iter().enumerate() {
        if d == 0.0 {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }
        let alpha = tangents[i] / d;
        let beta = tangents[i + 1] / d;
        let s = alpha * alpha + beta * beta;
        if s > 9.0 {
            let tau = 3.0 / s.sqrt();
            tangents[i] = tau * alpha * d;
            tangents[i + 1] = tau * beta * d;
        }
    }

    points
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let (a, b) = (w[0], w[1]);
            let third = (b.x - a.x) / 3.0;
            Segment {
                from:  a,
                ctrl1: Point::new(a.x + third, a.y + tangents[i] * third),
                ctrl2: Point::new(b.x - third, b.y - tangents[i + 1] * third),
                to:    b,
            }
        })
        .collect()
}
