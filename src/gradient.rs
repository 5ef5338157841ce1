//! Gradient paint: color stops plus linear or radial geometry.
//!
//! A gradient maps a pixel position to a parameter `t` (see
//! [`GradientShape::parameter`]), clamps it to `[0, 1]`, and looks the color
//! up in the stop list. Gradients saturate at their ends; there is no repeat
//! or reflect spread.

use crate::basics::{clamp_unit, PointF};
use crate::color::ColorF;

// ============================================================================
// GradientStop
// ============================================================================

/// A `(position, color)` anchor on the gradient parameter axis.
///
/// Positions outside `[0, 1]` are allowed; lookups clamp against the first
/// and last stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: ColorF,
}

impl GradientStop {
    pub const fn new(position: f32, color: ColorF) -> Self {
        Self { position, color }
    }
}

// ============================================================================
// GradientShape
// ============================================================================

/// Geometry that turns a pixel position into a gradient parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientShape {
    /// `t` is the projection of the pixel onto `start → end`, normalized so
    /// that `start` maps to 0 and `end` to 1.
    Linear { start: PointF, end: PointF },
    /// `t` is the distance from `center` divided by `radius`.
    Radial { center: PointF, radius: f32 },
}

impl GradientShape {
    /// Gradient parameter at canvas position `p`, clamped to `[0, 1]`.
    ///
    /// Degenerate geometry never divides by zero: a zero-length linear
    /// gradient yields 0 everywhere, and a zero radius yields 0 at the
    /// center and 1 elsewhere. NaN results map to 0.
    pub fn parameter(&self, p: PointF) -> f32 {
        let t = match *self {
            GradientShape::Linear { start, end } => {
                let d = end - start;
                let len_sq = d.length_sq();
                if len_sq == 0.0 {
                    0.0
                } else {
                    (p - start).dot(d) / len_sq
                }
            }
            GradientShape::Radial { center, radius } => {
                let dist = p.distance(center);
                if radius == 0.0 {
                    if dist > 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    dist / radius
                }
            }
        };
        clamp_unit(t)
    }

    /// First geometry point: the start of a linear gradient or the center of
    /// a radial one.
    pub fn p1(&self) -> PointF {
        match *self {
            GradientShape::Linear { start, .. } => start,
            GradientShape::Radial { center, .. } => center,
        }
    }

    pub fn is_radial(&self) -> bool {
        matches!(self, GradientShape::Radial { .. })
    }
}

// ============================================================================
// Gradient
// ============================================================================

/// Gradient paint with stops kept sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    shape: GradientShape,
    stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(shape: GradientShape) -> Self {
        Self {
            shape,
            stops: Vec::new(),
        }
    }

    /// Linear gradient from `start` (t = 0) to `end` (t = 1).
    pub fn linear(start: PointF, end: PointF) -> Self {
        Self::new(GradientShape::Linear { start, end })
    }

    /// Radial gradient around `center`, reaching t = 1 at `radius`.
    pub fn radial(center: PointF, radius: f32) -> Self {
        Self::new(GradientShape::Radial { center, radius })
    }

    pub fn shape(&self) -> &GradientShape {
        &self.shape
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Add a stop and restore ascending position order.
    ///
    /// The sort is stable, so stops sharing a position keep insertion order.
    pub fn add_stop(&mut self, position: f32, color: ColorF) {
        self.stops.push(GradientStop::new(position, color));
        self.stops
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Builder form of [`add_stop`](Self::add_stop).
    pub fn with_stop(mut self, position: f32, color: ColorF) -> Self {
        self.add_stop(position, color);
        self
    }

    pub fn remove_all(&mut self) {
        self.stops.clear();
    }

    /// Color at parameter `t`.
    ///
    /// No stops gives opaque black. Below the first stop or above the last
    /// the end colors are returned; in between, the two surrounding stops are
    /// interpolated linearly on all four channels.
    pub fn color_at(&self, t: f32) -> ColorF {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return ColorF::BLACK,
        };

        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (s0, s1) = (&pair[0], &pair[1]);
            if t >= s0.position && t <= s1.position {
                let span = s1.position - s0.position;
                if span <= 0.0 {
                    return s1.color;
                }
                let f = (t - s0.position) / span;
                return s0.color.gradient(&s1.color, f);
            }
        }
        // Only reachable with a NaN `t`.
        last.color
    }

    /// Parameter at canvas position `(x, y)`, clamped to `[0, 1]`.
    #[inline]
    pub fn parameter_at(&self, x: f32, y: f32) -> f32 {
        self.shape.parameter(PointF::new(x, y))
    }

    /// Paint color at canvas position `(x, y)`.
    #[inline]
    pub fn sample(&self, x: f32, y: f32) -> ColorF {
        self.color_at(self.parameter_at(x, y))
    }
}

// ============================================================================
// Tests
// ============================================================================
