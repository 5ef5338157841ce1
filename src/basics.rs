//! Foundation types and numeric helpers.
//!
//! Everything in the fill pipeline works in `f32` canvas coordinates with the
//! origin at the top-left, `+x` to the right and `+y` downwards. Conversion to
//! the integer pixel grid always truncates toward zero.

use core::ops::{Add, Sub};

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Truncate toward zero, the conversion used for every float → pixel index.
///
/// Saturates at the `i32` range and maps NaN to 0, so garbage coordinates can
/// never trap inside the scanline loop.
#[inline]
pub fn itrunc(v: f32) -> i32 {
    v as i32
}

/// Clamp `v` to `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: PointF) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: PointF) -> f32 {
        (self - other).length_sq().sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for PointF {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for PointF {
    type Output = PointF;
    #[inline]
    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF {
    type Output = PointF;
    #[inline]
    fn sub(self, rhs: PointF) -> PointF {
        PointF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itrunc() {
        assert_eq!(itrunc(1.7), 1);
        assert_eq!(itrunc(1.0), 1);
        assert_eq!(itrunc(0.0), 0);
        assert_eq!(itrunc(-0.5), 0);
        assert_eq!(itrunc(-1.7), -1);
    }

    #[test]
    fn test_itrunc_non_finite() {
        assert_eq!(itrunc(f32::NAN), 0);
        assert_eq!(itrunc(f32::INFINITY), i32::MAX);
        assert_eq!(itrunc(f32::NEG_INFINITY), i32::MIN);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.25), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
    }

    #[test]
    fn test_point_ops() {
        let a = PointF::new(1.0, 2.0);
        let b = PointF::new(4.0, 6.0);
        assert_eq!(b - a, PointF::new(3.0, 4.0));
        assert_eq!(a + b, PointF::new(5.0, 8.0));
        assert_eq!((b - a).length_sq(), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.dot(b), 16.0);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: PointF = (3.5, -1.0).into();
        assert_eq!(p, PointF::new(3.5, -1.0));
        assert!(p.is_finite());
        assert!(!PointF::new(f32::NAN, 0.0).is_finite());
    }
}
