//! Color types and conversions.
//!
//! Two precisions take part in a fill:
//! - `ColorF`: f32 components, the working space for paint and blending
//! - `Rgba8`: u8 components, the storage format of the destination image
//!
//! Both are non-premultiplied. `ColorF` channels are nominally in `[0, 1]` but
//! intermediate results may leave that range; they are clamped only when a
//! color is demoted to `Rgba8`.

// ============================================================================
// ColorF (f32 working color)
// ============================================================================

/// RGBA color with f32 components, nominally in `[0, 1]`.
///
/// The default value is opaque black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for ColorF {
    fn default() -> Self {
        Self::BLACK
    }
}

impl ColorF {
    pub const BLACK: ColorF = ColorF::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: ColorF = ColorF::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: ColorF = ColorF::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_opacity(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Demote to 8-bit: `clamp(c * 255, 0, 255)` truncated toward zero, per
    /// channel. Alpha is encoded the same way; nothing is premultiplied.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: Self::to_byte(self.r),
            g: Self::to_byte(self.g),
            b: Self::to_byte(self.b),
            a: Self::to_byte(self.a),
        }
    }

    /// Promote from 8-bit: each channel divided by 255.
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self {
            r: Self::from_byte(c.r),
            g: Self::from_byte(c.g),
            b: Self::from_byte(c.b),
            a: Self::from_byte(c.a),
        }
    }

    #[inline]
    pub fn to_byte(v: f32) -> u8 {
        // NaN survives clamp and then casts to 0.
        (v * 255.0).clamp(0.0, 255.0) as u8
    }

    #[inline]
    pub fn from_byte(v: u8) -> f32 {
        v as f32 / 255.0
    }

    /// Interpolate between `self` and `c` by `k`, all four channels.
    pub fn gradient(&self, c: &ColorF, k: f32) -> ColorF {
        ColorF {
            r: self.r + (c.r - self.r) * k,
            g: self.g + (c.g - self.g) * k,
            b: self.b + (c.b - self.b) * k,
            a: self.a + (c.a - self.a) * k,
        }
    }
}

impl From<Rgba8> for ColorF {
    fn from(c: Rgba8) -> Self {
        ColorF::from_rgba8(c)
    }
}

impl From<ColorF> for Rgba8 {
    fn from(c: ColorF) -> Self {
        c.to_rgba8()
    }
}

// ============================================================================
// Rgba8 (8-bit pixel)
// ============================================================================

/// 8-bit RGBA pixel, component order `(r, g, b, a)`, non-premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(p: [u8; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorf_default_is_opaque_black() {
        let c = ColorF::default();
        assert_eq!(c, ColorF::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_to_rgba8_truncates() {
        // 0.5 * 255 = 127.5 → 127, not 128
        let c = ColorF::new(1.0, 0.5, 0.0, 0.8).to_rgba8();
        assert_eq!(c, Rgba8::new(255, 127, 0, 204));
    }

    #[test]
    fn test_to_rgba8_clamps_out_of_range() {
        let c = ColorF::new(-0.5, 1.5, 2.0, -1.0).to_rgba8();
        assert_eq!(c, Rgba8::new(0, 255, 255, 0));
    }

    #[test]
    fn test_to_rgba8_nan_is_zero() {
        let c = ColorF::new(f32::NAN, 1.0, 1.0, 1.0).to_rgba8();
        assert_eq!(c.r, 0);
        assert_eq!(c.g, 255);
    }

    #[test]
    fn test_from_rgba8() {
        let c = ColorF::from_rgba8(Rgba8::new(255, 0, 51, 255));
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let step = 1.0 / 255.0;
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let c = ColorF::new(v, 1.0 - v, v * 0.5, 1.0);
            let back = ColorF::from_rgba8(c.to_rgba8());
            assert!((back.r - c.r).abs() <= step, "v={}", v);
            assert!((back.g - c.g).abs() <= step, "v={}", v);
            assert!((back.b - c.b).abs() <= step, "v={}", v);
            assert!((back.a - c.a).abs() <= step, "v={}", v);
        }
    }

    #[test]
    fn test_every_byte_survives_round_trip() {
        for v in 0..=255u8 {
            let c = Rgba8::new(v, v, v, v);
            assert_eq!(ColorF::from_rgba8(c).to_rgba8(), c, "v={}", v);
        }
    }

    #[test]
    fn test_gradient() {
        let c1 = ColorF::new(0.0, 0.0, 0.0, 1.0);
        let c2 = ColorF::new(1.0, 1.0, 1.0, 0.0);
        let mid = c1.gradient(&c2, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rgba8_array() {
        let c = Rgba8::new(1, 2, 3, 4);
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert_eq!(Rgba8::from_array([1, 2, 3, 4]), c);
        assert_eq!(Rgba8::new_opaque(9, 8, 7).a, 255);
    }
}
