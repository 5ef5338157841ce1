//! Blend modes and the per-pixel compositing function.
//!
//! Blending happens in two steps. The mode first combines source and
//! destination RGB into an intermediate color. That color is then mixed over
//! the destination with source-over using the source alpha:
//!
//! ```text
//! out.c = mode(s, d).c * s.a + d.c * (1 - s.a)      c in {r, g, b}
//! out.a = 1
//! ```
//!
//! Every mode therefore fades to the destination as `s.a → 0` and to the pure
//! mode result as `s.a → 1`. The destination is treated as opaque after
//! compositing; this is not a general Porter-Duff operator.

use core::fmt;
use core::str::FromStr;

use crate::color::ColorF;

// ============================================================================
// BlendMode
// ============================================================================

/// Blend mode applied before source-over mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Source color.
    #[default]
    Normal,
    /// `s * d`
    Multiply,
    /// `clamp(s + d, 0, 1)`
    Add,
    /// `|d - s|`
    Difference,
    /// `2sd` where `d < 0.5`, else `1 - 2(1 - s)(1 - d)`.
    Overlay,
}

impl BlendMode {
    pub const ALL: [BlendMode; 5] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Add,
        BlendMode::Difference,
        BlendMode::Overlay,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Add => "add",
            BlendMode::Difference => "difference",
            BlendMode::Overlay => "overlay",
        }
    }

    /// Mode result for a single channel pair, before alpha mixing.
    #[inline]
    fn channel(self, s: f32, d: f32) -> f32 {
        match self {
            BlendMode::Normal => s,
            BlendMode::Multiply => s * d,
            BlendMode::Add => (s + d).clamp(0.0, 1.0),
            BlendMode::Difference => (d - s).abs(),
            BlendMode::Overlay => overlay_channel(s, d),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown blend mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBlendModeError {
    name: String,
}

impl fmt::Display for ParseBlendModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown blend mode '{}'", self.name)
    }
}

impl std::error::Error for ParseBlendModeError {}

impl FromStr for BlendMode {
    type Err = ParseBlendModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlendMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBlendModeError { name: s.to_string() })
    }
}

// ============================================================================
// Blend
// ============================================================================

#[inline]
fn overlay_channel(s: f32, d: f32) -> f32 {
    if d < 0.5 {
        2.0 * s * d
    } else {
        1.0 - 2.0 * (1.0 - s) * (1.0 - d)
    }
}

/// Composite `src` onto `dest` with `mode`. The result is always opaque.
#[inline]
pub fn blend(src: ColorF, dest: ColorF, mode: BlendMode) -> ColorF {
    let alpha = src.a;
    let inv_alpha = 1.0 - alpha;

    let r = mode.channel(src.r, dest.r);
    let g = mode.channel(src.g, dest.g);
    let b = mode.channel(src.b, dest.b);

    ColorF::new(
        r * alpha + dest.r * inv_alpha,
        g * alpha + dest.g * inv_alpha,
        b * alpha + dest.b * inv_alpha,
        1.0,
    )
}

// ============================================================================
// Tests
// ============================================================================
