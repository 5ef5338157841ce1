//! Polygon fill renderer.
//!
//! Connects the scanline rasterizer to paint and blending: every inside pixel
//! gets a source color from the [`Paint`], is blended with the destination
//! pixel through [`blend`], and is written back. Pixels are visited in
//! scanline-major order (increasing `y`, then increasing `x`).

use crate::basics::PointF;
use crate::color::ColorF;
use crate::comp_op::{blend, BlendMode};
use crate::gradient::Gradient;
use crate::pixfmt_rgba::PixelFormat;
use crate::rasterizer_scanline::RasterizerScanline;

// ============================================================================
// Paint
// ============================================================================

/// Source of per-pixel fill colors.
#[derive(Debug, Clone, Copy)]
pub enum Paint<'a> {
    Solid(ColorF),
    Gradient(&'a Gradient),
}

impl<'a> Paint<'a> {
    /// The gradient when present, otherwise the solid color.
    pub fn new(color: ColorF, gradient: Option<&'a Gradient>) -> Self {
        match gradient {
            Some(g) => Paint::Gradient(g),
            None => Paint::Solid(color),
        }
    }

    /// Source color at integer pixel `(x, y)`.
    #[inline]
    pub fn color_at(&self, x: i32, y: i32) -> ColorF {
        match self {
            Paint::Solid(c) => *c,
            Paint::Gradient(g) => g.sample(x as f32, y as f32),
        }
    }
}

impl From<ColorF> for Paint<'_> {
    fn from(c: ColorF) -> Self {
        Paint::Solid(c)
    }
}

impl<'a> From<&'a Gradient> for Paint<'a> {
    fn from(g: &'a Gradient) -> Self {
        Paint::Gradient(g)
    }
}

// ============================================================================
// Fill
// ============================================================================

/// Fill a closed polygon into `pf` with the even-odd rule.
///
/// When `gradient` is given it supplies every source color and `color` is
/// ignored. Polygons with fewer than 3 vertices draw nothing.
pub fn draw_polygon<P>(
    pf: &mut P,
    vertices: &[PointF],
    color: ColorF,
    gradient: Option<&Gradient>,
    mode: BlendMode,
) where
    P: PixelFormat + ?Sized,
{
    fill_polygon(pf, vertices, &Paint::new(color, gradient), mode);
}

/// Fill a closed polygon into `pf` with `paint`, blending with `mode`.
pub fn fill_polygon<P>(pf: &mut P, vertices: &[PointF], paint: &Paint<'_>, mode: BlendMode)
where
    P: PixelFormat + ?Sized,
{
    let mut ras = RasterizerScanline::new(pf.width(), pf.height());
    if !ras.add_polygon(vertices) {
        log::debug!(
            "skipping degenerate polygon with {} vertices",
            vertices.len()
        );
        return;
    }
    if ras.min_y() >= ras.max_y() {
        log::debug!("polygon does not cross the canvas; nothing to fill");
        return;
    }
    log::trace!(
        "filling polygon: {} vertices, {} edges, scanlines {}..{}, mode {}",
        vertices.len(),
        ras.edges().len(),
        ras.min_y(),
        ras.max_y(),
        mode
    );

    ras.for_each_span(|y, x1, x2| blend_span(pf, y, x1, x2, paint, mode));
}

/// Blend columns `[x1, x2)` of row `y`.
#[inline]
fn blend_span<P>(pf: &mut P, y: i32, x1: i32, x2: i32, paint: &Paint<'_>, mode: BlendMode)
where
    P: PixelFormat + ?Sized,
{
    for x in x1..x2 {
        let src = paint.color_at(x, y);
        let dest = ColorF::from_rgba8(pf.pixel(x, y));
        pf.copy_pixel(x, y, &blend(src, dest, mode).to_rgba8());
    }
}

// ============================================================================
// Tests
// ============================================================================
