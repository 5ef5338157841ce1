//! Demonstration scene exercising every paint and several blend modes.

use crate::basics::PointF;
use crate::color::{ColorF, Rgba8};
use crate::comp_op::BlendMode;
use crate::gradient::Gradient;
use crate::renderer_scanline::draw_polygon;
use crate::rendering_buffer::ColorImage;
use crate::shapes;

/// Render the demo scene on a white canvas of the given size.
///
/// Layers, back to front:
/// 1. red rectangle `(50, 50)..(250, 200)`, normal
/// 2. 50-segment circle at `(400, 300)` r = 100, radial blue → transparent
/// 3. triangle `(100, 400) (300, 400) (200, 250)`, linear green → half-alpha
///    yellow, multiply
/// 4. five-point star at `(600, 150)`, orange at 0.8 alpha, difference
///
/// Shapes are placed for an 800×600 canvas and clip on smaller ones.
pub fn render_demo_scene(width: u32, height: u32) -> ColorImage {
    let mut canvas = ColorImage::new_filled(width, height, Rgba8::WHITE);

    draw_polygon(
        &mut canvas,
        &shapes::rect(50.0, 50.0, 200.0, 150.0),
        ColorF::new(1.0, 0.0, 0.0, 1.0),
        None,
        BlendMode::Normal,
    );

    let radial = Gradient::radial(PointF::new(400.0, 300.0), 100.0)
        .with_stop(0.0, ColorF::new(0.0, 0.0, 1.0, 1.0))
        .with_stop(1.0, ColorF::new(0.0, 0.0, 0.0, 0.0));
    draw_polygon(
        &mut canvas,
        &shapes::circle(400.0, 300.0, 100.0, 50),
        ColorF::TRANSPARENT,
        Some(&radial),
        BlendMode::Normal,
    );

    let triangle = [
        PointF::new(100.0, 400.0),
        PointF::new(300.0, 400.0),
        PointF::new(200.0, 250.0),
    ];
    let linear = Gradient::linear(PointF::new(100.0, 400.0), PointF::new(300.0, 400.0))
        .with_stop(0.0, ColorF::new(0.0, 1.0, 0.0, 1.0))
        .with_stop(1.0, ColorF::new(1.0, 1.0, 0.0, 0.5));
    draw_polygon(
        &mut canvas,
        &triangle,
        ColorF::TRANSPARENT,
        Some(&linear),
        BlendMode::Multiply,
    );

    draw_polygon(
        &mut canvas,
        &shapes::star(600.0, 150.0, 80.0, 30.0, 5),
        ColorF::new(1.0, 0.5, 0.0, 0.8),
        None,
        BlendMode::Difference,
    );

    log::debug!("rendered demo scene at {}x{}", width, height);
    canvas
}
