//! Polygon builders for common shapes.
//!
//! Each builder returns the vertex list of a closed polygon, ready for
//! [`draw_polygon`](crate::renderer_scanline::draw_polygon). The closing edge
//! is implicit.

use core::f32::consts::{PI, TAU};

use crate::basics::PointF;

/// Axis-aligned rectangle, clockwise on screen from the top-left corner.
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Vec<PointF> {
    vec![
        PointF::new(x, y),
        PointF::new(x + w, y),
        PointF::new(x + w, y + h),
        PointF::new(x, y + h),
    ]
}

/// Regular polygon approximating a circle. Vertex `i` sits at angle
/// `2π·i / segments` measured from the +x axis.
pub fn circle(cx: f32, cy: f32, r: f32, segments: u32) -> Vec<PointF> {
    (0..segments)
        .map(|i| {
            let a = TAU * i as f32 / segments as f32;
            PointF::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

/// Star with `points` spikes, alternating outer and inner radius. The first
/// vertex points straight up.
pub fn star(cx: f32, cy: f32, r_out: f32, r_in: f32, points: u32) -> Vec<PointF> {
    if points == 0 {
        return Vec::new();
    }
    let step = PI / points as f32;
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { r_out } else { r_in };
            let a = i as f32 * step;
            PointF::new(cx + r * a.sin(), cy - r * a.cos())
        })
        .collect()
}
