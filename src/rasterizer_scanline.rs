//! Scanline polygon rasterizer with an edge table and the even-odd rule.
//!
//! The rasterizer turns a closed polygon into horizontal pixel spans. It has
//! no coverage or anti-aliasing: a pixel is either inside or outside.
//!
//! Conventions (all float → int conversions truncate toward zero):
//! - An edge covers scanlines `y_min <= y < y_max`. The half-open end keeps a
//!   vertex shared by two chained edges from being counted twice.
//! - Edges whose endpoints truncate to the same row are dropped. Under the
//!   even-odd rule their neighbors already bound the span.
//! - Intersections on a scanline are sorted and paired `(0, 1), (2, 3), ...`;
//!   a trailing unpaired node is ignored.
//! - Each pair fills columns `[trunc(x0), trunc(x1))`, clipped to the canvas.

use crate::basics::{itrunc, PointF};

// ============================================================================
// Edge
// ============================================================================

/// One non-horizontal polygon edge, oriented top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First scanline crossed (inclusive).
    pub y_min: i32,
    /// Last scanline bound (exclusive).
    pub y_max: i32,
    /// X at the upper endpoint.
    pub x: f32,
    /// Inverse slope `dx / dy`.
    pub m_inv: f32,
}

impl Edge {
    /// Build the edge between two vertices, or `None` when both endpoints
    /// fall on the same integer scanline.
    pub fn new(p1: PointF, p2: PointF) -> Option<Self> {
        if itrunc(p1.y) == itrunc(p2.y) {
            return None;
        }
        let (top, bottom) = if p1.y > p2.y { (p2, p1) } else { (p1, p2) };
        Some(Self {
            y_min: itrunc(top.y),
            y_max: itrunc(bottom.y),
            x: top.x,
            m_inv: (bottom.x - top.x) / (bottom.y - top.y),
        })
    }

    /// True when scanline `y` crosses this edge.
    #[inline]
    pub fn is_active(&self, y: i32) -> bool {
        y >= self.y_min && y < self.y_max
    }

    /// X intercept at scanline `y`.
    #[inline]
    pub fn x_at(&self, y: i32) -> f32 {
        // i64 keeps huge clamped coordinates from overflowing.
        self.x + self.m_inv * (y as i64 - self.y_min as i64) as f32
    }
}

// ============================================================================
// RasterizerScanline
// ============================================================================

/// Edge table plus scratch storage for sweeping one polygon.
///
/// Lives for a single fill: construct it for the target size, load a
/// polygon with [`add_polygon`](Self::add_polygon), then walk the spans with
/// [`for_each_span`](Self::for_each_span).
pub struct RasterizerScanline {
    width: i32,
    height: i32,
    edges: Vec<Edge>,
    nodes: Vec<f32>,
    min_y: i32,
    max_y: i32,
}

impl RasterizerScanline {
    pub fn new(width: u32, height: u32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        Self {
            width,
            height,
            edges: Vec::new(),
            nodes: Vec::new(),
            min_y: height,
            max_y: 0,
        }
    }

    /// Drop all edges.
    pub fn reset(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        self.min_y = self.height;
        self.max_y = 0;
    }

    /// Build the edge table for a closed polygon (last vertex joins the
    /// first). Replaces any previously loaded polygon.
    ///
    /// Returns `false` and loads nothing when fewer than 3 vertices are
    /// given.
    pub fn add_polygon(&mut self, vertices: &[PointF]) -> bool {
        self.reset();
        if vertices.len() < 3 {
            return false;
        }

        let n = vertices.len();
        for i in 0..n {
            let Some(e) = Edge::new(vertices[i], vertices[(i + 1) % n]) else {
                continue;
            };
            if e.y_max <= 0 || e.y_min >= self.height {
                continue;
            }
            self.min_y = self.min_y.min(e.y_min);
            self.max_y = self.max_y.max(e.y_max);
            self.edges.push(e);
        }

        self.min_y = self.min_y.max(0);
        self.max_y = self.max_y.min(self.height);
        true
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First scanline to sweep, clipped to the canvas.
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// One past the last scanline to sweep, clipped to the canvas.
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Sorted X intersections of scanline `y` with the edge table.
    pub fn intersections(&mut self, y: i32) -> &[f32] {
        self.nodes.clear();
        self.nodes.extend(
            self.edges
                .iter()
                .filter(|e| e.is_active(y))
                .map(|e| e.x_at(y)),
        );
        self.nodes.sort_by(f32::total_cmp);
        &self.nodes
    }

    /// Call `f(y, x1, x2)` for every inside span `[x1, x2)`, scanline by
    /// scanline top to bottom and left to right within a scanline. Spans
    /// are already clipped to the canvas and never empty.
    pub fn for_each_span<F>(&mut self, mut f: F)
    where
        F: FnMut(i32, i32, i32),
    {
        let width = self.width;
        for y in self.min_y..self.max_y {
            let nodes = self.intersections(y);
            for pair in nodes.chunks_exact(2) {
                let mut x1 = itrunc(pair[0]);
                let mut x2 = itrunc(pair[1]);
                if x1 >= width || x2 <= 0 {
                    continue;
                }
                x1 = x1.max(0);
                x2 = x2.min(width);
                if x1 < x2 {
                    f(y, x1, x2);
                }
            }
        }
    }

    /// Collect all spans as `(y, x1, x2)`.
    pub fn spans(&mut self) -> Vec<(i32, i32, i32)> {
        let mut out = Vec::new();
        self.for_each_span(|y, x1, x2| out.push((y, x1, x2)));
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
