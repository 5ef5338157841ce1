//! # scanfill
//!
//! Software rasterizer for filled 2D polygons.
//!
//! Polygons are filled with the even-odd rule by a scanline rasterizer and
//! painted with either a solid color or a linear/radial gradient. Each pixel
//! is composited onto an RGBA8 canvas with one of five blend modes.
//!
//! ## Pipeline
//!
//! 1. **Vertices**: a slice of [`PointF`], closed implicitly
//! 2. **Rasterizer**: builds edges and emits `[x1, x2)` spans per scanline
//! 3. **Paint**: solid [`ColorF`] or a [`Gradient`] sampled at pixel coordinates
//! 4. **Blend**: mode result mixed over the destination with source alpha
//! 5. **Pixel format**: any [`PixelFormat`] target, e.g. [`ColorImage`]
//!
//! ```
//! use scanfill::{draw_polygon, shapes, BlendMode, ColorF, ColorImage, Rgba8};
//!
//! let mut canvas = ColorImage::new_filled(64, 64, Rgba8::WHITE);
//! let red = ColorF::new(1.0, 0.0, 0.0, 1.0);
//! draw_polygon(&mut canvas, &shapes::rect(8.0, 8.0, 16.0, 16.0), red, None, BlendMode::Normal);
//! assert_eq!(canvas.get(10, 10), Rgba8::new(255, 0, 0, 255));
//! ```

// Foundation types
pub mod basics;
pub mod color;

// Paint and compositing
pub mod comp_op;
pub mod gradient;

// Pixel storage
pub mod pixfmt_rgba;
pub mod rendering_buffer;

// Rasterization and rendering
pub mod rasterizer_scanline;
pub mod renderer_scanline;

// Geometry helpers and demo
pub mod scene;
pub mod shapes;

pub mod logging;

pub use basics::PointF;
pub use color::{ColorF, Rgba8};
pub use comp_op::{blend, BlendMode, ParseBlendModeError};
pub use gradient::{Gradient, GradientShape, GradientStop};
pub use pixfmt_rgba::{PixelFormat, PixfmtRgba32};
pub use rasterizer_scanline::{Edge, RasterizerScanline};
pub use renderer_scanline::{draw_polygon, fill_polygon, Paint};
pub use rendering_buffer::ColorImage;
pub use scene::render_demo_scene;
