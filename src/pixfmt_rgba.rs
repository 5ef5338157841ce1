//! Pixel format abstraction used by the polygon renderer.
//!
//! The renderer reads and writes destination pixels only through
//! [`PixelFormat`]: the surface size, a single-pixel read, and a single-pixel
//! overwrite. Blending is done by the renderer, not by the pixel format.
//!
//! Implementations:
//! - [`ColorImage`]: owned RGBA8 image
//! - [`PixfmtRgba32`]: borrowed RGBA8 byte slice with an explicit stride

use crate::color::Rgba8;
use crate::rendering_buffer::ColorImage;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Destination surface for polygon fills.
///
/// Callers guarantee `0 <= x < width()` and `0 <= y < height()` for
/// `pixel` and `copy_pixel`.
pub trait PixelFormat {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Rgba8;

    /// Overwrite the pixel at (x, y) with `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8);
}

impl PixelFormat for ColorImage {
    fn width(&self) -> u32 {
        ColorImage::width(self)
    }

    fn height(&self) -> u32 {
        ColorImage::height(self)
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        self.get(x as u32, y as u32)
    }

    #[inline]
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        self.set(x as u32, y as u32, *c);
    }
}

// ============================================================================
// PixfmtRgba32: borrowed RGBA8 rows
// ============================================================================

const BPP: usize = 4;

/// RGBA8 view over caller-owned bytes, top-down rows of `stride` bytes.
///
/// Lets a fill target memory the caller already has (a frame buffer, a
/// texture upload buffer) without copying it into a `ColorImage`.
pub struct PixfmtRgba32<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> PixfmtRgba32<'a> {
    /// Attach to `buf` with tightly packed rows.
    pub fn new(buf: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        Self::new_with_stride(buf, width, height, width as usize * BPP)
    }

    /// Attach to `buf` with rows of `stride` bytes. Returns `None` when the
    /// stride is shorter than a row or the buffer cannot hold every row.
    pub fn new_with_stride(
        buf: &'a mut [u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> Option<Self> {
        let row_bytes = width as usize * BPP;
        if stride < row_bytes {
            return None;
        }
        let needed = match height as usize {
            0 => 0,
            h => (h - 1) * stride + row_bytes,
        };
        if buf.len() < needed {
            return None;
        }
        Some(Self {
            buf,
            width,
            height,
            stride,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Clear the entire surface to a solid color.
    pub fn clear(&mut self, c: &Rgba8) {
        let px = c.to_array();
        for y in 0..self.height as usize {
            let start = y * self.stride;
            let row = &mut self.buf[start..start + self.width as usize * BPP];
            for chunk in row.chunks_exact_mut(BPP) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride + x as usize * BPP
    }
}

impl<'a> PixelFormat for PixfmtRgba32<'a> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let off = self.offset(x, y);
        Rgba8::new(
            self.buf[off],
            self.buf[off + 1],
            self.buf[off + 2],
            self.buf[off + 3],
        )
    }

    #[inline]
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let off = self.offset(x, y);
        self.buf[off..off + BPP].copy_from_slice(&c.to_array());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_pixel_format() {
        let mut img = ColorImage::new(10, 10);
        let pf: &mut dyn PixelFormat = &mut img;
        assert_eq!(pf.width(), 10);
        assert_eq!(pf.height(), 10);
        pf.copy_pixel(5, 5, &Rgba8::new(255, 0, 0, 255));
        assert_eq!(pf.pixel(5, 5), Rgba8::new(255, 0, 0, 255));
        assert_eq!(img.get(5, 5).r, 255);
    }

    #[test]
    fn test_pixfmt_new() {
        let mut buf = vec![0u8; 100 * 100 * 4];
        let pf = PixfmtRgba32::new(&mut buf, 100, 100).unwrap();
        assert_eq!(pf.width(), 100);
        assert_eq!(pf.height(), 100);
        assert_eq!(pf.stride(), 400);
    }

    #[test]
    fn test_pixfmt_rejects_short_buffer() {
        let mut buf = vec![0u8; 10 * 10 * 4 - 1];
        assert!(PixfmtRgba32::new(&mut buf, 10, 10).is_none());
        let mut buf = vec![0u8; 64];
        assert!(PixfmtRgba32::new_with_stride(&mut buf, 4, 2, 8).is_none());
    }

    #[test]
    fn test_pixfmt_copy_pixel() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut pf = PixfmtRgba32::new(&mut buf, 10, 10).unwrap();
            let red = Rgba8::new(255, 0, 0, 255);
            pf.copy_pixel(5, 5, &red);
            let p = pf.pixel(5, 5);
            assert_eq!(p, red);
        }
        let off = (5 * 10 + 5) * 4;
        assert_eq!(&buf[off..off + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_pixfmt_padded_stride() {
        // 3 pixels wide, 16-byte rows (4 bytes padding)
        let mut buf = vec![7u8; 16 * 2];
        {
            let mut pf = PixfmtRgba32::new_with_stride(&mut buf, 3, 2, 16).unwrap();
            pf.clear(&Rgba8::WHITE);
            pf.copy_pixel(0, 1, &Rgba8::BLACK);
        }
        assert_eq!(&buf[12..16], &[7, 7, 7, 7]);
        assert_eq!(&buf[16..20], &[0, 0, 0, 255]);
        assert_eq!(&buf[20..24], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_pixfmt_zero_height() {
        let mut buf: Vec<u8> = Vec::new();
        let pf = PixfmtRgba32::new(&mut buf, 10, 0).unwrap();
        assert_eq!(pf.height(), 0);
    }
}
