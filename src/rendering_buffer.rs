//! Owned RGBA8 image buffer.
//!
//! `ColorImage` is the destination surface for polygon fills: a row-major,
//! top-down array of non-premultiplied RGBA8 pixels with no row padding.
//! It can be written out as PNG through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ExtendedColorType, ImageFormat, ImageResult, RgbaImage};

use crate::color::Rgba8;

const BPP: usize = 4;

/// Owned RGBA8 image, `width * height * 4` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ColorImage {
    /// Create an image filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * BPP],
        }
    }

    /// Create an image filled with `c`.
    pub fn new_filled(width: u32, height: u32, c: Rgba8) -> Self {
        let mut img = Self::new(width, height);
        img.clear(c);
        img
    }

    /// Wrap existing RGBA8 bytes. Returns `None` when the length does not
    /// match the dimensions.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * BPP {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds ({}x{})",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * BPP
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        let off = self.offset(x, y);
        Rgba8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        )
    }

    /// Overwrite the pixel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, c: Rgba8) {
        let off = self.offset(x, y);
        self.data[off..off + BPP].copy_from_slice(&c.to_array());
    }

    /// Bytes of row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.width as usize * BPP;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Fill every pixel with `c`.
    pub fn clear(&mut self, c: Rgba8) {
        let px = c.to_array();
        for chunk in self.data.chunks_exact_mut(BPP) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Copy into an `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.get(x, y).to_array())
        })
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut out = Vec::new();
        self.to_rgba_image()
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(out)
    }

    /// Write the image to `path` as PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )?;
        log::info!(
            "saved {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

impl std::fmt::Debug for ColorImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
