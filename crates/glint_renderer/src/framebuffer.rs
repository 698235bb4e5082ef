//! Render output storage.

use glint_math::{to_rgba8, Color};

use crate::bucket::BucketResult;

/// Linear-color image, row-major with the origin at the top-left.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Flat index of (x, y), computed in `usize` so large images cannot wrap.
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, chunk) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }

    /// Convert to 8-bit RGBA bytes for an image encoder.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&to_rgba8(*color));
        }
        bytes
    }
}
