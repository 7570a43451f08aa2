// src/pixels.rs
//! Pixel storage for the backbuffer, loaded images and font atlases.
//!
//! Pixels are stored in B, G, R, A memory order so the backbuffer can be handed
//! to the presentation layer without conversion. The public colour contract is
//! always `Color` (R, G, B, A); the swap happens only in the conversions below.

use std::fmt;

use crate::color::Color;
use crate::error::{Error, Result};

/// One backbuffer pixel: bytes are [B, G, R, A] in memory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel { b: 0, g: 0, r: 0, a: 0 };

    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Builds a pixel from bytes in R, G, B, A order.
    #[inline]
    pub const fn from_rgba_bytes(rgba: [u8; 4]) -> Self {
        Self { r: rgba[0], g: rgba[1], b: rgba[2], a: rgba[3] }
    }

    /// Returns the pixel as bytes in R, G, B, A order.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the pixel in its memory order.
    #[inline]
    pub const fn to_bgra_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

impl From<Color> for Pixel {
    #[inline]
    fn from(color: Color) -> Pixel {
        Pixel::new(color.b, color.g, color.r, color.a)
    }
}

impl From<Pixel> for Color {
    #[inline]
    fn from(pixel: Pixel) -> Color {
        Color::new(pixel.r, pixel.g, pixel.b, pixel.a)
    }
}

/// A rectangular, row-major grid of pixels.
///
/// Owned exclusively by whoever allocated it. `release` drops the pixel storage
/// and zeroes the dimensions.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// Allocates a fully transparent buffer.
    ///
    /// Returns `Error::Allocation` instead of aborting if the pixel array
    /// cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::Allocation { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { width, height })?;
        pixels.resize(len, Pixel::TRANSPARENT);

        Ok(Self { width, height, pixels })
    }

    /// Builds a buffer from tightly packed R, G, B, A bytes, as produced by an
    /// image decoder.
    pub fn from_rgba_bytes(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let mut buffer = Self::new(width, height)?;
        if rgba.len() < buffer.pixels.len() * 4 {
            return Err(Error::Decode(format!(
                "expected {} bytes of RGBA data for {}x{}, got {}",
                buffer.pixels.len() * 4,
                width,
                height,
                rgba.len()
            )));
        }
        for (pixel, chunk) in buffer.pixels.iter_mut().zip(rgba.chunks_exact(4)) {
            *pixel = Pixel::from_rgba_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(buffer)
    }

    /// Returns the pixels as tightly packed R, G, B, A bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba_bytes()).collect()
    }

    /// Returns the pixels in memory (B, G, R, A) order, ready for presentation.
    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bgra_bytes()).collect()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Row-major index of `(x, y)`, or `None` when outside the buffer.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(x as usize + y as usize * self.width as usize)
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut Pixel> {
        self.index_of(x, y).map(move |i| &mut self.pixels[i])
    }

    /// Frees the pixel storage and zeroes the dimensions.
    pub fn release(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }
}
