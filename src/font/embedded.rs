// src/font/embedded.rs

//! The built-in 8x8 font.
//!
//! The atlas is rasterised once per process from the `font8x8` tables: Basic
//! Latin for bytes 0x00-0x7F and Latin-1 Supplement for 0xA0-0xFF, read as
//! Latin-1 code points. Bytes without a table entry get a blank cell. Lit bits
//! become opaque white; everything else is transparent.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use log::{error, info};
use once_cell::sync::Lazy;

use super::Font;
use crate::error::{Error, Result};
use crate::glyph::GLYPH_COUNT;
use crate::pixels::{Pixel, PixelBuffer};

/// Glyph cell edge in pixels.
pub const CELL_SIZE: u32 = 8;
/// Cells per atlas row and column.
pub const GRID: u32 = 16;

const INK: Pixel = Pixel::new(255, 255, 255, 255);

static ATLAS: Lazy<Option<PixelBuffer>> = Lazy::new(|| match rasterize_atlas() {
    Ok(atlas) => Some(atlas),
    Err(e) => {
        error!("Failed to build the default font atlas: {}", e);
        None
    }
});

fn glyph_bitmap(byte: u8) -> Option<[u8; 8]> {
    let ch = char::from(byte);
    BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
}

fn rasterize_atlas() -> Result<PixelBuffer> {
    let mut atlas = PixelBuffer::new(GRID * CELL_SIZE, GRID * CELL_SIZE)?;

    for code in 0..GLYPH_COUNT {
        let Some(rows) = glyph_bitmap(code as u8) else {
            continue;
        };
        let cell_x = (code as u32 % GRID * CELL_SIZE) as i32;
        let cell_y = (code as u32 / GRID * CELL_SIZE) as i32;

        for (row, bits) in rows.iter().enumerate() {
            // Bit 0 is the leftmost column.
            for col in 0..CELL_SIZE as i32 {
                if bits & (1 << col) != 0 {
                    if let Some(px) = atlas.pixel_mut(cell_x + col, cell_y + row as i32) {
                        *px = INK;
                    }
                }
            }
        }
    }

    info!(
        "Default font atlas ready ({}x{} cells of {}px)",
        GRID, GRID, CELL_SIZE
    );
    Ok(atlas)
}

/// The shared default atlas, or `None` if it could not be allocated.
pub fn atlas() -> Option<&'static PixelBuffer> {
    ATLAS.as_ref()
}

/// Builds the default font over the shared atlas.
pub fn default_font() -> Result<Font<'static>> {
    let atlas = atlas().ok_or(Error::Allocation {
        width: GRID * CELL_SIZE,
        height: GRID * CELL_SIZE,
    })?;
    Font::from_image(atlas, GRID as i32, GRID as i32)
}
