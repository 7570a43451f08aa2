// src/font/mod.rs

//! Bitmap fonts built from a glyph atlas.
//!
//! A [`Font`] divides a [`PixelBuffer`] into a regular grid of 256 cells, one
//! per Latin-1 code, in row-major order. Each character of the text selects
//! one cell: characters up to U+00FF use the cell with the same code, anything
//! else draws `'?'`. The atlas acts as an alpha mask whose colour is replaced
//! by the requested text colour.
//!
//! The atlas is either owned by the font (loaded from a file or memory) or
//! borrowed from the caller; dropping a font only frees an owned atlas.

pub mod embedded;


use std::ops::Deref;
use std::path::Path;

use log::{debug, warn};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::glyph::{Glyph, GLYPH_COUNT};
use crate::image::{load_image, load_image_mem, ImageDecoder};
use crate::pixels::{Pixel, PixelBuffer};
use crate::rasterizer::blend;

/// Byte whose glyph height stands in for the line height.
const LINE_HEIGHT_GLYPH: u8 = b'A';

/// Glyph drawn for characters outside Latin-1.
pub const REPLACEMENT_GLYPH: u8 = b'?';

/// Atlas cell for `ch`.
#[inline]
pub fn glyph_index(ch: char) -> u8 {
    u8::try_from(u32::from(ch)).unwrap_or(REPLACEMENT_GLYPH)
}

/// The atlas backing a font.
#[derive(Debug)]
pub enum FontImage<'a> {
    Owned(PixelBuffer),
    Borrowed(&'a PixelBuffer),
}

impl Deref for FontImage<'_> {
    type Target = PixelBuffer;

    fn deref(&self) -> &PixelBuffer {
        match self {
            FontImage::Owned(buffer) => buffer,
            FontImage::Borrowed(buffer) => buffer,
        }
    }
}

impl FontImage<'_> {
    pub fn is_owned(&self) -> bool {
        matches!(self, FontImage::Owned(_))
    }
}

#[derive(Debug)]
pub struct Font<'a> {
    image: FontImage<'a>,
    glyphs: Box<[Glyph; GLYPH_COUNT]>,
}

/// Splits `image` into 256 glyph cells.
///
/// `columns` and `rows` are grid cell counts: the cell size is
/// `image.width / columns` by `image.height / rows`, and glyph `i` sits at
/// column `i % columns`, row `i / rows`. The row index divides by `rows`, not
/// `columns`, so only square grids lay out as expected. Callers depend on this
/// exact layout; it is kept as is.
///
/// Fails if either count is not positive or does not divide the image size.
pub fn build_font(image: FontImage<'_>, columns: i32, rows: i32) -> Result<Font<'_>> {
    let (width, height) = (image.width(), image.height());
    if columns <= 0
        || rows <= 0
        || width % columns as u32 != 0
        || height % rows as u32 != 0
    {
        warn!(
            "build_font: {}x{} glyph grid does not divide {}x{} image",
            columns, rows, width, height
        );
        return Err(Error::InvalidGlyphGrid {
            columns,
            rows,
            width,
            height,
        });
    }

    let cell_w = (width / columns as u32) as i32;
    let cell_h = (height / rows as u32) as i32;

    let mut glyphs = Box::new([Glyph::default(); GLYPH_COUNT]);
    for (i, glyph) in glyphs.iter_mut().enumerate() {
        let i = i as i32;
        *glyph = Glyph::new(
            Rect::new((i % columns) * cell_w, (i / rows) * cell_h, cell_w, cell_h),
            cell_w,
        );
    }

    debug!(
        "build_font: {}x{} cells of {}x{} px ({})",
        columns,
        rows,
        cell_w,
        cell_h,
        if image.is_owned() { "owned" } else { "borrowed" }
    );
    Ok(Font { image, glyphs })
}

impl<'a> Font<'a> {
    /// Builds a font that borrows `image`.
    pub fn from_image(image: &'a PixelBuffer, columns: i32, rows: i32) -> Result<Self> {
        build_font(FontImage::Borrowed(image), columns, rows)
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn owns_image(&self) -> bool {
        self.image.is_owned()
    }

    #[inline]
    pub fn glyph(&self, byte: u8) -> &Glyph {
        &self.glyphs[byte as usize]
    }

    /// Overrides the advance of one glyph.
    pub fn set_advance(&mut self, byte: u8, advance: i32) {
        self.glyphs[byte as usize].advance = advance;
    }

    /// Sum of the advances of every character in `text`.
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().map(|ch| self.glyph(glyph_index(ch)).advance).sum()
    }

    /// Height of the `'A'` glyph.
    pub fn text_height(&self) -> i32 {
        self.glyph(LINE_HEIGHT_GLYPH).rect.h
    }
}

impl Font<'static> {
    /// Builds a font that owns `image`.
    pub fn from_owned(image: PixelBuffer, columns: i32, rows: i32) -> Result<Self> {
        build_font(FontImage::Owned(image), columns, rows)
    }
}

/// Decodes an atlas file and builds a font that owns it.
pub fn load_font(
    path: impl AsRef<Path>,
    decoder: &dyn ImageDecoder,
    columns: i32,
    rows: i32,
) -> Result<Font<'static>> {
    let image = load_image(path, decoder)?;
    Font::from_owned(image, columns, rows)
}

/// Decodes an in-memory atlas and builds a font that owns it.
pub fn load_font_mem(
    bytes: &[u8],
    decoder: &dyn ImageDecoder,
    columns: i32,
    rows: i32,
) -> Result<Font<'static>> {
    let image = load_image_mem(bytes, decoder)?;
    Font::from_owned(image, columns, rows)
}

/// Draws `text` with its top-left corner at `(x, y)`.
///
/// Each atlas pixel is first recoloured by blending `color` over it, then the
/// result is blended onto `target` weighted by the atlas pixel's own alpha.
/// Fully transparent atlas pixels are skipped. Glyph cells that reach outside
/// the atlas are clipped.
pub fn draw_text(target: &mut PixelBuffer, font: &Font<'_>, text: &str, x: i32, y: i32, color: Color) {
    let atlas = font.image();
    let tint = Pixel::from(color);
    let mut pen_x = x;

    for ch in text.chars() {
        let glyph = font.glyph(glyph_index(ch));

        for j in 0..glyph.rect.h {
            for i in 0..glyph.rect.w {
                let Some(src) = atlas.pixel(glyph.rect.x + i, glyph.rect.y + j) else {
                    continue;
                };
                if src.a == 0 {
                    continue;
                }
                if let Some(dst) = target.pixel_mut(pen_x + i, y + j) {
                    let tinted = blend(src, tint);
                    *dst = blend(*dst, tinted);
                }
            }
        }

        pen_x += glyph.advance;
    }
}
