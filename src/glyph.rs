// src/glyph.rs

//! Defines the `Glyph` type: one character cell of a bitmap font.

use crate::geometry::Rect;

/// Number of glyphs in every font, one per byte value.
pub const GLYPH_COUNT: usize = 256;

/// A character cell of a font atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    /// The glyph's pixels inside the font image.
    pub rect: Rect,
    /// Horizontal cursor advance after drawing the glyph.
    pub advance: i32,
}

impl Glyph {
    pub const fn new(rect: Rect, advance: i32) -> Self {
        Self { rect, advance }
    }
}
