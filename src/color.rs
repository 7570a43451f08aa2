// src/color.rs

//! Defines the public `Color` type and the `NamedColor` palette.
//!
//! `Color` is always R, G, B, A in that order. The in-memory pixel order used
//! by the backbuffer lives in `crate::pixels` and never leaks through here.

use serde::{Deserialize, Serialize};

/// An RGBA colour, each channel 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, returned for out-of-bounds lookups.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        named.to_color()
    }
}

/// The fixed palette of common colours. All entries are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    White,
    Black,
    Gray,
    DarkGray,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    LightGray,
    Orange,
    Purple,
    Brown,
    Pink,
    Lime,
    Teal,
    Gold,
    Silver,
    Beige,
    Ivory,
    Khaki,
    Navy,
    Maroon,
    Olive,
    Aqua,
    Coral,
    Tan,
    SkyBlue,
    Mint,
    Peach,
    Chocolate,
    Violet,
    Indigo,
    Turquoise,
    Salmon,
    Wheat,
}

impl NamedColor {
    /// Returns the RGBA value of this palette entry.
    pub const fn to_color(self) -> Color {
        match self {
            NamedColor::White => Color::opaque(255, 255, 255),
            NamedColor::Black => Color::opaque(0, 0, 0),
            NamedColor::Gray => Color::opaque(128, 128, 128),
            NamedColor::DarkGray => Color::opaque(64, 64, 64),
            NamedColor::Red => Color::opaque(255, 0, 0),
            NamedColor::Green => Color::opaque(0, 255, 0),
            NamedColor::Blue => Color::opaque(0, 0, 255),
            NamedColor::Yellow => Color::opaque(255, 255, 0),
            NamedColor::Cyan => Color::opaque(0, 255, 255),
            NamedColor::Magenta => Color::opaque(255, 0, 255),
            NamedColor::LightGray => Color::opaque(211, 211, 211),
            NamedColor::Orange => Color::opaque(255, 165, 0),
            NamedColor::Purple => Color::opaque(128, 0, 128),
            NamedColor::Brown => Color::opaque(165, 42, 42),
            NamedColor::Pink => Color::opaque(255, 192, 203),
            NamedColor::Lime => Color::opaque(50, 205, 50),
            NamedColor::Teal => Color::opaque(0, 128, 128),
            NamedColor::Gold => Color::opaque(255, 215, 0),
            NamedColor::Silver => Color::opaque(192, 192, 192),
            NamedColor::Beige => Color::opaque(245, 245, 220),
            NamedColor::Ivory => Color::opaque(255, 255, 240),
            NamedColor::Khaki => Color::opaque(240, 230, 140),
            NamedColor::Navy => Color::opaque(0, 0, 128),
            NamedColor::Maroon => Color::opaque(128, 0, 0),
            NamedColor::Olive => Color::opaque(128, 128, 0),
            NamedColor::Aqua => Color::opaque(0, 255, 255),
            NamedColor::Coral => Color::opaque(255, 127, 80),
            NamedColor::Tan => Color::opaque(210, 180, 140),
            NamedColor::SkyBlue => Color::opaque(135, 206, 235),
            NamedColor::Mint => Color::opaque(189, 252, 201),
            NamedColor::Peach => Color::opaque(255, 218, 185),
            NamedColor::Chocolate => Color::opaque(210, 105, 30),
            NamedColor::Violet => Color::opaque(238, 130, 238),
            NamedColor::Indigo => Color::opaque(75, 0, 130),
            NamedColor::Turquoise => Color::opaque(64, 224, 208),
            NamedColor::Salmon => Color::opaque(250, 128, 114),
            NamedColor::Wheat => Color::opaque(245, 222, 179),
        }
    }
}
