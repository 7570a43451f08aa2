// src/lib.rs

//! framekit: an immediate-mode 2D software rasterizer runtime.
//!
//! Drawing happens into a CPU backbuffer with a single cheap blend rule;
//! a [`FrameContext`] ties the backbuffer to a window, per-frame input
//! edge detection and a paced frame clock.

pub mod collision;
pub mod color;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod font;
pub mod geometry;
pub mod glyph;
pub mod image;
pub mod input;
pub mod keys;
pub mod pixels;
pub mod rasterizer;
pub mod timing;

pub use color::{Color, NamedColor};
pub use config::Config;
pub use context::FrameContext;
pub use error::{Error, Result};
pub use font::Font;
pub use geometry::{Point, Rect};
pub use keys::{KeyCode, MouseButton};
pub use pixels::{Pixel, PixelBuffer};
pub use timing::{FrameStats, Timer};
