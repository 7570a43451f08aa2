// src/error.rs

//! Error type shared by the rendering core.
//!
//! Every fallible operation reports failure through its return value; the
//! core never panics on bad input.

use std::path::PathBuf;
use thiserror::Error;

use crate::display::DisplayError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },
    #[error("invalid glyph grid {columns}x{rows} for a {width}x{height} image")]
    InvalidGlyphGrid {
        columns: i32,
        rows: i32,
        width: u32,
        height: u32,
    },
    #[error("image data is empty")]
    EmptyImageData,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("failed to encode image: {0}")]
    Encode(String),
    /// The driver rejected a frame. The backbuffer was handed back intact.
    #[error("presentation failed: {0}")]
    Presentation(String),
    #[error("display error: {0}")]
    Display(#[from] DisplayError),
}

pub type Result<T> = std::result::Result<T, Error>;
