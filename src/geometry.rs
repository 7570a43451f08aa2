// src/geometry.rs

//! Integer points and rectangles.

use serde::{Deserialize, Serialize};

/// An integer 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle addressed by its top-left corner.
///
/// Whether `w`/`h` are exclusive or inclusive extents depends on the caller:
/// the rasterizer draws `[x, x + w - 1]`, `point_in_rect` accepts `x + w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// One past the right edge, saturating at the `i32` limits.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom edge, saturating at the `i32` limits.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }
}
