// src/display/viewport.rs
//! Letterboxing: where the backbuffer lands inside the window.

use crate::geometry::{Point, Rect};

/// Backbuffer and window sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Viewport {
    pub const fn new(buffer_width: u32, buffer_height: u32, window_width: u32, window_height: u32) -> Self {
        Self {
            buffer_width,
            buffer_height,
            window_width,
            window_height,
        }
    }

    /// The largest aspect-preserving rectangle for the backbuffer, centred in
    /// the window.
    pub fn letterbox(&self) -> Rect {
        let (ww, wh) = (self.window_width as i32, self.window_height as i32);
        if self.buffer_width == 0 || self.buffer_height == 0 || ww == 0 || wh == 0 {
            return Rect::new(0, 0, ww, wh);
        }

        let src_ar = self.buffer_height as f32 / self.buffer_width as f32;
        let dst_ar = wh as f32 / ww as f32;
        let (w, h) = if src_ar < dst_ar {
            (ww, (ww as f32 * src_ar).ceil() as i32)
        } else {
            ((wh as f32 / src_ar).ceil() as i32, wh)
        };

        Rect::new((ww - w) / 2, (wh - h) / 2, w, h)
    }

    /// Maps a window position into backbuffer space, clamped to the buffer.
    pub fn window_to_buffer(&self, x: i32, y: i32) -> Point {
        let dest = self.letterbox();
        let (bw, bh) = (self.buffer_width as i32, self.buffer_height as i32);
        if dest.w <= 0 || dest.h <= 0 || bw == 0 || bh == 0 {
            return Point::new(0, 0);
        }

        let unclamped_x = (x - dest.x) * bw / dest.w;
        let unclamped_y = (y - dest.y) * bh / dest.h;
        Point::new(unclamped_x.clamp(0, bw - 1), unclamped_y.clamp(0, bh - 1))
    }
}
