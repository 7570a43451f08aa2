// src/rasterizer/mod.rs

//! Software rasterizer for the backbuffer.
//!
//! Every primitive funnels through [`draw_pixel`], which applies the single
//! blend rule of this crate:
//!
//! ```text
//! dst' = dst + ((src - dst) * a) >> 8      for R, G, B
//! dst.a is preserved
//! ```
//!
//! This is a cheap linear interpolation, not premultiplied compositing. The
//! shift-by-8 truncation is part of the output contract; only a fully opaque
//! source short-circuits to an exact copy of its colour channels.
//!
//! Overlapping primitives (rectangle corners, filled-circle spans) blend the
//! same pixel more than once. Traversal order is therefore observable for
//! translucent colours and is kept fixed.

pub mod blit;


pub use blit::{blit, blit_rect};

use crate::color::Color;
use crate::geometry::Rect;
use crate::pixels::{Pixel, PixelBuffer};

/// Blends `src` over `dst` using `src.a` as an 8-bit weight.
#[inline]
pub fn blend(dst: Pixel, src: Pixel) -> Pixel {
    if src.a == u8::MAX {
        return Pixel::new(src.b, src.g, src.r, dst.a);
    }
    let a = src.a as i32;
    let mix = |d: u8, s: u8| -> u8 {
        let d = d as i32;
        (d + (((s as i32 - d) * a) >> 8)) as u8
    };
    Pixel::new(mix(dst.b, src.b), mix(dst.g, src.g), mix(dst.r, src.r), dst.a)
}

/// Blends `color` onto `(x, y)`. Transparent colours and out-of-bounds
/// coordinates are ignored.
#[inline]
pub fn draw_pixel(buffer: &mut PixelBuffer, x: i32, y: i32, color: Color) {
    if color.a == 0 {
        return;
    }
    if let Some(dst) = buffer.pixel_mut(x, y) {
        *dst = blend(*dst, Pixel::from(color));
    }
}

/// Reads `(x, y)` as a `Color`, or transparent black outside the buffer.
pub fn get_pixel(buffer: &PixelBuffer, x: i32, y: i32) -> Color {
    buffer
        .pixel(x, y)
        .map(Color::from)
        .unwrap_or(Color::TRANSPARENT)
}

/// Overwrites every pixel with `color`. No blending.
pub fn fill(buffer: &mut PixelBuffer, color: Color) {
    let pixel = Pixel::from(color);
    buffer.pixels_mut().fill(pixel);
}

/// Bresenham line including both endpoints.
///
/// The walk runs in 64-bit arithmetic so endpoints anywhere in `i32` are
/// accepted. Axis-aligned lines are clipped to the buffer up front; other
/// lines stop as soon as the walk has left the buffer for good.
pub fn draw_line(buffer: &mut PixelBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let (width, height) = (i64::from(buffer.width()), i64::from(buffer.height()));
    if y1 == y2 {
        if let Some(range) = clip_span(x1, x2, width) {
            for x in range {
                draw_pixel(buffer, x, y1, color);
            }
        }
        return;
    }
    if x1 == x2 {
        if let Some(range) = clip_span(y1, y2, height) {
            for y in range {
                draw_pixel(buffer, x1, y, color);
            }
        }
        return;
    }

    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x1, y1);

    loop {
        // x and y stay between the endpoints, so they fit in i32.
        draw_pixel(buffer, x as i32, y as i32, color);
        if x == x2 && y == y2 {
            break;
        }
        if gone_past(x, sx, width) || gone_past(y, sy, height) {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// The in-buffer part of the inclusive span between `a` and `b` along an
/// axis of length `extent`.
fn clip_span(a: i32, b: i32, extent: i64) -> Option<std::ops::RangeInclusive<i32>> {
    let lo = i64::from(a.min(b)).max(0);
    let hi = i64::from(a.max(b)).min(extent - 1);
    (lo <= hi).then(|| lo as i32..=hi as i32)
}

/// Whether a coordinate moving by `step` can never come back into `0..extent`.
fn gone_past(pos: i64, step: i64, extent: i64) -> bool {
    (step > 0 && pos >= extent) || (step < 0 && pos < 0)
}

/// Clamps a 64-bit coordinate into `i32`. Clamped values are off any buffer.
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Filled: one horizontal line per row. Outlined: the four border lines, so
/// each corner is blended twice.
pub fn draw_rect(buffer: &mut PixelBuffer, rect: Rect, color: Color, fill: bool) {
    let right = saturate(i64::from(rect.x) + i64::from(rect.w) - 1);
    let bottom = saturate(i64::from(rect.y) + i64::from(rect.h) - 1);

    if fill {
        let first = i64::from(rect.y).max(0);
        let end = (i64::from(rect.y) + i64::from(rect.h)).min(i64::from(buffer.height()));
        for y in first..end {
            draw_line(buffer, rect.x, y as i32, right, y as i32, color);
        }
    } else {
        draw_line(buffer, rect.x, rect.y, right, rect.y, color);
        draw_line(buffer, rect.x, bottom, right, bottom, color);
        draw_line(buffer, rect.x, rect.y, rect.x, bottom, color);
        draw_line(buffer, right, rect.y, right, bottom, color);
    }
}

/// Midpoint circle. Filled mode draws vertical spans for every octant step;
/// outlined mode draws the eight symmetric boundary points.
pub fn draw_circle(buffer: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Color, fill: bool) {
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let height = i64::from(buffer.height());
    let mut px: i64 = 0;
    let mut py = i64::from(radius);
    let mut d = 1 - py;

    let plot = |buffer: &mut PixelBuffer, x: i64, y: i64| {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            draw_pixel(buffer, x, y, color);
        }
    };
    // Rows of a vertical span `cy - half ..= cy + half` that lie in the buffer.
    let rows = |half: i64| (cy - half).max(0)..=(cy + half).min(height - 1);

    while px <= py {
        if fill {
            for y in rows(py) {
                plot(buffer, cx + px, y);
                plot(buffer, cx - px, y);
            }
            for y in rows(px) {
                plot(buffer, cx + py, y);
                plot(buffer, cx - py, y);
            }
        } else {
            plot(buffer, cx + px, cy + py);
            plot(buffer, cx - px, cy + py);
            plot(buffer, cx + px, cy - py);
            plot(buffer, cx - px, cy - py);
            plot(buffer, cx + py, cy + px);
            plot(buffer, cx - py, cy + px);
            plot(buffer, cx + py, cy - px);
            plot(buffer, cx - py, cy - px);
        }

        if d < 0 {
            d += 2 * px + 3;
        } else {
            d += 2 * (px - py) + 5;
            py -= 1;
        }
        px += 1;
    }
}
