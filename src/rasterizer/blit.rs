// src/rasterizer/blit.rs

//! Image blits onto a destination buffer.
//!
//! Both operations blend source pixels with [`super::blend`] and silently clip
//! rows and columns that fall outside the destination. There is no scaling.

use super::blend;
use crate::geometry::Rect;
use crate::pixels::PixelBuffer;

/// Blends all of `src` onto `dst` with its top-left corner at `(x, y)`.
pub fn blit(dst: &mut PixelBuffer, src: &PixelBuffer, x: i32, y: i32) {
    let src_rect = Rect::new(0, 0, src.width() as i32, src.height() as i32);
    blit_rect(dst, src, x, y, src_rect);
}

/// Blends the `src_rect` region of `src` onto `dst` at `(x, y)`.
///
/// The far edges of `src_rect` are clamped to `src`'s bounds; an oversized
/// rectangle is not an error.
pub fn blit_rect(dst: &mut PixelBuffer, src: &PixelBuffer, x: i32, y: i32, src_rect: Rect) {
    let src_x_end = src_rect.right().min(src.width() as i32);
    let src_y_end = src_rect.bottom().min(src.height() as i32);
    let (dst_w, dst_h) = (i64::from(dst.width()), i64::from(dst.height()));

    // Source texels before column or row zero do not exist.
    for j in src_rect.y.max(0)..src_y_end {
        let dst_y = i64::from(y) + i64::from(j) - i64::from(src_rect.y);
        if dst_y < 0 || dst_y >= dst_h {
            continue;
        }
        for i in src_rect.x.max(0)..src_x_end {
            let dst_x = i64::from(x) + i64::from(i) - i64::from(src_rect.x);
            if dst_x < 0 || dst_x >= dst_w {
                continue;
            }
            let Some(src_pixel) = src.pixel(i, j) else {
                continue;
            };
            if let Some(dst_pixel) = dst.pixel_mut(dst_x as i32, dst_y as i32) {
                *dst_pixel = blend(*dst_pixel, src_pixel);
            }
        }
    }
}
