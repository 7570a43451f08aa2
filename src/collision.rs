// src/collision.rs

//! Overlap predicates for application code.
//!
//! `point_in_rect` is inclusive on all four edges while `rects_overlap` is an
//! exclusive separating-axis test. Both conventions are relied upon by callers
//! and stay distinct.

use crate::geometry::Rect;

/// True if `(x, y)` lies inside `rect`, edges included (`x == rect.x + rect.w` counts).
pub fn point_in_rect(x: i32, y: i32, rect: Rect) -> bool {
    x >= rect.x && x <= rect.right() && y >= rect.y && y <= rect.bottom()
}

/// True if the two rectangles share interior area. Touching edges do not overlap.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

pub fn point_in_circle(x: i32, y: i32, cx: i32, cy: i32, radius: f32) -> bool {
    let dx = (x - cx) as f32;
    let dy = (y - cy) as f32;
    dx * dx + dy * dy <= radius * radius
}

/// Clamps the circle centre onto the rectangle and compares squared distances.
pub fn rect_circle_overlap(rect: Rect, cx: i32, cy: i32, radius: f32) -> bool {
    let closest_x = cx.clamp(rect.x, rect.right().max(rect.x)) as f32;
    let closest_y = cy.clamp(rect.y, rect.bottom().max(rect.y)) as f32;

    let dx = cx as f32 - closest_x;
    let dy = cy as f32 - closest_y;
    dx * dx + dy * dy <= radius * radius
}

pub fn circles_overlap(cx1: i32, cy1: i32, r1: f32, cx2: i32, cy2: i32, r2: f32) -> bool {
    let dx = (cx1 - cx2) as f32;
    let dy = (cy1 - cy2) as f32;
    let radius_sum = r1 + r2;
    dx * dx + dy * dy <= radius_sum * radius_sum
}
