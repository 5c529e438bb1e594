//! Turns raw gesture output into new rectangle geometry.
//!
//! The gesture controller only reports how far the pointer travelled from the
//! press point. Which edge moves, what stays pinned, ratio locking and minimum
//! sizes are decided here.

use crate::direction::Direction;
use crate::geometry::{deg_to_rad, normalize_degrees};
use crate::model::{Position, RectGeometry, ResizeMotion, ResizeUpdate, Size, TopLeftStyle};

/// Projects pointer travel (`length` along `angle` radians) onto the axes of a
/// rectangle rotated by `rotation` degrees. Returns `(delta_w, delta_h)`.
pub fn resize_deltas(length: f64, angle: f64, rotation: f64) -> (f64, f64) {
    let beta = angle - deg_to_rad(rotation);
    (length * beta.cos(), length * beta.sin())
}

/// Ratio in effect for a resize. A positive fixed ratio always applies; with
/// Shift held and no fixed ratio the start rectangle's proportions are kept.
pub fn aspect_ratio(shift_key: bool, fixed: Option<f64>, rect: &RectGeometry) -> Option<f64> {
    match fixed.filter(|r| r.is_finite() && *r > 0.0) {
        Some(r) => Some(r),
        None if shift_key && rect.height != 0.0 => Some((rect.width / rect.height).abs()),
        None => None,
    }
}

fn clamp_dimension(value: f64, delta: f64, min: f64) -> (f64, f64) {
    let expected = value + delta;
    if expected > min {
        (expected, delta)
    } else {
        (min, min - value)
    }
}

/// New center and size after dragging `handle` by `(delta_w, delta_h)` in the
/// rectangle's own axes. The edge (or corner) opposite the handle stays put.
/// Signs of a flipped width/height survive the update.
pub fn new_style(
    handle: Direction,
    rect: &RectGeometry,
    delta_w: f64,
    delta_h: f64,
    ratio: Option<f64>,
    min_width: f64,
    min_height: f64,
) -> (Position, Size) {
    let width_sign = if rect.width < 0.0 { -1.0 } else { 1.0 };
    let height_sign = if rect.height < 0.0 { -1.0 } else { 1.0 };
    let mut width = rect.width.abs();
    let mut height = rect.height.abs();
    let mut center_x = rect.center_x;
    let mut center_y = rect.center_y;
    let mut dw = delta_w;
    let mut dh = delta_h;
    let rad = deg_to_rad(rect.rotate_angle);
    let (sin, cos) = rad.sin_cos();

    match handle {
        Direction::E => {
            (width, dw) = clamp_dimension(width, dw, min_width);
            if let Some(r) = ratio {
                dh = dw / r;
                height = width / r;
                center_x += dw / 2.0 * cos - dh / 2.0 * sin;
                center_y += dw / 2.0 * sin + dh / 2.0 * cos;
            } else {
                center_x += dw / 2.0 * cos;
                center_y += dw / 2.0 * sin;
            }
        }
        Direction::NE => {
            dh = -dh;
            (width, dw) = clamp_dimension(width, dw, min_width);
            (height, dh) = clamp_dimension(height, dh, min_height);
            if let Some(r) = ratio {
                dw = dh * r;
                width = height * r;
            }
            center_x += dw / 2.0 * cos + dh / 2.0 * sin;
            center_y += dw / 2.0 * sin - dh / 2.0 * cos;
        }
        Direction::SE => {
            (width, dw) = clamp_dimension(width, dw, min_width);
            (height, dh) = clamp_dimension(height, dh, min_height);
            if let Some(r) = ratio {
                dw = dh * r;
                width = height * r;
            }
            center_x += dw / 2.0 * cos - dh / 2.0 * sin;
            center_y += dw / 2.0 * sin + dh / 2.0 * cos;
        }
        Direction::S => {
            (height, dh) = clamp_dimension(height, dh, min_height);
            if let Some(r) = ratio {
                dw = dh * r;
                width = height * r;
                center_x += dw / 2.0 * cos - dh / 2.0 * sin;
                center_y += dw / 2.0 * sin + dh / 2.0 * cos;
            } else {
                center_x -= dh / 2.0 * sin;
                center_y += dh / 2.0 * cos;
            }
        }
        Direction::SW => {
            dw = -dw;
            (width, dw) = clamp_dimension(width, dw, min_width);
            (height, dh) = clamp_dimension(height, dh, min_height);
            if let Some(r) = ratio {
                height = width / r;
                dh = dw / r;
            }
            center_x -= dw / 2.0 * cos + dh / 2.0 * sin;
            center_y -= dw / 2.0 * sin - dh / 2.0 * cos;
        }
        Direction::W => {
            dw = -dw;
            (width, dw) = clamp_dimension(width, dw, min_width);
            if let Some(r) = ratio {
                height = width / r;
                dh = dw / r;
                center_x -= dw / 2.0 * cos + dh / 2.0 * sin;
                center_y -= dw / 2.0 * sin - dh / 2.0 * cos;
            } else {
                center_x -= dw / 2.0 * cos;
                center_y -= dw / 2.0 * sin;
            }
        }
        Direction::NW => {
            dw = -dw;
            dh = -dh;
            (width, dw) = clamp_dimension(width, dw, min_width);
            (height, dh) = clamp_dimension(height, dh, min_height);
            if let Some(r) = ratio {
                width = height * r;
                dw = dh * r;
            }
            center_x -= dw / 2.0 * cos - dh / 2.0 * sin;
            center_y -= dw / 2.0 * sin + dh / 2.0 * cos;
        }
        Direction::N => {
            dh = -dh;
            (height, dh) = clamp_dimension(height, dh, min_height);
            if let Some(r) = ratio {
                width = height * r;
                dw = dh * r;
                center_x += dw / 2.0 * cos + dh / 2.0 * sin;
                center_y += dw / 2.0 * sin - dh / 2.0 * cos;
            } else {
                center_x += dh / 2.0 * sin;
                center_y -= dh / 2.0 * cos;
            }
        }
    }

    (
        Position { center_x, center_y },
        Size {
            width: width * width_sign,
            height: height * height_sign,
        },
    )
}

/// Full resize pipeline for one move of a resize gesture.
pub fn apply_resize(
    motion: &ResizeMotion,
    parent_rotate_angle: f64,
    fixed_ratio: Option<f64>,
    min_width: f64,
    min_height: f64,
) -> ResizeUpdate {
    let rect = motion.start_rect;
    let (delta_w, delta_h) = resize_deltas(
        motion.length,
        motion.angle,
        rect.rotate_angle + parent_rotate_angle,
    );
    let ratio = aspect_ratio(motion.shift_key, fixed_ratio, &rect);
    let (position, size) = new_style(
        motion.handle,
        &rect,
        delta_w,
        delta_h,
        ratio,
        min_width,
        min_height,
    );
    ResizeUpdate {
        style: TopLeftStyle::from_center(position, size, rect.rotate_angle),
        shift_key: motion.shift_key,
        handle: motion.handle,
    }
}

/// Absolute rotation for a rotate gesture: rounded, wrapped into `[0, 360)`
/// and pulled onto the nearest right angle when within 4 degrees of it.
pub fn snap_rotation(start_angle: f64, turn: f64) -> f64 {
    let angle = normalize_degrees((start_angle + turn).round());
    if !(4.0..=356.0).contains(&angle) {
        0.0
    } else if angle > 86.0 && angle < 94.0 {
        90.0
    } else if angle > 176.0 && angle < 184.0 {
        180.0
    } else if angle > 266.0 && angle < 274.0 {
        270.0
    } else {
        angle
    }
}
