//! Pure geometry helpers shared by the gesture controller, the resize math
//! and the handle renderer.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A point or vector in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

pub fn length(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Wraps any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Angle in degrees from `a` to `b`, measured in screen space (y down, so a
/// positive value is a clockwise turn on screen). Always in `[0, 360)`.
pub fn angle_between(a: Point, b: Point) -> f64 {
    let dot = a.x * b.x + a.y * b.y;
    let det = a.x * b.y - a.y * b.x;
    normalize_degrees(det.atan2(dot).to_degrees())
}

const CURSOR_ORDER: [Direction; 8] = [
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
];

// Index shift per 30 degree bucket of rotation.
const CURSOR_STEPS: [usize; 12] = [0, 1, 2, 2, 3, 4, 4, 5, 6, 6, 7, 8];

/// Cursor direction for a handle once the rectangle is rotated by `angle`
/// degrees. The result is a compass name like `"ne"`; append `-resize` for
/// the CSS cursor.
pub fn cursor_for_direction(angle: f64, direction: Direction) -> &'static str {
    let bucket = (normalize_degrees(angle) / 30.0).floor() as usize;
    let step = CURSOR_STEPS[bucket.min(CURSOR_STEPS.len() - 1)];
    let start = CURSOR_ORDER
        .iter()
        .position(|d| *d == direction)
        .unwrap_or_default();
    CURSOR_ORDER[(start + step) % CURSOR_ORDER.len()].as_str()
}

/// Full CSS cursor value for a resize handle.
pub fn resize_cursor(angle: f64, direction: Direction) -> String {
    format!("{}-resize", cursor_for_direction(angle, direction))
}
