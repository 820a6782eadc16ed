//! Points, rectangles, grid snapping, rotation wrapping and the zoom camera.
//!
//! All placement math is axis-aligned: a placement's `rotation` is a display
//! attribute and never feeds into drag or resize deltas.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN_DEG, MAX_ZOOM, MIN_GRID_SIZE, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pt` lies inside or on the edge of this rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }
}

/// Round `value` to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid size disables snapping. Idempotent:
/// `snap(snap(v, g), g) == snap(v, g)`.
#[must_use]
pub fn snap(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Apply [`snap`] only when `enabled`.
#[must_use]
pub fn snap_if(value: f64, grid_size: f64, enabled: bool) -> f64 {
    if enabled { snap(value, grid_size) } else { value }
}

/// Whether `size` is a usable grid pitch.
#[must_use]
pub fn is_valid_grid_size(size: f64) -> bool {
    size.is_finite() && size >= MIN_GRID_SIZE
}

/// Wrap a rotation in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_rotation(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}

/// Clamp `value` to `[min, max]`, with `max` optional.
#[must_use]
pub fn clamp_dimension(value: f64, min: f64, max: Option<f64>) -> f64 {
    let lower = value.max(min);
    match max {
        Some(max) if max >= min => lower.min(max),
        _ => lower,
    }
}

/// Zoom-only camera. The floor canvas never pans; the host scrolls it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(zoom: f64) -> Self {
        Self { zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM) }
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point { x: screen.x / self.zoom, y: screen.y / self.zoom }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point { x: world.x * self.zoom, y: world.y * self.zoom }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
