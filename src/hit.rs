#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::RESIZE_HANDLE_PX;
use crate::geometry::{Camera, Point, Rect};
use crate::input::HitPart;
use crate::model::{Placement, PlacementId, PlacementKind};

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: PlacementId,
    pub kind: PlacementKind,
    pub part: HitPart,
}

/// The resize handle square tucked inside a placement's bottom-right corner.
#[must_use]
pub fn resize_handle_rect(rect: Rect, camera: &Camera) -> Rect {
    let size = camera.screen_dist_to_world(RESIZE_HANDLE_PX).min(rect.width).min(rect.height);
    let corner = rect.bottom_right();
    Rect::new(corner.x - size, corner.y - size, size, size)
}

/// Find the topmost placement under `world_pt`.
///
/// `placements` must be in draw order (zones first, tables last); the search
/// runs back to front so tables win over furniture and furniture over zones.
#[must_use]
pub fn hit_test(world_pt: Point, placements: &[Placement], camera: &Camera) -> Option<Hit> {
    placements.iter().rev().find_map(|p| {
        let rect = p.rect();
        if !rect.contains(world_pt) {
            return None;
        }
        let part = if resize_handle_rect(rect, camera).contains(world_pt) {
            HitPart::ResizeHandle
        } else {
            HitPart::Body
        };
        Some(Hit { id: p.id(), kind: p.kind(), part })
    })
}
