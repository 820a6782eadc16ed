//! Placement interaction controller: turns pointer sequences into transform
//! updates for one placement.
//!
//! One controller exists per rendered placement, and each keeps its own
//! gesture origin. The store's `is_dragging`/`is_resizing` flags are the
//! global guard: a pointer-down is refused while either gesture is active
//! anywhere. Drag and resize math is axis-aligned and ignores `rotation`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::geometry::{Point, clamp_dimension, snap_if};
use crate::input::{HitPart, ToolMode};
use crate::model::{Placement, PlacementId, PlacementKind};
use crate::store::EditorStore;

/// Gesture in progress for one controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Pointer offset from the placement origin at pointer-down.
    Dragging { offset: Point },
    /// Size and pointer position at pointer-down.
    Resizing { width: f64, height: f64, pointer: Point },
}

#[derive(Debug, Clone)]
pub struct PlacementController {
    id: PlacementId,
    kind: PlacementKind,
    gesture: Gesture,
}

impl PlacementController {
    #[must_use]
    pub fn new(id: PlacementId, kind: PlacementKind) -> Self {
        Self { id, kind, gesture: Gesture::Idle }
    }

    #[must_use]
    pub fn id(&self) -> PlacementId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PlacementKind {
        self.kind
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Start a drag or resize at world point `pt`. Returns whether a gesture began.
    ///
    /// Drag: `select` mode and no gesture active. Resize: `resize` mode, the
    /// pointer on the resize handle, a resizable placement, and no gesture active.
    pub fn pointer_down(&mut self, store: &mut EditorStore, pt: Point, part: HitPart) -> bool {
        if store.is_dragging() || store.is_resizing() {
            return false;
        }
        let Some(item) = store.placement(self.kind, self.id) else {
            return false;
        };
        let rect = item.rect();
        match store.tool_mode() {
            ToolMode::Select => {
                self.gesture = Gesture::Dragging { offset: Point::new(pt.x - rect.x, pt.y - rect.y) };
                store.set_dragging(true);
                true
            }
            ToolMode::Resize if part == HitPart::ResizeHandle && store.constraints_for(&item).resizable => {
                self.gesture = Gesture::Resizing { width: rect.width, height: rect.height, pointer: pt };
                store.set_resizing(true);
                true
            }
            _ => false,
        }
    }

    /// Continue the active gesture. Returns the written placement, if any.
    pub fn pointer_move(&mut self, store: &mut EditorStore, pt: Point) -> Option<Placement> {
        let item = store.placement(self.kind, self.id)?;
        let prefs = store.prefs();
        let updated = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Dragging { offset } => {
                if !store.is_dragging() {
                    self.gesture = Gesture::Idle;
                    return None;
                }
                let x = snap_if((pt.x - offset.x).max(0.0), prefs.grid_size, prefs.snap_to_grid);
                let y = snap_if((pt.y - offset.y).max(0.0), prefs.grid_size, prefs.snap_to_grid);
                item.with_position(x, y)
            }
            Gesture::Resizing { width, height, pointer } => {
                if !store.is_resizing() {
                    self.gesture = Gesture::Idle;
                    return None;
                }
                let limits = store.constraints_for(&item);
                // Snap first so the min/max limits always win.
                let raw_w = snap_if(width + (pt.x - pointer.x), prefs.grid_size, prefs.snap_to_grid);
                let raw_h = snap_if(height + (pt.y - pointer.y), prefs.grid_size, prefs.snap_to_grid);
                let w = clamp_dimension(raw_w, limits.min_width, limits.max_width);
                let h = clamp_dimension(raw_h, limits.min_height, limits.max_height);
                item.with_size(w, h)
            }
        };
        store.update_placement(updated.clone());
        Some(updated)
    }

    /// End the active gesture, clearing the matching store flag.
    pub fn pointer_up(&mut self, store: &mut EditorStore) {
        match self.gesture {
            Gesture::Dragging { .. } => store.set_dragging(false),
            Gesture::Resizing { .. } => store.set_resizing(false),
            Gesture::Idle => {}
        }
        self.gesture = Gesture::Idle;
    }
}
