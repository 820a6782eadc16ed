//! Input model: tool modes, selection, pointer buttons and keys.
//!
//! `ToolMode` captures what a canvas click or pointer-down means at the time
//! it arrives. `Selection` names the single placement the toolbar acts on.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::model::{PlacementId, PlacementKind};

/// The editor's current interaction intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    /// Select and drag placements (default).
    #[default]
    Select,
    /// Click empty canvas to place the next available table.
    AddTable,
    /// Click empty canvas to place the chosen furniture template.
    AddFurniture,
    /// Zones are created through the zone form, not by clicking.
    AddZone,
    /// Drag a placement's resize handle.
    Resize,
    /// Click a selected placement to remove it.
    Delete,
    /// Read-only preview; the canvas ignores pointer input.
    Simulate,
}

impl ToolMode {
    /// Whether this mode places new items on empty-canvas clicks.
    #[must_use]
    pub fn is_add(self) -> bool {
        matches!(self, Self::AddTable | Self::AddFurniture | Self::AddZone)
    }
}

/// The currently selected placement and the collection it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: PlacementId,
    pub kind: PlacementKind,
}

impl Selection {
    #[must_use]
    pub fn new(id: PlacementId, kind: PlacementKind) -> Self {
        Self { id, kind }
    }
}

/// Which part of a placement a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key as reported by the host (e.g. `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key removes the current selection.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }
}
