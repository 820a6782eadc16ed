//! Spatial entity model: floors, tables, and the three placement variants.
//!
//! Placements share a positional envelope (`x`, `y`, `width`, `height`) in
//! floor-relative world pixels. [`Placement`] is the tagged union the store,
//! controllers and renderer pass around; the concrete structs are what the
//! persistence boundary sends and receives.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

pub type FloorId = Uuid;
pub type FloorPlanId = Uuid;
pub type TableId = Uuid;
pub type PlacementId = Uuid;
/// Catalog key of a furniture template, e.g. `"chair"`.
pub type TemplateId = String;

// =============================================================================
// FLOORS AND TABLES
// =============================================================================

/// A restaurant floor plan. Owns an ordered set of floors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: FloorPlanId,
    pub name: String,
}

/// One floor (tab) of a floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    pub floor_plan_id: FloorPlanId,
    /// Tab position; lower values come first.
    pub order: u32,
}

/// Service status of a table. Only `Available` tables may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

/// A dining table entity. Owned by the external table service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: u32,
    pub status: TableStatus,
}

// =============================================================================
// PLACEMENTS
// =============================================================================

/// Which collection a placement lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    Table,
    Furniture,
    Zone,
}

/// Drawn outline of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Rectangle,
    Circle,
}

impl TableShape {
    /// The other shape.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Rectangle => Self::Circle,
            Self::Circle => Self::Rectangle,
        }
    }
}

/// A table positioned on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePlacement {
    pub id: PlacementId,
    pub table_id: TableId,
    pub floor_id: FloorId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees, always in `[0, 360)`.
    pub rotation: f64,
    pub shape: TableShape,
}

/// An instance of a furniture template positioned on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurniturePlacement {
    pub id: PlacementId,
    pub furniture_template_id: TemplateId,
    pub floor_id: FloorId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    /// Seats contributed, copied from the template at placement time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// Purpose of a zone; drives its default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    #[default]
    Dining,
    Bar,
    Patio,
    Private,
    Kitchen,
    Other,
}

impl ZoneType {
    /// Fill color used when the form leaves color blank.
    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Dining => "#3B82F6",
            Self::Bar => "#8B5CF6",
            Self::Patio => "#22C55E",
            Self::Private => "#F59E0B",
            Self::Kitchen => "#EF4444",
            Self::Other => "#6B7280",
        }
    }
}

/// A colored region drawn beneath every other placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: PlacementId,
    pub floor_id: FloorId,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// CSS color string.
    pub color: String,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub member_furniture_ids: Vec<PlacementId>,
}

/// Any placeable item, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placement {
    Table(TablePlacement),
    Furniture(FurniturePlacement),
    Zone(Zone),
}

impl Placement {
    #[must_use]
    pub fn id(&self) -> PlacementId {
        match self {
            Self::Table(t) => t.id,
            Self::Furniture(f) => f.id,
            Self::Zone(z) => z.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlacementKind {
        match self {
            Self::Table(_) => PlacementKind::Table,
            Self::Furniture(_) => PlacementKind::Furniture,
            Self::Zone(_) => PlacementKind::Zone,
        }
    }

    #[must_use]
    pub fn floor_id(&self) -> FloorId {
        match self {
            Self::Table(t) => t.floor_id,
            Self::Furniture(f) => f.floor_id,
            Self::Zone(z) => z.floor_id,
        }
    }

    /// Bounding box in world coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            Self::Table(t) => Rect::new(t.x, t.y, t.width, t.height),
            Self::Furniture(f) => Rect::new(f.x, f.y, f.width, f.height),
            Self::Zone(z) => Rect::new(z.x, z.y, z.width, z.height),
        }
    }

    /// Rotation in degrees. Zones never rotate.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        match self {
            Self::Table(t) => t.rotation,
            Self::Furniture(f) => f.rotation,
            Self::Zone(_) => 0.0,
        }
    }

    /// Copy with the origin moved to `(x, y)`.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        match &mut self {
            Self::Table(t) => (t.x, t.y) = (x, y),
            Self::Furniture(f) => (f.x, f.y) = (x, y),
            Self::Zone(z) => (z.x, z.y) = (x, y),
        }
        self
    }

    /// Copy with the size replaced.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        match &mut self {
            Self::Table(t) => (t.width, t.height) = (width, height),
            Self::Furniture(f) => (f.width, f.height) = (width, height),
            Self::Zone(z) => (z.width, z.height) = (width, height),
        }
        self
    }

    /// Copy with the rotation replaced. Ignored for zones.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        match &mut self {
            Self::Table(t) => t.rotation = rotation,
            Self::Furniture(f) => f.rotation = rotation,
            Self::Zone(_) => {}
        }
        self
    }
}

// =============================================================================
// SAVE PAYLOAD
// =============================================================================

/// Every placement across every floor. Sent wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub table_placements: Vec<TablePlacement>,
    pub furniture_placements: Vec<FurniturePlacement>,
    pub zones: Vec<Zone>,
}

impl LayoutSnapshot {
    /// Total number of placements in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table_placements.len() + self.furniture_placements.len() + self.zones.len()
    }

    /// Returns `true` if the payload holds no placements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
