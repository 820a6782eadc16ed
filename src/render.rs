//! Draw list for the floor canvas.
//!
//! The host paints what [`build_scene`] returns, in order: grid lines, then
//! items (zones, furniture, tables). Nothing here touches a real canvas, so
//! the whole layer is testable headless.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::MAX_GRID_LINES;
use crate::geometry::{Point, Rect};
use crate::input::ToolMode;
use crate::model::{Placement, PlacementId, PlacementKind, TableShape, TableStatus};
use crate::store::EditorStore;

const FURNITURE_FILL: &str = "#A8A29E";

/// Outline to draw for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderShape {
    Rectangle,
    Circle,
}

/// One placement, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub id: PlacementId,
    pub kind: PlacementKind,
    pub rect: Rect,
    pub rotation: f64,
    pub shape: RenderShape,
    pub fill: String,
    pub opacity: f64,
    pub label: String,
    /// Secondary line, e.g. seat count.
    pub detail: Option<String>,
    pub glyph: Option<&'static str>,
    pub selected: bool,
    pub show_resize_handle: bool,
}

/// A single background grid line from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub zoom: f64,
    pub grid: Vec<GridLine>,
    pub items: Vec<RenderItem>,
}

/// Build the draw list for the active floor over a `width` × `height` world area.
#[must_use]
pub fn build_scene(store: &EditorStore, width: f64, height: f64) -> Scene {
    let prefs = store.prefs();
    let grid = if prefs.show_grid { grid_lines(width, height, prefs.grid_size) } else { Vec::new() };
    let items = store.active_placements().iter().map(|p| render_item(store, p)).collect();
    Scene { zoom: prefs.zoom_level, grid, items }
}

/// Vertical then horizontal lines every `grid_size` units, from 0 up to the extent.
///
/// At most [`MAX_GRID_LINES`] lines per axis; a finer grid is cut off there.
#[must_use]
pub fn grid_lines(width: f64, height: f64, grid_size: f64) -> Vec<GridLine> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(grid_size) || !usable(width) || !usable(height) {
        return Vec::new();
    }
    let steps = |extent: f64| {
        (0..=u32::MAX)
            .map(move |i| f64::from(i) * grid_size)
            .take_while(move |v| *v <= extent)
            .take(MAX_GRID_LINES)
    };
    let vertical = steps(width).map(|x| GridLine { from: Point::new(x, 0.0), to: Point::new(x, height) });
    let horizontal = steps(height).map(|y| GridLine { from: Point::new(0.0, y), to: Point::new(width, y) });
    vertical.chain(horizontal).collect()
}

fn render_item(store: &EditorStore, placement: &Placement) -> RenderItem {
    let selected = store.selection().is_some_and(|s| s.id == placement.id());
    let show_resize_handle =
        selected && store.tool_mode() == ToolMode::Resize && store.constraints_for(placement).resizable;
    let base = RenderItem {
        id: placement.id(),
        kind: placement.kind(),
        rect: placement.rect(),
        rotation: placement.rotation(),
        shape: RenderShape::Rectangle,
        fill: String::new(),
        opacity: 1.0,
        label: String::new(),
        detail: None,
        glyph: None,
        selected,
        show_resize_handle,
    };

    match placement {
        Placement::Table(t) => {
            let table = store.table(t.table_id);
            RenderItem {
                shape: match t.shape {
                    TableShape::Rectangle => RenderShape::Rectangle,
                    TableShape::Circle => RenderShape::Circle,
                },
                fill: status_fill(table.map_or(TableStatus::Available, |t| t.status)).to_string(),
                label: table.map_or_else(|| "?".to_string(), |t| t.name.clone()),
                detail: table.map(|t| format!("{} seats", t.capacity)),
                ..base
            }
        }
        Placement::Furniture(f) => {
            let template = store.catalog().get(&f.furniture_template_id);
            RenderItem {
                fill: FURNITURE_FILL.to_string(),
                label: template.map_or_else(|| f.furniture_template_id.clone(), |t| t.name.clone()),
                detail: f.capacity.map(|c| format!("{c} seats")),
                glyph: Some(store.catalog().icon_for(&f.furniture_template_id).glyph()),
                ..base
            }
        }
        Placement::Zone(z) => RenderItem { fill: z.color.clone(), opacity: z.opacity, label: z.name.clone(), ..base },
    }
}

fn status_fill(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Available => "#22C55E",
        TableStatus::Occupied => "#EF4444",
        TableStatus::Reserved => "#F59E0B",
        TableStatus::Cleaning => "#9CA3AF",
    }
}

