//! Editor state store: the single owner of everything the canvas shows.
//!
//! DESIGN
//! ======
//! Floors, tables, the three placement collections, tool mode, selection,
//! gesture flags and display preferences all live here, behind methods.
//! Components read through accessors and write through the operations
//! below; nothing holds a mutable copy. Placement writes are whole-value
//! replace-by-id, so within one gesture the last write wins.
//!
//! Gesture origins live in the [`crate::controller::PlacementController`]
//! running the gesture. Only the two booleans live here, for the toolbar.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Constraints};
use crate::consts::{DEFAULT_GRID_SIZE, MAX_ZOOM, MIN_ZOOM, ROTATE_STEP_DEG, ZOOM_STEP};
use crate::error::EditorError;
use crate::geometry::{Camera, is_valid_grid_size, wrap_rotation};
use crate::input::{Selection, ToolMode};
use crate::model::{
    Floor, FloorId, FloorPlan, FurniturePlacement, LayoutSnapshot, Placement, PlacementId, PlacementKind, Table,
    TableId, TablePlacement, TableStatus, TemplateId, Zone,
};

// =============================================================================
// DISPLAY PREFERENCES
// =============================================================================

/// Canvas display preferences.
///
/// `show_grid` only affects drawing; `snap_to_grid` only affects gesture math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPrefs {
    pub show_grid: bool,
    pub snap_to_grid: bool,
    pub grid_size: f64,
    pub zoom_level: f64,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self { show_grid: true, snap_to_grid: true, grid_size: DEFAULT_GRID_SIZE, zoom_level: 1.0 }
    }
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct EditorStore {
    floor_plan: Option<FloorPlan>,
    floors: Vec<Floor>,
    active_floor_id: Option<FloorId>,
    tables: Vec<Table>,
    table_placements: Vec<TablePlacement>,
    furniture_placements: Vec<FurniturePlacement>,
    zones: Vec<Zone>,
    tool_mode: ToolMode,
    selection: Option<Selection>,
    selected_furniture_type: Option<TemplateId>,
    is_dragging: bool,
    is_resizing: bool,
    prefs: DisplayPrefs,
    catalog: Catalog,
}

impl EditorStore {
    #[must_use]
    pub fn new(catalog: Catalog, prefs: DisplayPrefs) -> Self {
        let mut store = Self { catalog, ..Self::default() };
        store.prefs.show_grid = prefs.show_grid;
        store.prefs.snap_to_grid = prefs.snap_to_grid;
        store.set_grid_size(prefs.grid_size);
        store.set_zoom_level(prefs.zoom_level);
        store
    }

    // --- Placements ---

    /// Append a placement to its collection.
    ///
    /// Refused (returns `false`) when the id is already present, the floor is
    /// unknown, or the backing table already has a placement anywhere.
    pub fn add_placement(&mut self, item: Placement) -> bool {
        let (kind, id) = (item.kind(), item.id());
        if self.contains(kind, id) {
            debug!(%id, ?kind, "placement id already present; add ignored");
            return false;
        }
        if self.floor(item.floor_id()).is_none() {
            warn!(%id, floor_id = %item.floor_id(), "placement references unknown floor; add ignored");
            return false;
        }
        let rotation = wrap_rotation(item.rotation());
        match item.with_rotation(rotation) {
            Placement::Table(t) => {
                if self.is_table_placed(t.table_id) {
                    warn!(table_id = %t.table_id, "table already placed; add ignored");
                    return false;
                }
                self.table_placements.push(t);
            }
            Placement::Furniture(f) => self.furniture_placements.push(f),
            Placement::Zone(z) => self.zones.push(z),
        }
        debug!(%id, ?kind, "placement added");
        true
    }

    /// Replace the placement with the same id. No-op if the id is absent.
    pub fn update_placement(&mut self, item: Placement) -> bool {
        let rotation = wrap_rotation(item.rotation());
        match item.with_rotation(rotation) {
            Placement::Table(t) => replace_by_id(&mut self.table_placements, t, |p| p.id),
            Placement::Furniture(f) => replace_by_id(&mut self.furniture_placements, f, |p| p.id),
            Placement::Zone(z) => replace_by_id(&mut self.zones, z, |p| p.id),
        }
    }

    /// Remove a placement by id, returning it if it was present.
    pub fn remove_placement(&mut self, kind: PlacementKind, id: PlacementId) -> Option<Placement> {
        let removed = match kind {
            PlacementKind::Table => take_by_id(&mut self.table_placements, id, |p| p.id).map(Placement::Table),
            PlacementKind::Furniture => {
                let removed = take_by_id(&mut self.furniture_placements, id, |p| p.id);
                if removed.is_some() {
                    for zone in &mut self.zones {
                        zone.member_furniture_ids.retain(|m| *m != id);
                    }
                }
                removed.map(Placement::Furniture)
            }
            PlacementKind::Zone => take_by_id(&mut self.zones, id, |p| p.id).map(Placement::Zone),
        }?;
        if self.selection.is_some_and(|s| s.id == id) {
            self.selection = None;
        }
        debug!(%id, ?kind, "placement removed");
        Some(removed)
    }

    /// Look up a placement in one collection.
    #[must_use]
    pub fn placement(&self, kind: PlacementKind, id: PlacementId) -> Option<Placement> {
        match kind {
            PlacementKind::Table => self.table_placements.iter().find(|p| p.id == id).cloned().map(Placement::Table),
            PlacementKind::Furniture => self
                .furniture_placements
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .map(Placement::Furniture),
            PlacementKind::Zone => self.zones.iter().find(|p| p.id == id).cloned().map(Placement::Zone),
        }
    }

    #[must_use]
    pub fn contains(&self, kind: PlacementKind, id: PlacementId) -> bool {
        match kind {
            PlacementKind::Table => self.table_placements.iter().any(|p| p.id == id),
            PlacementKind::Furniture => self.furniture_placements.iter().any(|p| p.id == id),
            PlacementKind::Zone => self.zones.iter().any(|p| p.id == id),
        }
    }

    #[must_use]
    pub fn table_placements(&self) -> &[TablePlacement] {
        &self.table_placements
    }

    #[must_use]
    pub fn furniture_placements(&self) -> &[FurniturePlacement] {
        &self.furniture_placements
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Placements on `floor_id` in draw order: zones, then furniture, then tables.
    #[must_use]
    pub fn placements_on_floor(&self, floor_id: FloorId) -> Vec<Placement> {
        let zones = self.zones.iter().filter(|z| z.floor_id == floor_id).cloned().map(Placement::Zone);
        let furniture = self
            .furniture_placements
            .iter()
            .filter(|f| f.floor_id == floor_id)
            .cloned()
            .map(Placement::Furniture);
        let tables = self
            .table_placements
            .iter()
            .filter(|t| t.floor_id == floor_id)
            .cloned()
            .map(Placement::Table);
        zones.chain(furniture).chain(tables).collect()
    }

    /// Placements on the active floor in draw order. Empty with no active floor.
    #[must_use]
    pub fn active_placements(&self) -> Vec<Placement> {
        self.active_floor_id.map(|id| self.placements_on_floor(id)).unwrap_or_default()
    }

    /// Replace every placement collection, e.g. after a load.
    pub fn load_layout(&mut self, layout: LayoutSnapshot) {
        self.table_placements = layout.table_placements;
        self.furniture_placements = layout.furniture_placements;
        self.zones = layout.zones;
        self.selection = None;
    }

    /// The whole placement state as a save payload.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            table_placements: self.table_placements.clone(),
            furniture_placements: self.furniture_placements.clone(),
            zones: self.zones.clone(),
        }
    }

    /// Interaction limits for a placement.
    #[must_use]
    pub fn constraints_for(&self, placement: &Placement) -> Constraints {
        self.catalog.constraints_for(placement)
    }

    // --- Selection-scoped commands ---

    /// The selected placement, if it still exists.
    #[must_use]
    pub fn selected_placement(&self) -> Option<Placement> {
        let sel = self.selection?;
        self.placement(sel.kind, sel.id)
    }

    /// Rotate the selection by one step, wrapping at 360°.
    ///
    /// Returns the updated placement, or `None` when nothing is selected or
    /// the selection is not rotatable.
    pub fn rotate_selected(&mut self) -> Option<Placement> {
        let item = self.selected_placement()?;
        if !self.constraints_for(&item).rotatable {
            debug!(id = %item.id(), "selection is not rotatable");
            return None;
        }
        let rotation = wrap_rotation(item.rotation() + ROTATE_STEP_DEG);
        let rotated = item.with_rotation(rotation);
        self.update_placement(rotated.clone());
        Some(rotated)
    }

    /// Swap a selected table between rectangle and circle.
    pub fn toggle_selected_shape(&mut self) -> Option<Placement> {
        let Some(Placement::Table(mut table)) = self.selected_placement() else {
            return None;
        };
        table.shape = table.shape.toggled();
        let toggled = Placement::Table(table);
        self.update_placement(toggled.clone());
        Some(toggled)
    }

    /// Remove the selected placement.
    pub fn delete_selected(&mut self) -> Option<Placement> {
        let sel = self.selection?;
        self.remove_placement(sel.kind, sel.id)
    }

    // --- Selection and tool mode ---

    pub fn set_selection(&mut self, id: PlacementId, kind: PlacementKind) {
        self.selection = Some(Selection::new(id, kind));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        if self.tool_mode != mode {
            debug!(from = ?self.tool_mode, to = ?mode, "tool mode changed");
        }
        self.tool_mode = mode;
    }

    #[must_use]
    pub fn tool_mode(&self) -> ToolMode {
        self.tool_mode
    }

    pub fn set_selected_furniture_type(&mut self, template_id: Option<TemplateId>) {
        self.selected_furniture_type = template_id;
    }

    #[must_use]
    pub fn selected_furniture_type(&self) -> Option<&str> {
        self.selected_furniture_type.as_deref()
    }

    // --- Gesture flags ---

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn set_resizing(&mut self, resizing: bool) {
        self.is_resizing = resizing;
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    // --- Floors ---

    pub fn set_floor_plan(&mut self, plan: Option<FloorPlan>) {
        self.floor_plan = plan;
    }

    #[must_use]
    pub fn floor_plan(&self) -> Option<&FloorPlan> {
        self.floor_plan.as_ref()
    }

    /// Replace all floors. The active floor becomes the first by `order`.
    pub fn load_floors(&mut self, mut floors: Vec<Floor>) {
        floors.sort_by_key(|f| f.order);
        self.active_floor_id = floors.first().map(|f| f.id);
        self.floors = floors;
        self.selection = None;
    }

    /// Append a floor, keeping tab order. Refused on duplicate id.
    pub fn add_floor(&mut self, floor: Floor) -> bool {
        if self.floor(floor.id).is_some() {
            return false;
        }
        info!(floor_id = %floor.id, name = %floor.name, "floor added");
        let at = self.floors.partition_point(|f| f.order <= floor.order);
        self.floors.insert(at, floor);
        true
    }

    /// Make `floor_id` the visible floor. Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFloor`] if no such floor exists.
    pub fn set_active_floor(&mut self, floor_id: FloorId) -> Result<(), EditorError> {
        if self.floor(floor_id).is_none() {
            return Err(EditorError::UnknownFloor(floor_id));
        }
        if self.active_floor_id != Some(floor_id) {
            self.selection = None;
            debug!(%floor_id, "active floor changed");
        }
        self.active_floor_id = Some(floor_id);
        Ok(())
    }

    /// Rename a floor.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EmptyFloorName`] for a blank name and
    /// [`EditorError::UnknownFloor`] if the floor does not exist.
    pub fn rename_floor(&mut self, floor_id: FloorId, name: &str) -> Result<(), EditorError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyFloorName);
        }
        let floor = self
            .floors
            .iter_mut()
            .find(|f| f.id == floor_id)
            .ok_or(EditorError::UnknownFloor(floor_id))?;
        floor.name = name.to_string();
        Ok(())
    }

    /// Remove a floor and every placement on it.
    pub fn remove_floor(&mut self, floor_id: FloorId) -> Option<Floor> {
        let floor = take_by_id(&mut self.floors, floor_id, |f| f.id)?;
        self.table_placements.retain(|p| p.floor_id != floor_id);
        let (gone, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.furniture_placements).into_iter().partition(|p| p.floor_id == floor_id);
        self.furniture_placements = kept;
        self.zones.retain(|z| z.floor_id != floor_id);
        for zone in &mut self.zones {
            zone.member_furniture_ids.retain(|m| !gone.iter().any(|g| g.id == *m));
        }
        if self.selection.is_some() && self.selected_placement().is_none() {
            self.selection = None;
        }
        if self.active_floor_id == Some(floor_id) {
            self.active_floor_id = self.floors.first().map(|f| f.id);
        }
        info!(%floor_id, "floor removed");
        Some(floor)
    }

    #[must_use]
    pub fn floor(&self, floor_id: FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == floor_id)
    }

    /// Floors in tab order.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[must_use]
    pub fn active_floor_id(&self) -> Option<FloorId> {
        self.active_floor_id
    }

    #[must_use]
    pub fn active_floor(&self) -> Option<&Floor> {
        self.active_floor_id.and_then(|id| self.floor(id))
    }

    // --- Tables ---

    pub fn set_tables(&mut self, tables: Vec<Table>) {
        self.tables = tables;
    }

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn table(&self, table_id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Whether any floor already shows this table.
    #[must_use]
    pub fn is_table_placed(&self, table_id: TableId) -> bool {
        self.table_placements.iter().any(|p| p.table_id == table_id)
    }

    /// First available table with no placement on any floor.
    #[must_use]
    pub fn next_available_table(&self) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.status == TableStatus::Available && !self.is_table_placed(t.id))
    }

    // --- Display preferences ---

    #[must_use]
    pub fn prefs(&self) -> DisplayPrefs {
        self.prefs
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.prefs.show_grid = show;
    }

    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.prefs.snap_to_grid = snap;
    }

    /// Set the grid pitch. Non-finite sizes and sizes below
    /// [`crate::consts::MIN_GRID_SIZE`] are ignored.
    pub fn set_grid_size(&mut self, size: f64) {
        if !is_valid_grid_size(size) {
            warn!(size, "rejected grid size");
            return;
        }
        self.prefs.grid_size = size;
    }

    /// Set the zoom level, clamped to the supported range. NaN is ignored.
    pub fn set_zoom_level(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        self.prefs.zoom_level = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom_level(self.prefs.zoom_level + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom_level(self.prefs.zoom_level - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.prefs.zoom_level = 1.0;
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::new(self.prefs.zoom_level)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

fn replace_by_id<T>(items: &mut [T], item: T, id_of: impl Fn(&T) -> PlacementId) -> bool {
    let id = id_of(&item);
    let Some(slot) = items.iter_mut().find(|p| id_of(p) == id) else {
        return false;
    };
    *slot = item;
    true
}

fn take_by_id<T>(items: &mut Vec<T>, id: PlacementId, id_of: impl Fn(&T) -> PlacementId) -> Option<T> {
    let index = items.iter().position(|p| id_of(p) == id)?;
    Some(items.remove(index))
}
