//! Editor surface: the canvas and its toolbar.
//!
//! DESIGN
//! ======
//! `EditorSurface` owns the [`EditorStore`] and one [`PlacementController`]
//! per placement that has received a pointer-down. The host forwards raw
//! pointer events in screen coordinates; the surface converts them to world
//! coordinates, hit-tests the active floor, and routes them. Pointer-up is
//! expected from a document-level listener so a release outside the canvas
//! still ends the gesture.
//!
//! Every handler is synchronous and returns the [`Action`]s the host should
//! act on: repaint, show a toast, persist a layout.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::consts::{DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH};
use crate::controller::PlacementController;
use crate::error::EditorError;
use crate::geometry::{Point, clamp_dimension};
use crate::hit::{Hit, hit_test};
use crate::input::{Button, Key, Selection, ToolMode};
use crate::model::{
    FurniturePlacement, LayoutSnapshot, Placement, PlacementId, PlacementKind, TablePlacement, TableShape,
};
use crate::notify::Notification;
use crate::render::{Scene, build_scene};
use crate::store::EditorStore;
use crate::zone_form::ZoneForm;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlacementCreated(Placement),
    PlacementUpdated(Placement),
    PlacementDeleted { id: PlacementId, kind: PlacementKind },
    SelectionChanged(Option<Selection>),
    ToolModeChanged(ToolMode),
    Notify(Notification),
    /// Show the zone form, blank or seeded from the selected zone.
    OpenZoneForm(ZoneForm),
    /// Hand this payload to the persistence collaborator.
    SaveRequested(LayoutSnapshot),
    RenderNeeded,
}

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    Select,
    Resize,
    AddTable,
    AddFurniture,
    AddZone,
    Delete,
    Simulate,
    Rotate,
    ToggleShape,
    ToggleGrid,
    ToggleSnap,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Save,
}

pub struct EditorSurface {
    store: EditorStore,
    controllers: HashMap<PlacementId, PlacementController>,
    /// Placement whose controller is running a gesture.
    active: Option<PlacementId>,
    /// Set once the active gesture has written an update; swallows the trailing click.
    moved: bool,
}

impl EditorSurface {
    #[must_use]
    pub fn new(store: EditorStore) -> Self {
        Self { store, controllers: HashMap::new(), active: None, moved: false }
    }

    #[must_use]
    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    /// Mutable access for the floor selector, library and session calls.
    pub fn store_mut(&mut self) -> &mut EditorStore {
        &mut self.store
    }

    /// Draw list for a `width` × `height` world area.
    #[must_use]
    pub fn scene(&self, width: f64, height: f64) -> Scene {
        build_scene(&self.store, width, height)
    }

    fn hit_at(&self, screen_pt: Point) -> (Point, Option<Hit>) {
        let camera = self.store.camera();
        let world = camera.screen_to_world(screen_pt);
        (world, hit_test(world, &self.store.active_placements(), &camera))
    }

    // --- Pointer events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.store.tool_mode() == ToolMode::Simulate {
            return vec![];
        }
        let (world, Some(hit)) = self.hit_at(screen_pt) else {
            return vec![];
        };
        let controller = self
            .controllers
            .entry(hit.id)
            .or_insert_with(|| PlacementController::new(hit.id, hit.kind));
        if !controller.pointer_down(&mut self.store, world, hit.part) {
            return vec![];
        }
        self.active = Some(hit.id);
        self.moved = false;
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(id) = self.active else {
            return vec![];
        };
        let world = self.store.camera().screen_to_world(screen_pt);
        let Some(controller) = self.controllers.get_mut(&id) else {
            return vec![];
        };
        match controller.pointer_move(&mut self.store, world) {
            Some(updated) => {
                self.moved = true;
                vec![Action::PlacementUpdated(updated), Action::RenderNeeded]
            }
            None => vec![],
        }
    }

    /// End any gesture. Safe to call when nothing is active.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let Some(id) = self.active.take() else {
            return vec![];
        };
        if let Some(controller) = self.controllers.get_mut(&id) {
            controller.pointer_up(&mut self.store);
        }
        // The placement may have vanished mid-gesture; never leave a flag stuck.
        self.store.set_dragging(false);
        self.store.set_resizing(false);
        vec![Action::RenderNeeded]
    }

    /// A click (pointer-down and up without movement) at `screen_pt`.
    pub fn on_click(&mut self, screen_pt: Point) -> Vec<Action> {
        if std::mem::take(&mut self.moved) {
            return vec![];
        }
        let mode = self.store.tool_mode();
        if mode == ToolMode::Simulate {
            return vec![];
        }
        let (world, hit) = self.hit_at(screen_pt);
        match (hit, mode) {
            (Some(hit), ToolMode::Delete) if self.store.selection().is_some_and(|s| s.id == hit.id) => {
                let mut actions = self.delete(hit.kind, hit.id);
                self.store.set_tool_mode(ToolMode::Select);
                actions.push(Action::ToolModeChanged(ToolMode::Select));
                actions
            }
            (Some(hit), _) => {
                self.store.set_selection(hit.id, hit.kind);
                vec![Action::SelectionChanged(self.store.selection()), Action::RenderNeeded]
            }
            (None, ToolMode::AddTable) => Self::placed(self.place_table_at(world)),
            (None, ToolMode::AddFurniture) => Self::placed(self.place_furniture_at(world)),
            (None, ToolMode::Select) if self.store.selection().is_some() => {
                self.store.clear_selection();
                vec![Action::SelectionChanged(None), Action::RenderNeeded]
            }
            _ => vec![],
        }
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_delete() || self.active.is_some() {
            return vec![];
        }
        match self.store.selection() {
            Some(sel) => self.delete(sel.kind, sel.id),
            None => vec![],
        }
    }

    // --- Toolbar ---

    pub fn command(&mut self, command: ToolbarCommand) -> Vec<Action> {
        match command {
            ToolbarCommand::Select => self.switch_mode(ToolMode::Select),
            ToolbarCommand::Resize => self.switch_mode(ToolMode::Resize),
            ToolbarCommand::AddTable => self.switch_mode(ToolMode::AddTable),
            ToolbarCommand::Delete => self.switch_mode(ToolMode::Delete),
            ToolbarCommand::Simulate => self.switch_mode(ToolMode::Simulate),
            ToolbarCommand::AddFurniture => {
                if self.store.selected_furniture_type().is_none() {
                    return vec![Action::Notify(EditorError::NoFurnitureTemplate.into())];
                }
                self.switch_mode(ToolMode::AddFurniture)
            }
            ToolbarCommand::AddZone => {
                let form = match self.store.selected_placement() {
                    Some(Placement::Zone(zone)) => ZoneForm::edit(&zone),
                    _ => ZoneForm::new(),
                };
                let mut actions = self.switch_mode(ToolMode::AddZone);
                actions.push(Action::OpenZoneForm(form));
                actions
            }
            ToolbarCommand::Rotate => Self::updated(self.store.rotate_selected()),
            ToolbarCommand::ToggleShape => Self::updated(self.store.toggle_selected_shape()),
            ToolbarCommand::ToggleGrid => {
                let show = !self.store.prefs().show_grid;
                self.store.set_show_grid(show);
                vec![Action::RenderNeeded]
            }
            ToolbarCommand::ToggleSnap => {
                let snap = !self.store.prefs().snap_to_grid;
                self.store.set_snap_to_grid(snap);
                vec![]
            }
            ToolbarCommand::ZoomIn => {
                self.store.zoom_in();
                vec![Action::RenderNeeded]
            }
            ToolbarCommand::ZoomOut => {
                self.store.zoom_out();
                vec![Action::RenderNeeded]
            }
            ToolbarCommand::ResetZoom => {
                self.store.reset_zoom();
                vec![Action::RenderNeeded]
            }
            ToolbarCommand::Save => vec![Action::SaveRequested(self.store.snapshot())],
        }
    }

    /// Submit the zone form: create or update the zone, select it, return to `select`.
    pub fn submit_zone_form(&mut self, form: &ZoneForm) -> Vec<Action> {
        let existed = form.id.is_some_and(|id| self.store.contains(PlacementKind::Zone, id));
        match form.apply(&mut self.store) {
            Ok(zone) => {
                self.store.set_selection(zone.id(), PlacementKind::Zone);
                self.store.set_tool_mode(ToolMode::Select);
                let change = if existed { Action::PlacementUpdated(zone) } else { Action::PlacementCreated(zone) };
                vec![
                    change,
                    Action::SelectionChanged(self.store.selection()),
                    Action::ToolModeChanged(ToolMode::Select),
                    Action::RenderNeeded,
                ]
            }
            Err(err) => vec![Action::Notify(err.into())],
        }
    }

    // --- Add flows ---

    /// Place the first unplaced available table with its origin at `world`.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoActiveFloor`] or [`EditorError::NoAvailableTables`];
    /// state is unchanged in both cases.
    pub fn place_table_at(&mut self, world: Point) -> Result<Placement, EditorError> {
        let floor_id = self.store.active_floor_id().ok_or(EditorError::NoActiveFloor)?;
        let table = self.store.next_available_table().ok_or(EditorError::NoAvailableTables)?;
        let placement = Placement::Table(TablePlacement {
            id: Uuid::new_v4(),
            table_id: table.id,
            floor_id,
            x: world.x.max(0.0),
            y: world.y.max(0.0),
            width: DEFAULT_TABLE_WIDTH,
            height: DEFAULT_TABLE_HEIGHT,
            rotation: 0.0,
            shape: TableShape::Rectangle,
        });
        self.finish_placement(placement)
    }

    /// Place the chosen furniture template with its origin at `world`.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoFurnitureTemplate`], [`EditorError::UnknownTemplate`]
    /// or [`EditorError::NoActiveFloor`]; state is unchanged in all cases.
    pub fn place_furniture_at(&mut self, world: Point) -> Result<Placement, EditorError> {
        let template_id = self.store.selected_furniture_type().ok_or(EditorError::NoFurnitureTemplate)?;
        let template = self
            .store
            .catalog()
            .get(template_id)
            .ok_or_else(|| EditorError::UnknownTemplate(template_id.to_string()))?;
        let floor_id = self.store.active_floor_id().ok_or(EditorError::NoActiveFloor)?;
        let limits = template.constraints();
        let placement = Placement::Furniture(FurniturePlacement {
            id: Uuid::new_v4(),
            furniture_template_id: template.id.clone(),
            floor_id,
            x: world.x.max(0.0),
            y: world.y.max(0.0),
            width: clamp_dimension(template.default_width, limits.min_width, limits.max_width),
            height: clamp_dimension(template.default_height, limits.min_height, limits.max_height),
            rotation: 0.0,
            capacity: template.capacity,
        });
        self.finish_placement(placement)
    }

    fn finish_placement(&mut self, placement: Placement) -> Result<Placement, EditorError> {
        if let Placement::Table(t) = &placement {
            if self.store.is_table_placed(t.table_id) {
                return Err(EditorError::TableAlreadyPlaced(t.table_id));
            }
        }
        if !self.store.add_placement(placement.clone()) {
            return Err(EditorError::UnknownFloor(placement.floor_id()));
        }
        self.store.set_selection(placement.id(), placement.kind());
        self.store.set_tool_mode(ToolMode::Select);
        Ok(placement)
    }

    // --- Helpers ---

    fn placed(result: Result<Placement, EditorError>) -> Vec<Action> {
        match result {
            Ok(placement) => vec![
                Action::SelectionChanged(Some(Selection::new(placement.id(), placement.kind()))),
                Action::PlacementCreated(placement),
                Action::ToolModeChanged(ToolMode::Select),
                Action::RenderNeeded,
            ],
            Err(err) => {
                debug!(%err, "placement refused");
                vec![Action::Notify(err.into())]
            }
        }
    }

    fn updated(placement: Option<Placement>) -> Vec<Action> {
        match placement {
            Some(p) => vec![Action::PlacementUpdated(p), Action::RenderNeeded],
            None => vec![],
        }
    }

    fn switch_mode(&mut self, mode: ToolMode) -> Vec<Action> {
        self.store.set_tool_mode(mode);
        vec![Action::ToolModeChanged(mode)]
    }

    fn delete(&mut self, kind: PlacementKind, id: PlacementId) -> Vec<Action> {
        if self.store.remove_placement(kind, id).is_none() {
            return vec![];
        }
        self.controllers.remove(&id);
        vec![Action::PlacementDeleted { id, kind }, Action::SelectionChanged(None), Action::RenderNeeded]
    }
}
