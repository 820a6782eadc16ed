//! Floor tabs and the furniture library.
//!
//! Both feed the store: the floor selector switches the active floor and
//! collects the name for a new one; the library turns a template pick into
//! `add_furniture` mode. Creating the floor itself is an async call, see
//! [`crate::session::create_floor`].

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use tracing::debug;

use crate::catalog::{Catalog, FurnitureCategory, FurnitureTemplate};
use crate::error::EditorError;
use crate::input::ToolMode;
use crate::model::FloorId;
use crate::store::EditorStore;

// =============================================================================
// FLOOR SELECTOR
// =============================================================================

/// One floor button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorTab {
    pub id: FloorId,
    pub name: String,
    pub active: bool,
}

/// Floor buttons in tab order, with the active one flagged.
#[must_use]
pub fn floor_tabs(store: &EditorStore) -> Vec<FloorTab> {
    let active = store.active_floor_id();
    store
        .floors()
        .iter()
        .map(|f| FloorTab { id: f.id, name: f.name.clone(), active: Some(f.id) == active })
        .collect()
}

/// State of the "Add Floor" name dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorSelector {
    dialog_open: bool,
    name: String,
}

impl FloorSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
        self.name.clear();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog_open = false;
        self.name.clear();
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate and take the entered name, closing the dialog.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EmptyFloorName`] for a blank name; the dialog
    /// stays open.
    pub fn submit(&mut self) -> Result<String, EditorError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyFloorName);
        }
        let name = name.to_string();
        self.cancel_dialog();
        Ok(name)
    }

    /// Switch the visible floor.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFloor`] if the floor does not exist.
    pub fn select_floor(&self, store: &mut EditorStore, floor_id: FloorId) -> Result<(), EditorError> {
        store.set_active_floor(floor_id)
    }
}

// =============================================================================
// FURNITURE LIBRARY
// =============================================================================

/// One category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryTab {
    pub category: FurnitureCategory,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

/// Tabbed template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FurnitureLibrary {
    active_category: FurnitureCategory,
}

impl Default for FurnitureLibrary {
    fn default() -> Self {
        Self { active_category: FurnitureCategory::Seating }
    }
}

impl FurnitureLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: FurnitureCategory) {
        self.active_category = category;
    }

    #[must_use]
    pub fn active_category(&self) -> FurnitureCategory {
        self.active_category
    }

    #[must_use]
    pub fn tabs(&self, catalog: &Catalog) -> Vec<LibraryTab> {
        FurnitureCategory::ALL
            .iter()
            .map(|&category| LibraryTab {
                category,
                label: category.label(),
                count: catalog.by_category(category).len(),
                active: category == self.active_category,
            })
            .collect()
    }

    /// Templates under the active tab.
    #[must_use]
    pub fn entries<'a>(&self, catalog: &'a Catalog) -> Vec<&'a FurnitureTemplate> {
        catalog.by_category(self.active_category)
    }

    /// Choose a template: remembers it and enters `add_furniture` mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownTemplate`] if the catalog lacks the id.
    pub fn select(&self, store: &mut EditorStore, template_id: &str) -> Result<(), EditorError> {
        if store.catalog().get(template_id).is_none() {
            return Err(EditorError::UnknownTemplate(template_id.to_string()));
        }
        debug!(template_id, "furniture template selected");
        store.set_selected_furniture_type(Some(template_id.to_string()));
        store.set_tool_mode(ToolMode::AddFurniture);
        Ok(())
    }
}
