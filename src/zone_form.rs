//! Zone create/edit form.
//!
//! Zones are not click-placed. The host opens this form (blank, or seeded
//! from an existing zone), edits its fields, and submits it through
//! [`ZoneForm::apply`], which creates or updates the zone by id.

#[cfg(test)]
#[path = "zone_form_test.rs"]
mod zone_form_test;

use uuid::Uuid;

use crate::consts::{DEFAULT_MIN_DIMENSION, DEFAULT_ZONE_HEIGHT, DEFAULT_ZONE_OPACITY, DEFAULT_ZONE_WIDTH};
use crate::error::EditorError;
use crate::model::{Placement, PlacementId, PlacementKind, Zone, ZoneType};
use crate::store::EditorStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneForm {
    /// Zone being edited; `None` creates a new one.
    pub id: Option<PlacementId>,
    pub name: String,
    pub zone_type: ZoneType,
    /// CSS color; blank means the zone type's default.
    pub color: String,
    pub opacity: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ZoneForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            zone_type: ZoneType::default(),
            color: String::new(),
            opacity: DEFAULT_ZONE_OPACITY,
            width: DEFAULT_ZONE_WIDTH,
            height: DEFAULT_ZONE_HEIGHT,
        }
    }
}

impl ZoneForm {
    /// A blank form for a new zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form seeded from an existing zone.
    #[must_use]
    pub fn edit(zone: &Zone) -> Self {
        Self {
            id: Some(zone.id),
            name: zone.name.clone(),
            zone_type: zone.zone_type,
            color: zone.color.clone(),
            opacity: zone.opacity,
            width: zone.width,
            height: zone.height,
        }
    }

    /// # Errors
    ///
    /// Returns [`EditorError::InvalidZone`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::InvalidZone("name is required".into()));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(EditorError::InvalidZone("opacity must be between 0 and 1".into()));
        }
        if self.width < DEFAULT_MIN_DIMENSION || self.height < DEFAULT_MIN_DIMENSION {
            return Err(EditorError::InvalidZone(format!(
                "width and height must be at least {DEFAULT_MIN_DIMENSION}"
            )));
        }
        Ok(())
    }

    fn resolved_color(&self) -> String {
        let color = self.color.trim();
        if color.is_empty() { self.zone_type.default_color().to_string() } else { color.to_string() }
    }

    /// Create or update the zone in `store`. Returns the stored zone.
    ///
    /// Updates keep the zone's floor, position and members. New zones land at
    /// the active floor's origin.
    ///
    /// # Errors
    ///
    /// Validation errors, [`EditorError::NoActiveFloor`] when creating with
    /// no floor shown, or [`EditorError::InvalidZone`] when the store refuses
    /// the write.
    pub fn apply(&self, store: &mut EditorStore) -> Result<Placement, EditorError> {
        self.validate()?;
        let existing = self.id.and_then(|id| store.placement(PlacementKind::Zone, id));
        if let Some(Placement::Zone(zone)) = existing {
            let updated = Placement::Zone(Zone {
                name: self.name.trim().to_string(),
                zone_type: self.zone_type,
                color: self.resolved_color(),
                opacity: self.opacity,
                width: self.width,
                height: self.height,
                ..zone
            });
            if !store.update_placement(updated.clone()) {
                return Err(EditorError::InvalidZone("zone could not be updated".into()));
            }
            return Ok(updated);
        }

        let floor_id = store.active_floor_id().ok_or(EditorError::NoActiveFloor)?;
        let zone = Placement::Zone(Zone {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            floor_id,
            name: self.name.trim().to_string(),
            zone_type: self.zone_type,
            color: self.resolved_color(),
            opacity: self.opacity,
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
            member_furniture_ids: Vec::new(),
        });
        if !store.add_placement(zone.clone()) {
            return Err(EditorError::InvalidZone("zone could not be added".into()));
        }
        Ok(zone)
    }
}
