//! Async orchestration against the external collaborators.
//!
//! DESIGN
//! ======
//! These are the only suspension points in the editor: the initial load,
//! floor creation, and save. Gestures never await.
//!
//! ERROR HANDLING
//! ==============
//! Load failures never abort the editor. Each failed fetch becomes a
//! notification and leaves its collection empty, so the canvas shows what
//! did load. Save returns a notification either way.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use futures::future::join_all;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::EditorError;
use crate::model::{Floor, FloorId, LayoutSnapshot, Placement};
use crate::notify::Notification;
use crate::services::{FloorPlanService, LayoutPersistence, NewFloor, ServiceError};
use crate::store::{DisplayPrefs, EditorStore};

/// A freshly loaded store plus whatever went wrong on the way.
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: EditorStore,
    pub notifications: Vec<Notification>,
}

/// Load the first floor plan, its floors, tables and every floor's layout.
///
/// Floor layouts are fetched concurrently and flattened into the store. The
/// first floor by `order` becomes active.
pub async fn load_editor(service: &dyn FloorPlanService, catalog: Catalog, prefs: DisplayPrefs) -> LoadOutcome {
    let mut store = EditorStore::new(catalog, prefs);
    let mut notifications = Vec::new();

    let (plans, tables) = futures::join!(service.fetch_floor_plans(), service.fetch_tables());

    match tables {
        Ok(tables) => store.set_tables(tables),
        Err(e) => {
            warn!(error = %e, "failed to load tables");
            notifications.push(Notification::error(format!("Failed to load tables: {e}")));
        }
    }

    let plan = match plans {
        Ok(plans) => plans.into_iter().next(),
        Err(e) => {
            warn!(error = %e, "failed to load floor plans");
            notifications.push(Notification::error(format!("Failed to load floor plans: {e}")));
            return LoadOutcome { store, notifications };
        }
    };
    let Some(plan) = plan else {
        notifications.push(Notification::info("No floor plan found"));
        return LoadOutcome { store, notifications };
    };

    let floors = match service.fetch_floors(plan.id).await {
        Ok(floors) => floors,
        Err(e) => {
            warn!(error = %e, floor_plan_id = %plan.id, "failed to load floors");
            notifications.push(Notification::error(format!("Failed to load floors: {e}")));
            store.set_floor_plan(Some(plan));
            return LoadOutcome { store, notifications };
        }
    };
    store.set_floor_plan(Some(plan));
    store.load_floors(floors);

    let floor_ids: Vec<FloorId> = store.floors().iter().map(|f| f.id).collect();
    let layouts = join_all(floor_ids.iter().map(|&id| load_floor_layout(service, id))).await;

    let mut dropped = 0usize;
    for (floor_id, load) in floor_ids.iter().zip(layouts) {
        for (what, e) in load.failures {
            warn!(error = %e, %floor_id, what, "failed to load floor layout");
            notifications.push(Notification::error(format!("Failed to load {what}: {e}")));
        }
        let layout = load.layout;
        let placements = layout
            .zones
            .into_iter()
            .map(Placement::Zone)
            .chain(layout.furniture_placements.into_iter().map(Placement::Furniture))
            .chain(layout.table_placements.into_iter().map(Placement::Table));
        for placement in placements {
            if !store.add_placement(placement) {
                dropped += 1;
            }
        }
    }
    if dropped > 0 {
        warn!(dropped, "ignored conflicting placements from backend");
    }

    info!(
        floors = store.floors().len(),
        tables = store.tables().len(),
        placements = store.table_placements().len() + store.furniture_placements().len() + store.zones().len(),
        "floor plan loaded"
    );
    LoadOutcome { store, notifications }
}

/// What loaded for one floor. Each collection fails on its own.
struct FloorLoad {
    layout: LayoutSnapshot,
    failures: Vec<(&'static str, ServiceError)>,
}

async fn load_floor_layout(service: &dyn FloorPlanService, floor_id: FloorId) -> FloorLoad {
    let (tables, furniture, zones) = futures::join!(
        service.fetch_table_positions(floor_id),
        service.fetch_furniture_positions(floor_id),
        service.fetch_zones(floor_id),
    );
    let mut failures = Vec::new();
    let layout = LayoutSnapshot {
        table_placements: or_record("table positions", tables, &mut failures),
        furniture_placements: or_record("furniture positions", furniture, &mut failures),
        zones: or_record("zones", zones, &mut failures),
    };
    FloorLoad { layout, failures }
}

fn or_record<T>(
    what: &'static str,
    result: Result<Vec<T>, ServiceError>,
    failures: &mut Vec<(&'static str, ServiceError)>,
) -> Vec<T> {
    result.unwrap_or_else(|e| {
        failures.push((what, e));
        Vec::new()
    })
}

/// Create a floor at the end of the tab list and make it active.
///
/// # Errors
///
/// [`EditorError::EmptyFloorName`] for a blank name,
/// [`EditorError::NoFloorPlan`] before a plan is loaded, or the service error.
pub async fn create_floor(
    service: &dyn FloorPlanService,
    store: &mut EditorStore,
    name: &str,
) -> Result<Floor, EditorError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditorError::EmptyFloorName);
    }
    let floor_plan_id = store.floor_plan().map(|p| p.id).ok_or(EditorError::NoFloorPlan)?;
    let order = store.floors().iter().map(|f| f.order + 1).max().unwrap_or(0);
    let request = NewFloor { name: name.to_string(), floor_plan_id, order };

    let floor = service.create_floor(&request).await?;
    store.add_floor(floor.clone());
    store.set_active_floor(floor.id)?;
    info!(floor_id = %floor.id, name = %floor.name, "floor created");
    Ok(floor)
}

/// Persist the whole layout and report the outcome.
pub async fn save_layout(persistence: &dyn LayoutPersistence, layout: &LayoutSnapshot) -> Notification {
    match persistence.save_layout(layout).await {
        Ok(()) => {
            info!(placements = layout.len(), "layout saved");
            Notification::success("Layout saved")
        }
        Err(e) => {
            warn!(error = %e, "failed to save layout");
            Notification::error(format!("Failed to save layout: {e}"))
        }
    }
}
