//! Fixtures shared by unit tests.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::model::{
    Floor, FloorId, FurniturePlacement, Placement, Table, TableId, TablePlacement, TableShape, TableStatus, Zone,
    ZoneType,
};
use crate::store::{DisplayPrefs, EditorStore};

pub(crate) fn floor(order: u32) -> Floor {
    Floor { id: Uuid::new_v4(), name: format!("Floor {order}"), floor_plan_id: Uuid::new_v4(), order }
}

pub(crate) fn table(name: &str, status: TableStatus) -> Table {
    Table { id: Uuid::new_v4(), name: name.to_string(), capacity: 4, status }
}

pub(crate) fn table_placement(floor_id: FloorId, table_id: TableId, x: f64, y: f64) -> Placement {
    Placement::Table(TablePlacement {
        id: Uuid::new_v4(),
        table_id,
        floor_id,
        x,
        y,
        width: 100.0,
        height: 80.0,
        rotation: 0.0,
        shape: TableShape::Rectangle,
    })
}

pub(crate) fn furniture(floor_id: FloorId, template_id: &str, x: f64, y: f64) -> Placement {
    Placement::Furniture(FurniturePlacement {
        id: Uuid::new_v4(),
        furniture_template_id: template_id.to_string(),
        floor_id,
        x,
        y,
        width: 60.0,
        height: 60.0,
        rotation: 0.0,
        capacity: None,
    })
}

pub(crate) fn zone(floor_id: FloorId, x: f64, y: f64, width: f64, height: f64) -> Placement {
    Placement::Zone(Zone {
        id: Uuid::new_v4(),
        floor_id,
        name: "Zone".into(),
        zone_type: ZoneType::Dining,
        color: "#3B82F6".into(),
        opacity: 0.3,
        x,
        y,
        width,
        height,
        member_furniture_ids: vec![],
    })
}

/// Store with the builtin catalog, default prefs, and one active floor.
pub(crate) fn store_with_floor() -> (EditorStore, FloorId) {
    let mut store = EditorStore::new(Catalog::builtin(), DisplayPrefs::default());
    let f = floor(0);
    let id = f.id;
    store.load_floors(vec![f]);
    (store, id)
}
