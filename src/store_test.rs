#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::consts::MIN_GRID_SIZE;
use crate::model::TableShape;
use crate::test_helpers::{floor, furniture, store_with_floor, table, table_placement, zone};

// =============================================================
// add / update / remove
// =============================================================

#[test]
fn add_placement_appends() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 10.0, 10.0);
    assert!(store.add_placement(p.clone()));
    assert_eq!(store.table_placements().len(), 1);
    assert_eq!(store.placement(PlacementKind::Table, p.id()), Some(p));
}

#[test]
fn add_placement_ignores_id_collision() {
    let (mut store, floor_id) = store_with_floor();
    let p = zone(floor_id, 0.0, 0.0, 100.0, 100.0);
    assert!(store.add_placement(p.clone()));
    assert!(!store.add_placement(p));
    assert_eq!(store.zones().len(), 1);
}

#[test]
fn add_placement_rejects_unknown_floor() {
    let (mut store, _) = store_with_floor();
    assert!(!store.add_placement(furniture(Uuid::new_v4(), "chair", 0.0, 0.0)));
    assert!(store.furniture_placements().is_empty());
}

#[test]
fn add_placement_refuses_second_placement_of_same_table() {
    let (mut store, floor_id) = store_with_floor();
    let second_floor = floor(1);
    let second_id = second_floor.id;
    store.add_floor(second_floor);
    let table_id = Uuid::new_v4();
    assert!(store.add_placement(table_placement(floor_id, table_id, 0.0, 0.0)));
    assert!(!store.add_placement(table_placement(second_id, table_id, 0.0, 0.0)));
    assert_eq!(store.table_placements().len(), 1);
}

#[test]
fn add_placement_wraps_rotation() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0).with_rotation(405.0);
    store.add_placement(p.clone());
    assert_eq!(store.placement(PlacementKind::Table, p.id()).map(|p| p.rotation()), Some(45.0));
}

#[test]
fn update_placement_replaces_by_id() {
    let (mut store, floor_id) = store_with_floor();
    let p = furniture(floor_id, "sofa", 0.0, 0.0);
    store.add_placement(p.clone());
    let moved = p.clone().with_position(40.0, 60.0);
    assert!(store.update_placement(moved.clone()));
    assert_eq!(store.placement(PlacementKind::Furniture, p.id()), Some(moved));
}

#[test]
fn update_placement_missing_id_is_noop() {
    let (mut store, floor_id) = store_with_floor();
    let kept = table_placement(floor_id, Uuid::new_v4(), 5.0, 5.0);
    store.add_placement(kept);
    let before = store.table_placements().to_vec();
    let stranger = table_placement(floor_id, Uuid::new_v4(), 99.0, 99.0);
    assert!(!store.update_placement(stranger));
    assert_eq!(store.table_placements(), before.as_slice());
}

#[test]
fn remove_placement_missing_id_is_noop() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(zone(floor_id, 0.0, 0.0, 100.0, 100.0));
    let before = store.zones().to_vec();
    assert!(store.remove_placement(PlacementKind::Zone, Uuid::new_v4()).is_none());
    assert_eq!(store.zones(), before.as_slice());
}

#[test]
fn remove_placement_clears_matching_selection() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(p.clone());
    store.set_selection(p.id(), PlacementKind::Table);
    assert_eq!(store.remove_placement(PlacementKind::Table, p.id()), Some(p));
    assert!(store.selection().is_none());
}

#[test]
fn remove_furniture_drops_zone_membership() {
    let (mut store, floor_id) = store_with_floor();
    let chair = furniture(floor_id, "chair", 0.0, 0.0);
    let Placement::Zone(mut z) = zone(floor_id, 0.0, 0.0, 200.0, 200.0) else {
        panic!("fixture is a zone");
    };
    z.member_furniture_ids.push(chair.id());
    store.add_placement(chair.clone());
    store.add_placement(Placement::Zone(z));
    store.remove_placement(PlacementKind::Furniture, chair.id());
    assert!(store.zones()[0].member_furniture_ids.is_empty());
}

// =============================================================
// Draw order
// =============================================================

#[test]
fn placements_on_floor_orders_zones_furniture_tables() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0));
    store.add_placement(furniture(floor_id, "chair", 0.0, 0.0));
    store.add_placement(zone(floor_id, 0.0, 0.0, 100.0, 100.0));
    let kinds: Vec<_> = store.placements_on_floor(floor_id).iter().map(Placement::kind).collect();
    assert_eq!(kinds, vec![PlacementKind::Zone, PlacementKind::Furniture, PlacementKind::Table]);
}

#[test]
fn active_placements_only_show_active_floor() {
    let (mut store, floor_id) = store_with_floor();
    let other = floor(1);
    let other_id = other.id;
    store.add_floor(other);
    store.add_placement(table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0));
    store.add_placement(table_placement(other_id, Uuid::new_v4(), 0.0, 0.0));
    assert_eq!(store.active_placements().len(), 1);
    store.set_active_floor(other_id).unwrap();
    assert_eq!(store.active_placements()[0].floor_id(), other_id);
}

// =============================================================
// Rotate / shape / delete
// =============================================================

#[test]
fn rotate_selected_steps_and_wraps() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(p.clone());
    store.set_selection(p.id(), PlacementKind::Table);
    assert_eq!(store.rotate_selected().map(|p| p.rotation()), Some(45.0));
    for _ in 0..7 {
        store.rotate_selected();
    }
    assert_eq!(store.selected_placement().map(|p| p.rotation()), Some(0.0));
}

#[test]
fn rotate_respects_template_flag() {
    let (mut store, floor_id) = store_with_floor();
    let stool = furniture(floor_id, "bar-stool", 0.0, 0.0);
    store.add_placement(stool.clone());
    store.set_selection(stool.id(), PlacementKind::Furniture);
    assert!(store.rotate_selected().is_none());
    assert_eq!(store.selected_placement().map(|p| p.rotation()), Some(0.0));
}

#[test]
fn rotate_zone_is_refused() {
    let (mut store, floor_id) = store_with_floor();
    let z = zone(floor_id, 0.0, 0.0, 100.0, 100.0);
    store.add_placement(z.clone());
    store.set_selection(z.id(), PlacementKind::Zone);
    assert!(store.rotate_selected().is_none());
}

#[test]
fn rotate_without_selection_is_none() {
    let (mut store, _) = store_with_floor();
    assert!(store.rotate_selected().is_none());
}

#[test]
fn toggle_shape_keeps_dimensions() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(p.clone());
    store.set_selection(p.id(), PlacementKind::Table);
    let Some(Placement::Table(t)) = store.toggle_selected_shape() else {
        panic!("expected table");
    };
    assert_eq!(t.shape, TableShape::Circle);
    assert_eq!((t.width, t.height), (100.0, 80.0));
}

#[test]
fn toggle_shape_ignores_furniture() {
    let (mut store, floor_id) = store_with_floor();
    let f = furniture(floor_id, "chair", 0.0, 0.0);
    store.add_placement(f.clone());
    store.set_selection(f.id(), PlacementKind::Furniture);
    assert!(store.toggle_selected_shape().is_none());
}

#[test]
fn delete_selected_removes_and_clears() {
    let (mut store, floor_id) = store_with_floor();
    let f = furniture(floor_id, "plant", 0.0, 0.0);
    store.add_placement(f.clone());
    store.set_selection(f.id(), PlacementKind::Furniture);
    assert_eq!(store.delete_selected().map(|p| p.id()), Some(f.id()));
    assert!(store.furniture_placements().is_empty());
    assert!(store.selection().is_none());
}

// =============================================================
// Tables
// =============================================================

#[test]
fn next_available_table_skips_unavailable_and_placed() {
    let (mut store, floor_id) = store_with_floor();
    let busy = table("T1", TableStatus::Occupied);
    let placed = table("T2", TableStatus::Available);
    let free = table("T3", TableStatus::Available);
    let free_id = free.id;
    store.add_placement(table_placement(floor_id, placed.id, 0.0, 0.0));
    store.set_tables(vec![busy, placed, free]);
    assert_eq!(store.next_available_table().map(|t| t.id), Some(free_id));
}

#[test]
fn next_available_table_none_when_all_taken() {
    let (mut store, _) = store_with_floor();
    store.set_tables(vec![table("T1", TableStatus::Reserved), table("T2", TableStatus::Cleaning)]);
    assert!(store.next_available_table().is_none());
}

// =============================================================
// Floors
// =============================================================

#[test]
fn load_floors_sorts_and_activates_first() {
    let mut store = EditorStore::default();
    let second = floor(2);
    let first = floor(1);
    let first_id = first.id;
    store.load_floors(vec![second, first]);
    assert_eq!(store.floors()[0].id, first_id);
    assert_eq!(store.active_floor_id(), Some(first_id));
}

#[test]
fn add_floor_keeps_order() {
    let (mut store, _) = store_with_floor();
    let late = floor(5);
    let mid = floor(3);
    let mid_id = mid.id;
    store.add_floor(late);
    store.add_floor(mid);
    assert_eq!(store.floors()[1].id, mid_id);
    assert_eq!(store.floors().len(), 3);
}

#[test]
fn set_active_floor_unknown_errors() {
    let (mut store, floor_id) = store_with_floor();
    let err = store.set_active_floor(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, EditorError::UnknownFloor(_)));
    assert_eq!(store.active_floor_id(), Some(floor_id));
}

#[test]
fn switching_floor_clears_selection() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(p.clone());
    store.set_selection(p.id(), PlacementKind::Table);
    let other = floor(1);
    let other_id = other.id;
    store.add_floor(other);
    store.set_active_floor(other_id).unwrap();
    assert!(store.selection().is_none());
}

#[test]
fn rename_floor_trims_and_validates() {
    let (mut store, floor_id) = store_with_floor();
    store.rename_floor(floor_id, "  Mezzanine ").unwrap();
    assert_eq!(store.floor(floor_id).map(|f| f.name.as_str()), Some("Mezzanine"));
    assert!(matches!(store.rename_floor(floor_id, "   "), Err(EditorError::EmptyFloorName)));
}

#[test]
fn remove_floor_cascades_placements() {
    let (mut store, floor_id) = store_with_floor();
    let other = floor(1);
    let other_id = other.id;
    store.add_floor(other);
    let doomed = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(doomed.clone());
    store.add_placement(furniture(floor_id, "chair", 0.0, 0.0));
    store.add_placement(zone(floor_id, 0.0, 0.0, 100.0, 100.0));
    let survivor = table_placement(other_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(survivor.clone());
    store.set_selection(doomed.id(), PlacementKind::Table);

    assert!(store.remove_floor(floor_id).is_some());
    assert_eq!(store.table_placements().len(), 1);
    assert_eq!(store.table_placements()[0].id, survivor.id());
    assert!(store.furniture_placements().is_empty());
    assert!(store.zones().is_empty());
    assert!(store.selection().is_none());
    assert_eq!(store.active_floor_id(), Some(other_id));
}

// =============================================================
// Preferences
// =============================================================

#[test]
fn grid_size_ignores_non_positive() {
    let (mut store, _) = store_with_floor();
    store.set_grid_size(0.0);
    assert_eq!(store.prefs().grid_size, DEFAULT_GRID_SIZE);
    store.set_grid_size(25.0);
    assert_eq!(store.prefs().grid_size, 25.0);
}

#[test]
fn grid_size_rejects_non_finite_and_tiny() {
    let (mut store, _) = store_with_floor();
    for bad in [f64::INFINITY, f64::NAN, 1e-6, MIN_GRID_SIZE / 2.0] {
        store.set_grid_size(bad);
        assert_eq!(store.prefs().grid_size, DEFAULT_GRID_SIZE, "accepted {bad}");
    }
    store.set_grid_size(MIN_GRID_SIZE);
    assert_eq!(store.prefs().grid_size, MIN_GRID_SIZE);
}

#[test]
fn new_sanitizes_prefs() {
    let prefs = DisplayPrefs { grid_size: f64::INFINITY, zoom_level: 50.0, ..DisplayPrefs::default() };
    let store = EditorStore::new(Catalog::builtin(), prefs);
    assert_eq!(store.prefs().grid_size, DEFAULT_GRID_SIZE);
    assert_eq!(store.prefs().zoom_level, MAX_ZOOM);
}

#[test]
fn nan_zoom_is_ignored() {
    let (mut store, _) = store_with_floor();
    store.set_zoom_level(f64::NAN);
    assert_eq!(store.prefs().zoom_level, 1.0);
}

#[test]
fn zoom_is_clamped() {
    let (mut store, _) = store_with_floor();
    for _ in 0..100 {
        store.zoom_in();
    }
    assert_eq!(store.prefs().zoom_level, MAX_ZOOM);
    for _ in 0..100 {
        store.zoom_out();
    }
    assert_eq!(store.prefs().zoom_level, MIN_ZOOM);
    store.reset_zoom();
    assert_eq!(store.camera().zoom, 1.0);
}

#[test]
fn snapshot_collects_every_floor() {
    let (mut store, floor_id) = store_with_floor();
    let other = floor(1);
    let other_id = other.id;
    store.add_floor(other);
    store.add_placement(table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0));
    store.add_placement(zone(other_id, 0.0, 0.0, 100.0, 100.0));
    let snapshot = store.snapshot();
    assert_eq!(snapshot.table_placements.len(), 1);
    assert_eq!(snapshot.zones.len(), 1);
}

#[test]
fn load_layout_replaces_collections() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0));
    store.load_layout(LayoutSnapshot::default());
    assert!(store.snapshot().is_empty());
}
