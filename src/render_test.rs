use uuid::Uuid;

use super::*;
use crate::model::Table;
use crate::test_helpers::{furniture, store_with_floor, table, table_placement, zone};

#[test]
fn grid_lines_cover_extent() {
    let lines = grid_lines(100.0, 40.0, 20.0);
    // 0..=100 vertical (6) and 0..=40 horizontal (3).
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[5].from, Point::new(100.0, 0.0));
    assert_eq!(lines[6].to, Point::new(100.0, 0.0));
}

#[test]
fn grid_lines_empty_for_bad_input() {
    assert!(grid_lines(100.0, 100.0, 0.0).is_empty());
    assert!(grid_lines(0.0, 100.0, 20.0).is_empty());
}

#[test]
fn fine_grid_is_capped_per_axis() {
    let lines = grid_lines(800.0, 600.0, 1e-6);
    assert_eq!(lines.len(), 2 * MAX_GRID_LINES);
}

#[test]
fn infinite_extent_draws_nothing() {
    assert!(grid_lines(f64::INFINITY, 100.0, 20.0).is_empty());
    assert!(grid_lines(100.0, 100.0, f64::NAN).is_empty());
}

#[test]
fn hidden_grid_draws_no_lines() {
    let (mut store, _) = store_with_floor();
    store.set_show_grid(false);
    assert!(build_scene(&store, 400.0, 400.0).grid.is_empty());
    store.set_show_grid(true);
    assert!(!build_scene(&store, 400.0, 400.0).grid.is_empty());
}

#[test]
fn items_follow_draw_order() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0));
    store.add_placement(zone(floor_id, 0.0, 0.0, 300.0, 300.0));
    store.add_placement(furniture(floor_id, "plant", 0.0, 0.0));
    let kinds: Vec<_> = build_scene(&store, 10.0, 10.0).items.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![PlacementKind::Zone, PlacementKind::Furniture, PlacementKind::Table]);
}

#[test]
fn table_label_and_status_color() {
    let (mut store, floor_id) = store_with_floor();
    let t: Table = table("T7", TableStatus::Reserved);
    store.add_placement(table_placement(floor_id, t.id, 0.0, 0.0));
    store.set_tables(vec![t]);
    let item = &build_scene(&store, 10.0, 10.0).items[0];
    assert_eq!(item.label, "T7");
    assert_eq!(item.detail.as_deref(), Some("4 seats"));
    assert_eq!(item.fill, "#F59E0B");
}

#[test]
fn unknown_table_gets_placeholder_label() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0));
    let item = &build_scene(&store, 10.0, 10.0).items[0];
    assert_eq!(item.label, "?");
    assert!(item.detail.is_none());
}

#[test]
fn furniture_uses_template_name_and_glyph() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(furniture(floor_id, "lamp", 0.0, 0.0));
    let item = &build_scene(&store, 10.0, 10.0).items[0];
    assert_eq!(item.label, "Floor Lamp");
    assert_eq!(item.glyph, Some(store.catalog().icon_for("lamp").glyph()));
}

#[test]
fn zone_keeps_color_and_opacity() {
    let (mut store, floor_id) = store_with_floor();
    store.add_placement(zone(floor_id, 0.0, 0.0, 100.0, 100.0));
    let item = &build_scene(&store, 10.0, 10.0).items[0];
    assert_eq!(item.fill, "#3B82F6");
    assert!((item.opacity - 0.3).abs() < f64::EPSILON);
}

#[test]
fn resize_handle_only_for_selection_in_resize_mode() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(p.clone());
    store.set_selection(p.id(), PlacementKind::Table);

    let item = build_scene(&store, 10.0, 10.0).items.remove(0);
    assert!(item.selected && !item.show_resize_handle);

    store.set_tool_mode(ToolMode::Resize);
    let item = build_scene(&store, 10.0, 10.0).items.remove(0);
    assert!(item.show_resize_handle);
}

#[test]
fn circle_tables_render_as_circles() {
    let (mut store, floor_id) = store_with_floor();
    let p = table_placement(floor_id, Uuid::new_v4(), 0.0, 0.0);
    store.add_placement(p.clone());
    store.set_selection(p.id(), PlacementKind::Table);
    store.toggle_selected_shape();
    assert_eq!(build_scene(&store, 10.0, 10.0).items[0].shape, RenderShape::Circle);
}
