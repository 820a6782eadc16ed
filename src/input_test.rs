use super::*;

#[test]
fn default_mode_is_select() {
    assert_eq!(ToolMode::default(), ToolMode::Select);
}

#[test]
fn add_modes() {
    assert!(ToolMode::AddTable.is_add());
    assert!(ToolMode::AddFurniture.is_add());
    assert!(ToolMode::AddZone.is_add());
    assert!(!ToolMode::Select.is_add());
    assert!(!ToolMode::Delete.is_add());
    assert!(!ToolMode::Simulate.is_add());
}

#[test]
fn tool_mode_serde_snake_case() {
    let json = serde_json::to_string(&ToolMode::AddFurniture).unwrap();
    assert_eq!(json, "\"add_furniture\"");
}

#[test]
fn delete_keys() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("Escape".into()).is_delete());
}
