#![allow(clippy::float_cmp)]

use std::sync::Mutex;

use super::*;

/// Serializes the tests that touch process env.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const KEYS: [&str; 6] = [
    "FLOORPLAN_GRID_SIZE",
    "FLOORPLAN_SNAP_TO_GRID",
    "FLOORPLAN_SHOW_GRID",
    "FLOORPLAN_API_BASE_URL",
    "FLOORPLAN_REQUEST_TIMEOUT_SECS",
    "FLOORPLAN_CONNECT_TIMEOUT_SECS",
];

/// # Safety
/// Callers hold `ENV_LOCK`.
unsafe fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_env() };

    let cfg = EditorConfig::from_env().unwrap();
    assert_eq!(cfg, EditorConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("FLOORPLAN_GRID_SIZE", "25");
        std::env::set_var("FLOORPLAN_SNAP_TO_GRID", "off");
        std::env::set_var("FLOORPLAN_SHOW_GRID", "No");
        std::env::set_var("FLOORPLAN_API_BASE_URL", "https://floor.test/api/");
        std::env::set_var("FLOORPLAN_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("FLOORPLAN_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = EditorConfig::from_env().unwrap();
    assert_eq!(cfg.grid_size, 25.0);
    assert!(!cfg.snap_to_grid);
    assert!(!cfg.show_grid);
    assert_eq!(cfg.api_base_url, "https://floor.test/api");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_bad_grid() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("FLOORPLAN_GRID_SIZE", "-5");
    }

    let err = EditorConfig::from_env().unwrap_err();
    assert_eq!(err.to_string(), "invalid FLOORPLAN_GRID_SIZE: -5");

    unsafe { clear_env() };
}

#[test]
fn bad_timeout_falls_back_to_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("FLOORPLAN_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = EditorConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_env() };
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert!(parse_bool("K", Some("YES"), false).unwrap());
    assert!(parse_bool("K", Some(" 1 "), false).unwrap());
    assert!(!parse_bool("K", Some("false"), true).unwrap());
    assert!(parse_bool("K", None, true).unwrap());
    assert!(parse_bool("K", Some("maybe"), true).is_err());
}

#[test]
fn parse_grid_size_rejects_nonsense() {
    assert_eq!(parse_grid_size(None).unwrap(), DEFAULT_GRID_SIZE);
    assert_eq!(parse_grid_size(Some("10")).unwrap(), 10.0);
    assert!(parse_grid_size(Some("0")).is_err());
    assert!(parse_grid_size(Some("0.001")).is_err());
    assert!(parse_grid_size(Some("inf")).is_err());
    assert!(parse_grid_size(Some("abc")).is_err());
}

#[test]
fn display_prefs_carry_grid_settings() {
    let cfg = EditorConfig { grid_size: 40.0, snap_to_grid: false, ..EditorConfig::default() };
    let prefs = cfg.display_prefs();
    assert_eq!(prefs.grid_size, 40.0);
    assert!(!prefs.snap_to_grid);
    assert!(prefs.show_grid);
    assert_eq!(prefs.zoom_level, 1.0);
}
