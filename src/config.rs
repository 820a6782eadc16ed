//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::DEFAULT_GRID_SIZE;
use crate::geometry::is_valid_grid_size;
use crate::store::DisplayPrefs;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub grid_size: f64,
    pub snap_to_grid: bool,
    pub show_grid: bool,
    pub api_base_url: String,
    pub timeouts: HttpTimeouts,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: true,
            show_grid: true,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeouts: HttpTimeouts::default(),
        }
    }
}

impl EditorConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `FLOORPLAN_GRID_SIZE`: default 20, finite and at least 1
    /// - `FLOORPLAN_SNAP_TO_GRID`: default true
    /// - `FLOORPLAN_SHOW_GRID`: default true
    /// - `FLOORPLAN_API_BASE_URL`: default `http://localhost:3000/api`
    /// - `FLOORPLAN_REQUEST_TIMEOUT_SECS`: default 30
    /// - `FLOORPLAN_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a malformed grid size or boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let grid_size = parse_grid_size(env_var("FLOORPLAN_GRID_SIZE").as_deref())?;
        let snap_to_grid = parse_bool("FLOORPLAN_SNAP_TO_GRID", env_var("FLOORPLAN_SNAP_TO_GRID").as_deref(), true)?;
        let show_grid = parse_bool("FLOORPLAN_SHOW_GRID", env_var("FLOORPLAN_SHOW_GRID").as_deref(), true)?;
        let api_base_url = env_var("FLOORPLAN_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = HttpTimeouts {
            request_secs: env_parse("FLOORPLAN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("FLOORPLAN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { grid_size, snap_to_grid, show_grid, api_base_url, timeouts })
    }

    /// Initial canvas preferences.
    #[must_use]
    pub fn display_prefs(&self) -> DisplayPrefs {
        DisplayPrefs {
            show_grid: self.show_grid,
            snap_to_grid: self.snap_to_grid,
            grid_size: self.grid_size,
            ..DisplayPrefs::default()
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_var(key).and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}

fn parse_grid_size(raw: Option<&str>) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_GRID_SIZE);
    };
    match raw.trim().parse::<f64>() {
        Ok(size) if is_valid_grid_size(size) => Ok(size),
        _ => Err(ConfigError::Invalid { key: "FLOORPLAN_GRID_SIZE", value: raw.to_string() }),
    }
}

fn parse_bool(key: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw.to_string() }),
    }
}
