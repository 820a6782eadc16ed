//! Shared numeric constants for the floor-plan editor.

// ── Grid ────────────────────────────────────────────────────────

/// Default grid pitch in world pixels.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Smallest grid pitch the editor accepts.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Upper bound on background grid lines per axis.
pub const MAX_GRID_LINES: usize = 2_000;

// ── Placement sizing ────────────────────────────────────────────

/// Minimum width/height applied when a template declares none.
pub const DEFAULT_MIN_DIMENSION: f64 = 50.0;

/// Width of a freshly placed table.
pub const DEFAULT_TABLE_WIDTH: f64 = 100.0;

/// Height of a freshly placed table.
pub const DEFAULT_TABLE_HEIGHT: f64 = 80.0;

/// Width of a zone created without an explicit size.
pub const DEFAULT_ZONE_WIDTH: f64 = 200.0;

/// Height of a zone created without an explicit size.
pub const DEFAULT_ZONE_HEIGHT: f64 = 150.0;

/// Fill opacity for new zones.
pub const DEFAULT_ZONE_OPACITY: f64 = 0.3;

// ── Rotation ────────────────────────────────────────────────────

/// Degrees added by one rotate command.
pub const ROTATE_STEP_DEG: f64 = 45.0;

/// One full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Zoom ────────────────────────────────────────────────────────

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Side length of the square resize handle at a placement's bottom-right corner, in screen pixels.
pub const RESIZE_HANDLE_PX: f64 = 12.0;
