//! External collaborators: floor-plan data and layout persistence.
//!
//! DESIGN
//! ======
//! The editor never talks to a backend directly. It consumes these two
//! async traits, so hosts can plug in the HTTP client, the in-memory store,
//! or a test double. Errors are plain values; the session layer turns them
//! into notifications at the call site.

pub mod http;
pub mod memory;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::model::{
    Floor, FloorId, FloorPlan, FloorPlanId, FurniturePlacement, LayoutSnapshot, Table, TablePlacement, Zone,
};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by collaborator calls.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_SERVICE_REQUEST",
            Self::Status { .. } => "E_SERVICE_STATUS",
            Self::Parse(_) => "E_SERVICE_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::NotFound(_) => "E_NOT_FOUND",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of a create-floor call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFloor {
    pub name: String,
    pub floor_plan_id: FloorPlanId,
    pub order: u32,
}

// =============================================================================
// TRAITS
// =============================================================================

/// Read side of the floor-plan backend plus floor creation.
#[async_trait::async_trait]
pub trait FloorPlanService: Send + Sync {
    async fn fetch_floor_plans(&self) -> Result<Vec<FloorPlan>, ServiceError>;

    async fn fetch_floors(&self, floor_plan_id: FloorPlanId) -> Result<Vec<Floor>, ServiceError>;

    async fn fetch_table_positions(&self, floor_id: FloorId) -> Result<Vec<TablePlacement>, ServiceError>;

    /// Furniture on a floor. Backends without furniture storage return nothing.
    async fn fetch_furniture_positions(&self, _floor_id: FloorId) -> Result<Vec<FurniturePlacement>, ServiceError> {
        Ok(Vec::new())
    }

    /// Zones on a floor. Backends without zone storage return nothing.
    async fn fetch_zones(&self, _floor_id: FloorId) -> Result<Vec<Zone>, ServiceError> {
        Ok(Vec::new())
    }

    async fn fetch_tables(&self) -> Result<Vec<Table>, ServiceError>;

    async fn create_floor(&self, request: &NewFloor) -> Result<Floor, ServiceError>;
}

/// Write side: the whole layout, sent wholesale.
#[async_trait::async_trait]
pub trait LayoutPersistence: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the backend rejects or never receives the layout.
    async fn save_layout(&self, layout: &LayoutSnapshot) -> Result<(), ServiceError>;
}
