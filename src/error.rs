//! Editor error taxonomy.
//!
//! DESIGN
//! ======
//! Every variant's `Display` text is the message the host shows in a toast.
//! Nothing here is fatal: the surface and session layers convert errors into
//! [`crate::notify::Notification`]s at the point they occur and leave state
//! unchanged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::model::{FloorId, TableId, TemplateId};
use crate::services::ServiceError;

/// Stable machine-readable code for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("No available tables to place")]
    NoAvailableTables,
    #[error("Table {0} is already placed")]
    TableAlreadyPlaced(TableId),
    #[error("Please enter a floor name")]
    EmptyFloorName,
    #[error("Select a furniture item from the library first")]
    NoFurnitureTemplate,
    #[error("Unknown furniture template: {0}")]
    UnknownTemplate(TemplateId),
    #[error("No floor selected")]
    NoActiveFloor,
    #[error("No floor plan loaded")]
    NoFloorPlan,
    #[error("Unknown floor: {0}")]
    UnknownFloor(FloorId),
    #[error("Invalid zone: {0}")]
    InvalidZone(String),
    #[error("Invalid furniture catalog: {0}")]
    InvalidCatalog(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ErrorCode for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoAvailableTables => "E_NO_AVAILABLE_TABLES",
            Self::TableAlreadyPlaced(_) => "E_TABLE_ALREADY_PLACED",
            Self::EmptyFloorName => "E_EMPTY_FLOOR_NAME",
            Self::NoFurnitureTemplate => "E_NO_FURNITURE_TEMPLATE",
            Self::UnknownTemplate(_) => "E_UNKNOWN_TEMPLATE",
            Self::NoActiveFloor => "E_NO_ACTIVE_FLOOR",
            Self::NoFloorPlan => "E_NO_FLOOR_PLAN",
            Self::UnknownFloor(_) => "E_UNKNOWN_FLOOR",
            Self::InvalidZone(_) => "E_INVALID_ZONE",
            Self::InvalidCatalog(_) => "E_INVALID_CATALOG",
            Self::Service(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Service(e) => e.retryable(),
            _ => false,
        }
    }
}
