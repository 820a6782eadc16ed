//! REST client for the floor-plan backend.
//!
//! Thin `reqwest` wrapper. Status and body handling live in pure functions
//! (`endpoint`, `parse_body`, `check_status`) so they test without a server.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{FloorPlanService, LayoutPersistence, NewFloor, ServiceError};
use crate::config::{EditorConfig, HttpTimeouts};
use crate::model::{
    Floor, FloorId, FloorPlan, FloorPlanId, FurniturePlacement, LayoutSnapshot, Table, TablePlacement, Zone,
};

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpFloorPlanService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFloorPlanService {
    /// # Errors
    ///
    /// Returns [`ServiceError::HttpClientBuild`] if the client cannot be built.
    pub fn new(base_url: impl Into<String>, timeouts: HttpTimeouts) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ServiceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::HttpClientBuild`] if the client cannot be built.
    pub fn from_config(config: &EditorConfig) -> Result<Self, ServiceError> {
        Self::new(config.api_base_url.clone(), config.timeouts)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = endpoint(&self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        parse_body(status, &text)
    }
}

#[async_trait::async_trait]
impl FloorPlanService for HttpFloorPlanService {
    async fn fetch_floor_plans(&self) -> Result<Vec<FloorPlan>, ServiceError> {
        self.get_json("floor-plans").await
    }

    async fn fetch_floors(&self, floor_plan_id: FloorPlanId) -> Result<Vec<Floor>, ServiceError> {
        self.get_json(&format!("floor-plans/{floor_plan_id}/floors")).await
    }

    async fn fetch_table_positions(&self, floor_id: FloorId) -> Result<Vec<TablePlacement>, ServiceError> {
        self.get_json(&format!("floors/{floor_id}/table-positions")).await
    }

    async fn fetch_furniture_positions(&self, floor_id: FloorId) -> Result<Vec<FurniturePlacement>, ServiceError> {
        self.get_json(&format!("floors/{floor_id}/furniture-positions")).await
    }

    async fn fetch_zones(&self, floor_id: FloorId) -> Result<Vec<Zone>, ServiceError> {
        self.get_json(&format!("floors/{floor_id}/zones")).await
    }

    async fn fetch_tables(&self) -> Result<Vec<Table>, ServiceError> {
        self.get_json("tables").await
    }

    async fn create_floor(&self, request: &NewFloor) -> Result<Floor, ServiceError> {
        let url = endpoint(&self.base_url, "floors");
        debug!(%url, name = %request.name, "POST");
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        parse_body(status, &text)
    }
}

#[async_trait::async_trait]
impl LayoutPersistence for HttpFloorPlanService {
    async fn save_layout(&self, layout: &LayoutSnapshot) -> Result<(), ServiceError> {
        let url = endpoint(&self.base_url, "layout");
        debug!(%url, placements = layout.len(), "PUT");
        let response = self
            .http
            .put(&url)
            .json(layout)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        check_status(status, &text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Join the base URL and a relative path with exactly one slash.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn check_status(status: u16, body: &str) -> Result<(), ServiceError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    if status == 404 {
        return Err(ServiceError::NotFound(body.to_string()));
    }
    Err(ServiceError::Status { status, body: body.to_string() })
}

fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ServiceError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))
}
