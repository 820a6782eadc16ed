//! In-memory collaborator backed by plain vectors.
//!
//! Serves the demo binary and tests. Saved layouts replace the stored
//! positions, so a reload after save returns what was saved. Individual
//! operations can be told to fail to exercise error paths.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashSet;

use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use super::{FloorPlanService, LayoutPersistence, NewFloor, ServiceError};
use crate::model::{
    Floor, FloorId, FloorPlan, FloorPlanId, FurniturePlacement, LayoutSnapshot, Table, TablePlacement, Zone,
};

/// Collaborator operations, for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceOp {
    FloorPlans,
    Floors,
    TablePositions,
    FurniturePositions,
    Zones,
    Tables,
    CreateFloor,
    SaveLayout,
}

#[derive(Debug, Default)]
struct MemoryData {
    plans: Vec<FloorPlan>,
    floors: Vec<Floor>,
    tables: Vec<Table>,
    layout: LayoutSnapshot,
    saves: usize,
}

#[derive(Debug, Default)]
pub struct MemoryFloorPlanService {
    data: Mutex<MemoryData>,
    failing: HashSet<ServiceOp>,
}

impl MemoryFloorPlanService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_floor_plan(mut self, plan: FloorPlan) -> Self {
        self.data.get_mut().plans.push(plan);
        self
    }

    #[must_use]
    pub fn with_floors(mut self, floors: Vec<Floor>) -> Self {
        self.data.get_mut().floors.extend(floors);
        self
    }

    #[must_use]
    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.data.get_mut().tables.extend(tables);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutSnapshot) -> Self {
        self.data.get_mut().layout = layout;
        self
    }

    /// Make every call of `op` fail with [`ServiceError::Request`].
    #[must_use]
    pub fn failing(mut self, op: ServiceOp) -> Self {
        self.failing.insert(op);
        self
    }

    /// The most recently saved layout.
    pub async fn stored_layout(&self) -> LayoutSnapshot {
        self.data.lock().await.layout.clone()
    }

    /// How many saves succeeded.
    pub async fn save_count(&self) -> usize {
        self.data.lock().await.saves
    }

    fn check(&self, op: ServiceOp) -> Result<(), ServiceError> {
        if self.failing.contains(&op) {
            return Err(ServiceError::Request(format!("{op:?} unavailable")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FloorPlanService for MemoryFloorPlanService {
    async fn fetch_floor_plans(&self) -> Result<Vec<FloorPlan>, ServiceError> {
        self.check(ServiceOp::FloorPlans)?;
        Ok(self.data.lock().await.plans.clone())
    }

    async fn fetch_floors(&self, floor_plan_id: FloorPlanId) -> Result<Vec<Floor>, ServiceError> {
        self.check(ServiceOp::Floors)?;
        let data = self.data.lock().await;
        if !data.plans.iter().any(|p| p.id == floor_plan_id) {
            return Err(ServiceError::NotFound(format!("floor plan {floor_plan_id}")));
        }
        Ok(data.floors.iter().filter(|f| f.floor_plan_id == floor_plan_id).cloned().collect())
    }

    async fn fetch_table_positions(&self, floor_id: FloorId) -> Result<Vec<TablePlacement>, ServiceError> {
        self.check(ServiceOp::TablePositions)?;
        let data = self.data.lock().await;
        Ok(data.layout.table_placements.iter().filter(|p| p.floor_id == floor_id).cloned().collect())
    }

    async fn fetch_furniture_positions(&self, floor_id: FloorId) -> Result<Vec<FurniturePlacement>, ServiceError> {
        self.check(ServiceOp::FurniturePositions)?;
        let data = self.data.lock().await;
        Ok(data.layout.furniture_placements.iter().filter(|p| p.floor_id == floor_id).cloned().collect())
    }

    async fn fetch_zones(&self, floor_id: FloorId) -> Result<Vec<Zone>, ServiceError> {
        self.check(ServiceOp::Zones)?;
        let data = self.data.lock().await;
        Ok(data.layout.zones.iter().filter(|z| z.floor_id == floor_id).cloned().collect())
    }

    async fn fetch_tables(&self) -> Result<Vec<Table>, ServiceError> {
        self.check(ServiceOp::Tables)?;
        Ok(self.data.lock().await.tables.clone())
    }

    async fn create_floor(&self, request: &NewFloor) -> Result<Floor, ServiceError> {
        self.check(ServiceOp::CreateFloor)?;
        let mut data = self.data.lock().await;
        if !data.plans.iter().any(|p| p.id == request.floor_plan_id) {
            return Err(ServiceError::NotFound(format!("floor plan {}", request.floor_plan_id)));
        }
        let floor = Floor {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            floor_plan_id: request.floor_plan_id,
            order: request.order,
        };
        data.floors.push(floor.clone());
        Ok(floor)
    }
}

#[async_trait::async_trait]
impl LayoutPersistence for MemoryFloorPlanService {
    async fn save_layout(&self, layout: &LayoutSnapshot) -> Result<(), ServiceError> {
        self.check(ServiceOp::SaveLayout)?;
        let mut data = self.data.lock().await;
        data.layout = layout.clone();
        data.saves += 1;
        info!(placements = layout.len(), "layout stored in memory");
        Ok(())
    }
}
