//! Instance cells and their resources

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

/// Accessor for the cells of an instance.
#[derive(Debug, Clone)]
pub struct Cells {
    tenant: Tenant,
    project_id: String,
    instance_id: String,
}

impl Cells {
    pub(crate) fn new(tenant: Tenant, project_id: String, instance_id: String) -> Self {
        Self {
            tenant,
            project_id,
            instance_id,
        }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(
                Endpoint::InstanceCells,
                &[&self.project_id, &self.instance_id],
                relation::CELL,
            )
            .await
    }

    pub fn cell(&self, cell_id: impl Into<String>) -> Cell {
        Cell {
            tenant: self.tenant.clone(),
            project_id: self.project_id.clone(),
            instance_id: self.instance_id.clone(),
            cell_id: cell_id.into(),
        }
    }

    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::create_instance_cell(&self.project_id, &self.instance_id, data)?)
            .await
    }
}

/// Accessor for one cell of an instance.
#[derive(Debug, Clone)]
pub struct Cell {
    tenant: Tenant,
    project_id: String,
    instance_id: String,
    cell_id: String,
}

impl Cell {
    fn keys(&self) -> [&str; 3] {
        [
            self.project_id.as_str(),
            self.instance_id.as_str(),
            self.cell_id.as_str(),
        ]
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::InstanceCell, &self.keys()).await
    }

    pub async fn edit(&self, data: &Value) -> Result<Value> {
        let [project_id, instance_id, cell_id] = self.keys();
        self.tenant
            .execute(requests::edit_instance_cell(project_id, instance_id, cell_id, data)?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        let [project_id, instance_id, cell_id] = self.keys();
        self.tenant
            .execute(requests::delete_instance_cell(project_id, instance_id, cell_id)?)
            .await
    }

    pub fn resources(&self) -> CellResources {
        CellResources {
            cell: self.clone(),
        }
    }
}

/// Accessor for the resources attached to a cell.
#[derive(Debug, Clone)]
pub struct CellResources {
    cell: Cell,
}

impl CellResources {
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.cell
            .tenant
            .fetch_list(Endpoint::CellResources, &self.cell.keys(), relation::RESOURCE)
            .await
    }

    pub fn resource(&self, resource_id: impl Into<String>) -> CellResource {
        CellResource {
            cell: self.cell.clone(),
            resource_id: resource_id.into(),
        }
    }
}

/// Accessor for one resource attached to a cell.
#[derive(Debug, Clone)]
pub struct CellResource {
    cell: Cell,
    resource_id: String,
}

impl CellResource {
    pub async fn get(&self) -> Result<Value> {
        let [project_id, instance_id, cell_id] = self.cell.keys();
        self.cell
            .tenant
            .fetch(
                Endpoint::CellResource,
                &[project_id, instance_id, cell_id, &self.resource_id],
            )
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        let [project_id, instance_id, cell_id] = self.cell.keys();
        self.cell
            .tenant
            .execute(requests::delete_cell_resource(
                project_id,
                instance_id,
                cell_id,
                &self.resource_id,
            )?)
            .await
    }
}
