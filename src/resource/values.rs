//! Values and their positioned cells

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

/// Accessor for one value. Named to avoid clashing with [`serde_json::Value`].
#[derive(Debug, Clone)]
pub struct ValueAccessor {
    tenant: Tenant,
    value_id: String,
}

impl ValueAccessor {
    pub(crate) fn new(tenant: Tenant, value_id: String) -> Self {
        Self { tenant, value_id }
    }

    pub fn id(&self) -> &str {
        &self.value_id
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::Value, &[&self.value_id]).await
    }

    pub fn cells(&self) -> ValueCells {
        ValueCells {
            value: self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValueCells {
    value: ValueAccessor,
}

impl ValueCells {
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.value
            .tenant
            .fetch_list(Endpoint::ValueCells, &[&self.value.value_id], relation::CELL)
            .await
    }

    pub fn cell(&self, cell_id: impl Into<String>) -> ValueCell {
        ValueCell {
            value: self.value.clone(),
            cell_id: cell_id.into(),
        }
    }

    pub async fn create(&self, position: &Value) -> Result<Value> {
        self.value
            .tenant
            .execute(requests::create_value_cell(&self.value.value_id, position)?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ValueCell {
    value: ValueAccessor,
    cell_id: String,
}

impl ValueCell {
    pub async fn get(&self) -> Result<Value> {
        self.value
            .tenant
            .fetch(Endpoint::ValueCell, &[&self.value.value_id, &self.cell_id])
            .await
    }

    pub async fn edit(&self, position: &Value) -> Result<Value> {
        self.value
            .tenant
            .execute(requests::edit_value_cell(
                &self.value.value_id,
                &self.cell_id,
                position,
            )?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.value
            .tenant
            .execute(requests::delete_value_cell(&self.value.value_id, &self.cell_id)?)
            .await
    }
}
