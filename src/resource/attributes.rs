//! Tenant attributes

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Attributes {
    tenant: Tenant,
}

impl Attributes {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Attributes, &[], relation::ATTRIBUTE)
            .await
    }

    pub fn attribute(&self, attribute_id: impl Into<String>) -> Attribute {
        Attribute {
            tenant: self.tenant.clone(),
            attribute_id: attribute_id.into(),
        }
    }

    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.tenant.execute(requests::create_attribute(data)?).await
    }
}

#[derive(Debug, Clone)]
pub struct Attribute {
    tenant: Tenant,
    attribute_id: String,
}

impl Attribute {
    pub async fn get(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::Attribute, &[&self.attribute_id]).await
    }

    pub async fn edit(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::edit_attribute(&self.attribute_id, data)?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_attribute(&self.attribute_id)?)
            .await
    }
}
