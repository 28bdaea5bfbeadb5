//! Concepts and their relation specifications

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Concepts {
    tenant: Tenant,
}

impl Concepts {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Concepts, &[], relation::CONCEPT)
            .await
    }

    pub fn concept(&self, concept_id: impl Into<String>) -> Concept {
        Concept {
            tenant: self.tenant.clone(),
            concept_id: concept_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Concept {
    tenant: Tenant,
    concept_id: String,
}

impl Concept {
    pub fn id(&self) -> &str {
        &self.concept_id
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::Concept, &[&self.concept_id]).await
    }

    pub async fn edit(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::update_concept(&self.concept_id, data)?)
            .await
    }

    pub async fn update_concept_category(&self, category: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::update_concept_category(&self.concept_id, category)?)
            .await
    }

    pub async fn edit_form(&self, form: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::update_concept_form(&self.concept_id, form)?)
            .await
    }

    /// Declare a relation from this concept, e.g. `"oneToMany"`.
    pub async fn create_relation_specification(
        &self,
        handle: &str,
        relation_type: &str,
    ) -> Result<Value> {
        self.tenant
            .execute(requests::create_relation_specification(
                &self.concept_id,
                handle,
                relation_type,
            )?)
            .await
    }

    pub async fn specifications(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(
                Endpoint::ConceptSpecifications,
                &[&self.concept_id],
                relation::SPECIFICATION,
            )
            .await
    }
}
