//! Projects

use super::{Exhibitions, Instances, ProjectContexts, Tenant};
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::{Map, Value};

/// Accessor for the projects of a tenant.
#[derive(Debug, Clone)]
pub struct Projects {
    tenant: Tenant,
}

impl Projects {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    /// List all projects in the tenant.
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Projects, &[], relation::PROJECT)
            .await
    }

    pub fn project(&self, project_id: impl Into<String>) -> Project {
        Project::new(self.tenant.clone(), project_id.into())
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Value> {
        self.tenant
            .execute(requests::create_project(name, description)?)
            .await
    }
}

/// Accessor for one project.
#[derive(Debug, Clone)]
pub struct Project {
    tenant: Tenant,
    project_id: String,
}

impl Project {
    pub(crate) fn new(tenant: Tenant, project_id: String) -> Self {
        Self { tenant, project_id }
    }

    pub fn id(&self) -> &str {
        &self.project_id
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::Project, &[&self.project_id])
            .await
    }

    pub async fn edit(&self, name: &str, description: Option<&str>) -> Result<Value> {
        self.tenant
            .execute(requests::edit_project(&self.project_id, name, description)?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_project(&self.project_id)?)
            .await
    }

    /// Search the project. `search_options` are sent alongside the query.
    pub async fn search(
        &self,
        search_text: &str,
        search_options: &Map<String, Value>,
    ) -> Result<Value> {
        self.tenant
            .execute(requests::search_project(&self.project_id, search_text, search_options)?)
            .await
    }

    pub fn contexts(&self) -> ProjectContexts {
        ProjectContexts::new(self.tenant.clone(), self.project_id.clone())
    }

    pub fn instances(&self) -> Instances {
        Instances::new(self.tenant.clone(), self.project_id.clone())
    }

    pub fn exhibitions(&self) -> Exhibitions {
        Exhibitions::new(self.tenant.clone(), self.project_id.clone())
    }
}
