//! Organizations, their projects and the teams granted access to them

use super::{Teams, Tenant};
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Organizations {
    tenant: Tenant,
}

impl Organizations {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Organizations, &[], relation::ORGANIZATION)
            .await
    }

    pub fn organization(&self, organization_id: impl Into<String>) -> Organization {
        Organization {
            tenant: self.tenant.clone(),
            organization_id: organization_id.into(),
        }
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Value> {
        self.tenant
            .execute(requests::create_organization(name, description)?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct Organization {
    tenant: Tenant,
    organization_id: String,
}

impl Organization {
    pub fn id(&self) -> &str {
        &self.organization_id
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::Organization, &[&self.organization_id])
            .await
    }

    pub async fn edit(&self, name: &str, description: Option<&str>) -> Result<Value> {
        self.tenant
            .execute(requests::edit_organization(&self.organization_id, name, description)?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_organization(&self.organization_id)?)
            .await
    }

    pub fn teams(&self) -> Teams {
        Teams::new(self.tenant.clone(), self.organization_id.clone())
    }

    pub fn projects(&self) -> OrganizationProjects {
        OrganizationProjects {
            tenant: self.tenant.clone(),
            organization_id: self.organization_id.clone(),
        }
    }
}

/// Projects owned by an organization.
#[derive(Debug, Clone)]
pub struct OrganizationProjects {
    tenant: Tenant,
    organization_id: String,
}

impl OrganizationProjects {
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(
                Endpoint::OrganizationProjects,
                &[&self.organization_id],
                relation::PROJECT,
            )
            .await
    }

    pub fn project(&self, project_id: impl Into<String>) -> OrganizationProject {
        OrganizationProject {
            tenant: self.tenant.clone(),
            organization_id: self.organization_id.clone(),
            project_id: project_id.into(),
        }
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Value> {
        self.tenant
            .execute(requests::create_organization_project(
                &self.organization_id,
                name,
                description,
            )?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct OrganizationProject {
    tenant: Tenant,
    organization_id: String,
    project_id: String,
}

impl OrganizationProject {
    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(
                Endpoint::OrganizationProject,
                &[&self.organization_id, &self.project_id],
            )
            .await
    }

    pub async fn edit(&self, name: &str, description: Option<&str>) -> Result<Value> {
        self.tenant
            .execute(requests::edit_organization_project(
                &self.organization_id,
                &self.project_id,
                name,
                description,
            )?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_organization_project(
                &self.organization_id,
                &self.project_id,
            )?)
            .await
    }

    /// Teams with access to this project.
    pub fn teams(&self) -> ProjectTeams {
        ProjectTeams {
            project: self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectTeams {
    project: OrganizationProject,
}

impl ProjectTeams {
    pub async fn list(&self) -> Result<Vec<Value>> {
        let project = &self.project;
        project
            .tenant
            .fetch_list(
                Endpoint::OrganizationProjectTeams,
                &[&project.organization_id, &project.project_id],
                relation::TEAM,
            )
            .await
    }

    pub fn team(&self, team_id: impl Into<String>) -> ProjectTeam {
        ProjectTeam {
            project: self.project.clone(),
            team_id: team_id.into(),
        }
    }

    /// Grant `team_id` access to the project with `permissions`.
    pub async fn add(&self, team_id: &str, permissions: &[&str]) -> Result<Value> {
        let project = &self.project;
        project
            .tenant
            .execute(requests::add_project_team(
                &project.organization_id,
                &project.project_id,
                team_id,
                permissions,
            )?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ProjectTeam {
    project: OrganizationProject,
    team_id: String,
}

impl ProjectTeam {
    pub async fn get(&self) -> Result<Value> {
        let project = &self.project;
        project
            .tenant
            .fetch(
                Endpoint::OrganizationProjectTeam,
                &[&project.organization_id, &project.project_id, &self.team_id],
            )
            .await
    }

    pub async fn edit(&self, permissions: &[&str]) -> Result<Value> {
        let project = &self.project;
        project
            .tenant
            .execute(requests::edit_project_team(
                &project.organization_id,
                &project.project_id,
                &self.team_id,
                permissions,
            )?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        let project = &self.project;
        project
            .tenant
            .execute(requests::delete_project_team(
                &project.organization_id,
                &project.project_id,
                &self.team_id,
            )?)
            .await
    }
}
