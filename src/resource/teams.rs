//! Organization teams and members

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

/// Accessor for the teams of an organization.
#[derive(Debug, Clone)]
pub struct Teams {
    tenant: Tenant,
    organization_id: String,
}

impl Teams {
    pub(crate) fn new(tenant: Tenant, organization_id: String) -> Self {
        Self {
            tenant,
            organization_id,
        }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Teams, &[&self.organization_id], relation::TEAM)
            .await
    }

    pub fn team(&self, team_id: impl Into<String>) -> Team {
        Team {
            tenant: self.tenant.clone(),
            organization_id: self.organization_id.clone(),
            team_id: team_id.into(),
        }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        is_owner_team: bool,
        visibility: Option<&str>,
    ) -> Result<Value> {
        self.tenant
            .execute(requests::create_team(
                &self.organization_id,
                name,
                description,
                is_owner_team,
                visibility,
            )?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    tenant: Tenant,
    organization_id: String,
    team_id: String,
}

impl Team {
    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::Team, &[&self.organization_id, &self.team_id])
            .await
    }

    pub async fn edit(
        &self,
        name: &str,
        description: Option<&str>,
        visibility: Option<&str>,
    ) -> Result<Value> {
        self.tenant
            .execute(requests::edit_team(
                &self.organization_id,
                &self.team_id,
                name,
                description,
                visibility,
            )?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_team(&self.organization_id, &self.team_id)?)
            .await
    }

    pub fn members(&self) -> TeamMembers {
        TeamMembers { team: self.clone() }
    }
}

#[derive(Debug, Clone)]
pub struct TeamMembers {
    team: Team,
}

impl TeamMembers {
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.team
            .tenant
            .fetch_list(
                Endpoint::TeamMembers,
                &[&self.team.organization_id, &self.team.team_id],
                relation::MEMBER,
            )
            .await
    }

    pub fn member(&self, member_id: impl Into<String>) -> TeamMember {
        TeamMember {
            team: self.team.clone(),
            member_id: member_id.into(),
        }
    }

    pub async fn add(&self, user_id: &str) -> Result<Value> {
        self.team
            .tenant
            .execute(requests::add_team_member(
                &self.team.organization_id,
                &self.team.team_id,
                user_id,
            )?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    team: Team,
    member_id: String,
}

impl TeamMember {
    pub async fn get(&self) -> Result<Value> {
        self.team
            .tenant
            .fetch(
                Endpoint::TeamMember,
                &[&self.team.organization_id, &self.team.team_id, &self.member_id],
            )
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.team
            .tenant
            .execute(requests::remove_team_member(
                &self.team.organization_id,
                &self.team.team_id,
                &self.member_id,
            )?)
            .await
    }
}
