//! Project contexts

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ProjectContexts {
    tenant: Tenant,
    project_id: String,
}

impl ProjectContexts {
    pub(crate) fn new(tenant: Tenant, project_id: String) -> Self {
        Self { tenant, project_id }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::ProjectContexts, &[&self.project_id], relation::CONTEXT)
            .await
    }

    pub fn context(&self, context_id: impl Into<String>) -> ProjectContext {
        ProjectContext {
            tenant: self.tenant.clone(),
            project_id: self.project_id.clone(),
            context_id: context_id.into(),
        }
    }

    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::create_project_context(&self.project_id, data)?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ProjectContext {
    tenant: Tenant,
    project_id: String,
    context_id: String,
}

impl ProjectContext {
    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::ProjectContext, &[&self.project_id, &self.context_id])
            .await
    }

    pub async fn edit(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::edit_project_context(&self.project_id, &self.context_id, data)?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_project_context(&self.project_id, &self.context_id)?)
            .await
    }

    /// Events recorded in this context, oldest first as served.
    pub async fn events(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(
                Endpoint::ProjectContextEvents,
                &[&self.project_id, &self.context_id],
                relation::EVENT,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::{self, RecordingExecutor};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_context_paths() {
        let executor = RecordingExecutor::returning(json!({
            "_embedded": {"be:event": [{"type": "opened"}]}
        }));
        let (_, tenant) = testing::tenant(executor.clone());
        let context = tenant.projects().project("P1").contexts().context("C1");

        let events = context.events().await.unwrap();
        assert_eq!(events, vec![json!({"type": "opened"})]);
        assert_eq!(executor.last().path, "/projects/P1/contexts/C1/events");

        context.edit(&json!({"name": "ctx"})).await.unwrap();
        let request = executor.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/projects/P1/contexts/C1");
    }

    #[tokio::test]
    async fn test_create_context() {
        let executor = RecordingExecutor::returning(json!({"id": "C2"}));
        let (_, tenant) = testing::tenant(executor.clone());

        let created = tenant
            .projects()
            .project("P1")
            .contexts()
            .create(&json!({"name": "new"}))
            .await
            .unwrap();

        assert_eq!(created, json!({"id": "C2"}));
        let request = executor.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/projects/P1/contexts");
    }
}
