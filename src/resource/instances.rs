//! Project instances

use super::{Cells, Tenant};
use crate::api::{embedded_items, relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

/// Accessor for the instances of a project.
#[derive(Debug, Clone)]
pub struct Instances {
    tenant: Tenant,
    project_id: String,
}

impl Instances {
    pub(crate) fn new(tenant: Tenant, project_id: String) -> Self {
        Self { tenant, project_id }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Instances, &[&self.project_id], relation::INSTANCE)
            .await
    }

    pub fn instance(&self, instance_id: impl Into<String>) -> Instance {
        Instance {
            tenant: self.tenant.clone(),
            project_id: self.project_id.clone(),
            instance_id: instance_id.into(),
        }
    }

    /// Create an instance of the concept identified by `concept_handle`.
    pub async fn create(&self, concept_handle: &str, properties: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::create_instance(&self.project_id, concept_handle, properties)?)
            .await
    }

    /// Instances of this project belonging to `concept_id`.
    pub async fn search_by_concept_id(&self, concept_id: &str) -> Result<Vec<Value>> {
        let request = requests::search_instances(&self.project_id, concept_id)?;
        let body = self.tenant.execute(request).await?;
        Ok(embedded_items(body, relation::INSTANCE))
    }
}

/// Accessor for one instance.
#[derive(Debug, Clone)]
pub struct Instance {
    tenant: Tenant,
    project_id: String,
    instance_id: String,
}

impl Instance {
    pub fn id(&self) -> &str {
        &self.instance_id
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::Instance, &[&self.project_id, &self.instance_id])
            .await
    }

    /// Apply update operations to the instance.
    pub async fn update(&self, update_operations: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::update_instance(
                &self.project_id,
                &self.instance_id,
                update_operations,
            )?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_instance(&self.project_id, &self.instance_id)?)
            .await
    }

    pub fn cells(&self) -> Cells {
        Cells::new(
            self.tenant.clone(),
            self.project_id.clone(),
            self.instance_id.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::testing::{self, RecordingExecutor};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_nested_instance_path() {
        let executor = RecordingExecutor::returning(json!({"id": "I1"}));
        let (_, tenant) = testing::tenant(executor.clone());

        let instances = tenant.projects().project("P1").instances();
        let body = instances.instance("I1").get().await.unwrap();

        assert_eq!(body, json!({"id": "I1"}));
        let request = executor.last();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/projects/P1/instances/I1");
    }

    #[tokio::test]
    async fn test_search_by_concept_id() {
        let data = vec![json!({"id": "a"}), json!({"id": "b"})];
        let executor = RecordingExecutor::returning(json!({"_embedded": {"be:instance": data}}));
        let (_, tenant) = testing::tenant(executor.clone());
        let project_id = uuid::Uuid::new_v4().to_string();
        let concept_id = uuid::Uuid::new_v4().to_string();

        let found = tenant
            .projects()
            .project(project_id.clone())
            .instances()
            .search_by_concept_id(&concept_id)
            .await
            .unwrap();

        assert_eq!(found, data);
        let request = executor.last();
        assert_eq!(request.path, "/search/instances");
        assert_eq!(
            request.body,
            Some(json!({"projectId": project_id, "conceptId": concept_id}))
        );
    }

    #[tokio::test]
    async fn test_create_instance() {
        let executor = RecordingExecutor::returning(json!({}));
        let (_, tenant) = testing::tenant(executor.clone());
        let properties = json!([{"title": "My instance"}, {"age": "19"}]);

        tenant
            .projects()
            .project("P1")
            .instances()
            .create("conceptHandle", &properties)
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/projects/P1/instances");
        assert_eq!(
            request.body,
            Some(json!({"conceptHandle": "conceptHandle", "properties": properties}))
        );
    }

    #[tokio::test]
    async fn test_create_requires_concept_handle() {
        let executor = RecordingExecutor::returning(json!({}));
        let (_, tenant) = testing::tenant(executor.clone());

        let err = tenant
            .projects()
            .project("P1")
            .instances()
            .create("", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation("A concept handle is required.")));
        assert!(executor.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let executor = RecordingExecutor::returning(Value::Null);
        let (_, tenant) = testing::tenant(executor.clone());
        let instance = tenant.projects().project("P1").instances().instance("I1");

        instance.update(&json!([{"op": "add"}])).await.unwrap();
        assert_eq!(executor.last().method, Method::PATCH);

        instance.remove().await.unwrap();
        let request = executor.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/projects/P1/instances/I1");
    }
}
