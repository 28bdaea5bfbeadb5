//! Project exhibitions and their captures

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Exhibitions {
    tenant: Tenant,
    project_id: String,
}

impl Exhibitions {
    pub(crate) fn new(tenant: Tenant, project_id: String) -> Self {
        Self { tenant, project_id }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Exhibitions, &[&self.project_id], relation::EXHIBITION)
            .await
    }

    pub fn exhibition(&self, exhibition_id: impl Into<String>) -> Exhibition {
        Exhibition {
            tenant: self.tenant.clone(),
            project_id: self.project_id.clone(),
            exhibition_id: exhibition_id.into(),
        }
    }

    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::create_exhibition(&self.project_id, data)?)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct Exhibition {
    tenant: Tenant,
    project_id: String,
    exhibition_id: String,
}

impl Exhibition {
    pub async fn get(&self) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::Exhibition, &[&self.project_id, &self.exhibition_id])
            .await
    }

    pub async fn edit(&self, data: &Value) -> Result<Value> {
        self.tenant
            .execute(requests::edit_exhibition(&self.project_id, &self.exhibition_id, data)?)
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        self.tenant
            .execute(requests::delete_exhibition(&self.project_id, &self.exhibition_id)?)
            .await
    }

    pub fn captures(&self) -> Captures {
        Captures {
            exhibition: self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Captures {
    exhibition: Exhibition,
}

impl Captures {
    pub async fn list(&self) -> Result<Vec<Value>> {
        let exhibition = &self.exhibition;
        exhibition
            .tenant
            .fetch_list(
                Endpoint::ExhibitionCaptures,
                &[&exhibition.project_id, &exhibition.exhibition_id],
                relation::CAPTURE,
            )
            .await
    }

    pub fn capture(&self, capture_id: impl Into<String>) -> Capture {
        Capture {
            exhibition: self.exhibition.clone(),
            capture_id: capture_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Capture {
    exhibition: Exhibition,
    capture_id: String,
}

impl Capture {
    pub async fn get(&self) -> Result<Value> {
        let exhibition = &self.exhibition;
        exhibition
            .tenant
            .fetch(
                Endpoint::ExhibitionCapture,
                &[&exhibition.project_id, &exhibition.exhibition_id, &self.capture_id],
            )
            .await
    }

    pub async fn remove(&self) -> Result<Value> {
        let exhibition = &self.exhibition;
        exhibition
            .tenant
            .execute(requests::delete_exhibition_capture(
                &exhibition.project_id,
                &exhibition.exhibition_id,
                &self.capture_id,
            )?)
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
    async fn test_exhibition_and_capture_paths() {
        let executor = RecordingExecutor::returning(json!({
            "_embedded": {"be:capture": [{"id": "K1"}]}
        }));
        let (_, tenant) = testing::tenant(executor.clone());
        let exhibition = tenant.projects().project("P").exhibitions().exhibition("E");

        let captures = exhibition.captures().list().await.unwrap();
        assert_eq!(captures, vec![json!({"id": "K1"})]);
        assert_eq!(executor.last().path, "/projects/P/exhibitions/E/captures");

        exhibition.captures().capture("K1").remove().await.unwrap();
        let request = executor.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/projects/P/exhibitions/E/captures/K1");

        exhibition.edit(&json!({"title": "Spring"})).await.unwrap();
        assert_eq!(executor.last().path, "/projects/P/exhibitions/E");
    }

    #[tokio::test]
    async fn test_list_exhibitions() {
        let executor = RecordingExecutor::returning(json!({
            "_embedded": {"be:exhibition": [{"id": "E1"}, {"id": "E2"}]}
        }));
        let (_, tenant) = testing::tenant(executor.clone());

        let listed = tenant.projects().project("P").exhibitions().list().await.unwrap();

        assert_eq!(listed, vec![json!({"id": "E1"}), json!({"id": "E2"})]);
        assert_eq!(executor.last().path, "/projects/P/exhibitions");
    }
}
