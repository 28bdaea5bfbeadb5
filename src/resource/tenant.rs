//! Tenant scope
//!
//! Every request made through a tenant carries the tenant handle header and
//! the tenant's default options.

use super::{Applications, Attributes, Concepts, Organizations, Projects, Users, ValueAccessor};
use crate::api::{embedded_items, requests, Endpoint, RequestDescriptor, RequestOptions};
use crate::client::Client;
use crate::error::Result;
use crate::transport::{ApiResponse, AUTHENTICATION_TOKEN_HEADER, TENANT_HEADER};
use serde_json::Value;

/// Accessor for one tenant.
#[derive(Debug, Clone)]
pub struct Tenant {
    client: Client,
    handle: String,
    /// Tenant header plus caller defaults, applied to every request.
    options: RequestOptions,
}

impl Tenant {
    pub(crate) fn new(client: Client, handle: String) -> Self {
        let options = RequestOptions::new().header(TENANT_HEADER, handle.clone());
        Self {
            client,
            handle,
            options,
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Copy of this tenant whose requests also carry `options`.
    ///
    /// The tenant header cannot be overridden this way.
    pub fn with_options(&self, options: RequestOptions) -> Self {
        let scoped = RequestOptions::new()
            .header(TENANT_HEADER, self.handle.clone())
            .merge(&options)
            .merge(&self.options);
        Self {
            client: self.client.clone(),
            handle: self.handle.clone(),
            options: scoped,
        }
    }

    /// Execute a descriptor within this tenant and return the parsed body.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        Ok(self.execute_raw(request).await?.body)
    }

    /// Execute a descriptor within this tenant, keeping status and headers.
    pub async fn execute_raw(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        self.client
            .execute_raw(request.merged_with(&self.options))
            .await
    }

    /// GET a single resource.
    pub(crate) async fn fetch(&self, endpoint: Endpoint, params: &[&str]) -> Result<Value> {
        self.execute(RequestDescriptor::get(endpoint, params)?).await
    }

    /// GET a collection and unwrap its embedded `relation` items.
    pub(crate) async fn fetch_list(
        &self,
        endpoint: Endpoint,
        params: &[&str],
        relation: &str,
    ) -> Result<Vec<Value>> {
        let body = self.fetch(endpoint, params).await?;
        Ok(embedded_items(body, relation))
    }

    /// Execute a token-issuing request.
    ///
    /// A token found in the `Authentication-Token` response header is stored
    /// on the session and returned next to the body. A blank header counts as
    /// no token.
    pub(crate) async fn execute_issuing_token(
        &self,
        request: RequestDescriptor,
    ) -> Result<(Option<String>, Value)> {
        let response = self.execute_raw(request).await?;
        let token = response
            .header(AUTHENTICATION_TOKEN_HEADER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        match &token {
            Some(token) => self.client.session().set_token(token.clone()).await,
            None => tracing::warn!(
                "Response to {} carried no authentication token",
                response.status
            ),
        }

        Ok((token, response.body))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Retrieve the current tenant.
    pub async fn get(&self) -> Result<Value> {
        self.fetch(Endpoint::CurrentTenant, &[]).await
    }

    /// Authenticate and store the issued token on the session.
    pub async fn login(&self, email_address: &str, password: &str) -> Result<Option<String>> {
        let request = requests::login(email_address, password)?;
        let (token, _) = self.execute_issuing_token(request).await?;
        Ok(token)
    }

    /// End the current authentication. The session is cleared once the
    /// server accepts the request.
    pub async fn logout(&self) -> Result<Value> {
        let body = self.execute(requests::logout()?).await?;
        self.client.session().clear().await;
        Ok(body)
    }

    pub async fn is_email_available(&self, email_address: &str) -> Result<bool> {
        self.users().is_email_available(email_address).await
    }

    pub async fn create_user(&self, email_address: &str, password: Option<&str>) -> Result<Value> {
        self.users().create(email_address, password).await
    }

    pub async fn activate_user(
        &self,
        user_id: &str,
        activation_code: &str,
    ) -> Result<Option<String>> {
        self.users().activate(user_id, activation_code).await
    }

    // =========================================================================
    // Drill-down
    // =========================================================================

    pub fn users(&self) -> Users {
        Users::new(self.clone())
    }

    pub fn projects(&self) -> Projects {
        Projects::new(self.clone())
    }

    pub fn organizations(&self) -> Organizations {
        Organizations::new(self.clone())
    }

    pub fn applications(&self) -> Applications {
        Applications::new(self.clone())
    }

    pub fn concepts(&self) -> Concepts {
        Concepts::new(self.clone())
    }

    pub fn attributes(&self) -> Attributes {
        Attributes::new(self.clone())
    }

    pub fn value(&self, value_id: impl Into<String>) -> ValueAccessor {
        ValueAccessor::new(self.clone(), value_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::testing::{self, response_with_header, RecordingExecutor};
    use crate::transport::AuthState;
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_requests_carry_tenant_header() {
        let executor = RecordingExecutor::returning(json!({"handle": "example.com"}));
        let (_, tenant) = testing::tenant(executor.clone());

        let body = tenant.get().await.unwrap();

        assert_eq!(body, json!({"handle": "example.com"}));
        let request = executor.last();
        assert_eq!(request.path, "/tenants/current");
        assert_eq!(request.headers[TENANT_HEADER], "example.com");
    }

    #[tokio::test]
    async fn test_with_options_adds_headers_but_keeps_tenant() {
        let executor = RecordingExecutor::returning(Value::Null);
        let (_, tenant) = testing::tenant(executor.clone());

        let scoped = tenant.with_options(
            RequestOptions::new()
                .header(TENANT_HEADER, "other.com")
                .header("x-request-id", "42"),
        );
        scoped.get().await.unwrap();

        let request = executor.last();
        assert_eq!(request.headers[TENANT_HEADER], "example.com");
        assert_eq!(request.headers["x-request-id"], "42");
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let executor = RecordingExecutor::new(|_| {
            Ok(response_with_header(Value::Null, AUTHENTICATION_TOKEN_HEADER, "T"))
        });
        let (client, tenant) = testing::tenant(executor.clone());

        let token = tenant.login("a@example.com", "secret").await.unwrap();

        assert_eq!(token.as_deref(), Some("T"));
        assert_eq!(client.authentication_token().await.as_deref(), Some("T"));
        let request = executor.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/authentications/current");
    }

    #[tokio::test]
    async fn test_blank_token_header_is_ignored() {
        let executor = RecordingExecutor::new(|_| {
            Ok(response_with_header(Value::Null, AUTHENTICATION_TOKEN_HEADER, "  "))
        });
        let (client, tenant) = testing::tenant(executor);

        let token = tenant.login("a@example.com", "secret").await.unwrap();

        assert!(token.is_none());
        assert_eq!(client.session().state().await, AuthState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_validation_happens_before_execution() {
        let executor = RecordingExecutor::returning(Value::Null);
        let (client, tenant) = testing::tenant(executor.clone());

        let err = tenant.login("", "secret").await.unwrap_err();

        assert!(matches!(err, Error::Validation("An email address is required.")));
        assert!(executor.requests().is_empty());
        assert_eq!(client.session().state().await, AuthState::Anonymous);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let executor = RecordingExecutor::returning(Value::Null);
        let (client, tenant) = testing::tenant(executor.clone());
        client.session().set_token("T").await;

        tenant.logout().await.unwrap();

        assert_eq!(client.session().state().await, AuthState::Anonymous);
        assert_eq!(executor.last().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_session() {
        let executor = RecordingExecutor::failing(StatusCode::INTERNAL_SERVER_ERROR);
        let (client, tenant) = testing::tenant(executor);
        client.session().set_token("T").await;

        assert!(tenant.logout().await.is_err());
        assert_eq!(client.session().state().await, AuthState::Authenticated);
    }

    #[tokio::test]
    async fn test_create_user_delegates_to_users() {
        let executor = RecordingExecutor::returning(json!({}));
        let (_, tenant) = testing::tenant(executor.clone());

        tenant.create_user("test@example.com", None).await.unwrap();

        let request = executor.last();
        assert_eq!(request.path, "/users");
        assert_eq!(request.body, Some(json!({"emailAddress": "test@example.com"})));
        assert_eq!(request.headers[TENANT_HEADER], "example.com");
    }

    #[tokio::test]
    async fn test_activate_user_requires_code() {
        let executor = RecordingExecutor::returning(Value::Null);
        let (_, tenant) = testing::tenant(executor.clone());

        let err = tenant
            .activate_user("cb97a61a-32ca-408c-afb6-b9f11abdf881", "")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation("An activation code is required.")));
        assert!(executor.requests().is_empty());
    }
}
