//! Business Elements client
//!
//! Root of the accessor graph. Owns the executor and the session; every
//! tenant scope created from it shares both.

use crate::api::RequestDescriptor;
use crate::error::Result;
use crate::resource::Tenant;
use crate::transport::{ApiResponse, Execute, HttpExecutor, Session};
use serde_json::Value;
use std::sync::Arc;

/// Main client
#[derive(Clone)]
pub struct Client {
    executor: Arc<dyn Execute>,
    session: Session,
}

impl Client {
    /// Create a client talking HTTP to the API at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let session = Session::new();
        let http = HttpExecutor::new(base_url, session.clone())?;
        Ok(Self::with_executor(Arc::new(http), session))
    }

    /// Create a client over any executor.
    ///
    /// `session` must be the one the executor reads its token from, so that
    /// tokens issued through this client are presented on later requests.
    pub fn with_executor(executor: Arc<dyn Execute>, session: Session) -> Self {
        Self { executor, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Token issued by the last authentication-style operation.
    pub async fn authentication_token(&self) -> Option<String> {
        self.session.token().await
    }

    /// Scope subsequent operations to the tenant identified by `handle`.
    pub fn tenant(&self, handle: impl Into<String>) -> Tenant {
        Tenant::new(self.clone(), handle.into())
    }

    /// Execute a descriptor and return the parsed body.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        Ok(self.execute_raw(request).await?.body)
    }

    /// Execute a descriptor and return status, headers and body.
    pub async fn execute_raw(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        self.executor.execute(request).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
