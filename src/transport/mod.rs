//! Execution layer
//!
//! The resource accessors never talk to the network directly. They hand a
//! [`RequestDescriptor`] to an [`Execute`] implementation and get an
//! [`ApiResponse`] back. [`HttpExecutor`] is the reqwest-backed
//! implementation; anything else honouring the trait can stand in for it.
//!
//! # Module Structure
//!
//! - [`http`] - reqwest executor
//! - [`session`] - Authentication token state

pub mod http;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use crate::api::RequestDescriptor;
use crate::error::Result;
use futures::future::BoxFuture;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

pub use http::HttpExecutor;
pub use session::{AuthState, Session};

/// Request header carrying the tenant handle.
pub const TENANT_HEADER: &str = "tenant";

/// Header carrying the authentication token, both in responses that issue
/// it and in requests that present it.
pub const AUTHENTICATION_TOKEN_HEADER: &str = "Authentication-Token";

/// Raw response handed back by an executor.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, `Value::Null` when the body was empty.
    pub body: Value,
}

impl ApiResponse {
    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Sends request descriptors over the wire.
///
/// Implementations own everything below the descriptor: URL joining,
/// presenting the session token, timeouts and any retry policy. Failures are
/// returned as errors and reach callers unchanged.
pub trait Execute: Send + Sync {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<ApiResponse>>;
}
