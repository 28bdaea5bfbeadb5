//! In-memory executor for unit tests

use super::{ApiResponse, Execute, Session};
use crate::api::RequestDescriptor;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::resource::Tenant;
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&RequestDescriptor) -> Result<ApiResponse> + Send + Sync>;

/// Records every descriptor it receives and answers from a closure.
pub(crate) struct RecordingExecutor {
    requests: Mutex<Vec<RequestDescriptor>>,
    responder: Responder,
}

impl RecordingExecutor {
    pub fn new(
        responder: impl Fn(&RequestDescriptor) -> Result<ApiResponse> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Answer every request with 200 and `body`.
    pub fn returning(body: Value) -> Arc<Self> {
        Self::new(move |_| Ok(response(StatusCode::OK, body.clone())))
    }

    /// Reject every request with a server error.
    pub fn failing(status: StatusCode) -> Arc<Self> {
        Self::new(move |_| {
            Err(Error::Server {
                status,
                body: String::new(),
            })
        })
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RequestDescriptor {
        self.requests()
            .pop()
            .expect("no request was executed")
    }
}

impl Execute for RecordingExecutor {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<ApiResponse>> {
        let result = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        Box::pin(async move { result })
    }
}

pub(crate) fn response(status: StatusCode, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        headers: HeaderMap::new(),
        body,
    }
}

pub(crate) fn response_with_header(body: Value, name: &'static str, value: &str) -> ApiResponse {
    let mut response = response(StatusCode::OK, body);
    response.headers.insert(
        HeaderName::from_bytes(name.as_bytes()).unwrap(),
        HeaderValue::from_str(value).unwrap(),
    );
    response
}

/// Client and `example.com` tenant wired to `executor`.
pub(crate) fn tenant(executor: Arc<RecordingExecutor>) -> (Client, Tenant) {
    let client = Client::with_executor(executor, Session::new());
    let tenant = client.tenant("example.com");
    (client, tenant)
}
