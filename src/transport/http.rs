//! HTTP executor backed by reqwest

use super::{ApiResponse, Execute, Session, AUTHENTICATION_TOKEN_HEADER};
use crate::api::RequestDescriptor;
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

const USER_AGENT: &str = concat!("business-elements/", env!("CARGO_PKG_VERSION"));

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Executor sending descriptors to the API over HTTP.
///
/// The session token, when present, is presented in the
/// `Authentication-Token` request header unless the descriptor already
/// carries one.
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpExecutor {
    /// Create an executor for the API rooted at `base_url`.
    pub fn new(base_url: &str, session: Session) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(client, base_url, session)
    }

    /// Use a preconfigured reqwest client (timeouts, proxies, ...).
    pub fn with_client(client: Client, base_url: &str, session: Session) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an endpoint path, keeping any base path prefix.
    fn url_for(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        let url = self.url_for(&request.path)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let has_token_header = request
            .headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case(AUTHENTICATION_TOKEN_HEADER));
        if !has_token_header {
            if let Some(token) = self.session.token().await {
                builder = builder.header(AUTHENTICATION_TOKEN_HEADER, token);
            }
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            let preview = sanitize_for_log(&text);
            tracing::error!("API error: {} - {}", status, preview);
            return Err(Error::Server {
                status,
                body: preview,
            });
        }

        // Handle empty response
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

impl Execute for HttpExecutor {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<ApiResponse>> {
        Box::pin(self.send(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.contains("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("bad\nrequest\t!"), "badrequest!");
    }

    #[test]
    fn test_sanitize_multibyte_does_not_panic() {
        let body = "é".repeat(300);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
    }

    #[test]
    fn test_url_keeps_base_path() {
        let executor = HttpExecutor::new("http://api.fake-server/v1/", Session::new()).unwrap();
        assert_eq!(executor.base_url(), "http://api.fake-server/v1");
        assert_eq!(
            executor.url_for("/projects/P1").unwrap().as_str(),
            "http://api.fake-server/v1/projects/P1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpExecutor::new("not a url", Session::new()).err().unwrap();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
