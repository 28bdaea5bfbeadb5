//! Request descriptors
//!
//! A [`RequestDescriptor`] is the declarative form of a request: method,
//! resolved path, optional JSON body and extra headers. Builders produce
//! them, the executor consumes them.

use super::endpoint::Endpoint;
use crate::error::Result;
use reqwest::Method;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Header names are case-insensitive; they are stored lowercased.
fn header_key(name: impl Into<String>) -> String {
    let mut name = name.into();
    name.make_ascii_lowercase();
    name
}

/// Add `name` unless a header of that name, in any case, is already set.
fn insert_missing_header(headers: &mut BTreeMap<String, String>, name: &str, value: &str) {
    if !headers.keys().any(|existing| existing.eq_ignore_ascii_case(name)) {
        headers.insert(header_key(name), value.to_string());
    }
}

/// Declarative description of a single API request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub headers: BTreeMap<String, String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: BTreeMap::new(),
        }
    }

    /// A GET against a resolved endpoint.
    pub fn get(endpoint: Endpoint, params: &[&str]) -> Result<Self> {
        Ok(Self::new(Method::GET, endpoint.path(params)?))
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(header_key(name), value.into());
        self
    }

    /// Merge caller options into this descriptor.
    ///
    /// Caller headers and body keys are added alongside the ones already
    /// present; on a conflicting key the descriptor's own value is kept.
    /// Header names conflict regardless of case.
    /// Caller body keys only merge into an object body. A descriptor without
    /// a body takes the caller's body as is.
    pub fn merged_with(mut self, options: &RequestOptions) -> Self {
        for (name, value) in &options.headers {
            insert_missing_header(&mut self.headers, name, value);
        }

        if let Some(extra) = &options.body {
            match self.body {
                Some(Value::Object(ref mut body)) => {
                    for (key, value) in extra {
                        body.entry(key.clone()).or_insert_with(|| value.clone());
                    }
                },
                None => self.body = Some(Value::Object(extra.clone())),
                Some(_) => {
                    tracing::debug!(
                        "Ignoring option body keys for non-object body on {}",
                        self.path
                    );
                },
            }
        }

        self
    }
}

/// Caller-supplied extras applied to every request made through a scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
    pub body: Option<Map<String, Value>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(header_key(name), value.into());
        self
    }

    pub fn body_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.body
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Combine two option sets; keys already in `self` win.
    pub fn merge(mut self, other: &RequestOptions) -> Self {
        for (name, value) in &other.headers {
            insert_missing_header(&mut self.headers, name, value);
        }
        if let Some(extra) = &other.body {
            let body = self.body.get_or_insert_with(Map::new);
            for (key, value) in extra {
                body.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_resolves_path() {
        let request = RequestDescriptor::get(Endpoint::Instance, &["P1", "I1"]).unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/projects/P1/instances/I1");
        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_merge_adds_caller_headers_and_keeps_builder_ones() {
        let request = RequestDescriptor::new(Method::DELETE, "/authentications/current")
            .with_header("x-request-id", "builder");
        let options = RequestOptions::new()
            .header("x-request-id", "caller")
            .header("x-trace", "abc");

        let merged = request.merged_with(&options);
        assert_eq!(merged.headers["x-request-id"], "builder");
        assert_eq!(merged.headers["x-trace"], "abc");
    }

    #[test]
    fn test_merge_body_keys() {
        let request = RequestDescriptor::new(Method::POST, "/projects")
            .with_body(json!({"name": "Alpha"}));
        let options = RequestOptions::new()
            .body_field("name", json!("Overwritten"))
            .body_field("tags", json!(["a"]));

        let merged = request.merged_with(&options);
        assert_eq!(merged.body, Some(json!({"name": "Alpha", "tags": ["a"]})));
    }

    #[test]
    fn test_merge_into_empty_body() {
        let request = RequestDescriptor::new(Method::GET, "/projects");
        let merged = request.merged_with(&RequestOptions::new().body_field("q", json!(1)));
        assert_eq!(merged.body, Some(json!({"q": 1})));
    }

    #[test]
    fn test_merge_with_default_options_is_identity() {
        let request = RequestDescriptor::new(Method::PUT, "/users/me").with_body(json!([1, 2]));
        let merged = request.clone().merged_with(&RequestOptions::default());
        assert_eq!(merged, request);
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let request =
            RequestDescriptor::new(Method::GET, "/projects").with_header("tenant", "a.com");
        let options = RequestOptions::new().header("Tenant", "b.com").header("X-Trace", "1");

        let merged = request.merged_with(&options);
        assert_eq!(merged.headers.len(), 2);
        assert_eq!(merged.headers["tenant"], "a.com");
        assert_eq!(merged.headers["x-trace"], "1");
    }

    #[test]
    fn test_caller_inserted_header_still_conflicts() {
        let mut request = RequestDescriptor::new(Method::GET, "/projects");
        request.headers.insert("Tenant".to_string(), "a.com".to_string());

        let merged = request.merged_with(&RequestOptions::new().header("tenant", "b.com"));
        assert_eq!(merged.headers.len(), 1);
        assert_eq!(merged.headers["Tenant"], "a.com");
    }

    #[test]
    fn test_options_merge_prefers_self() {
        let scoped = RequestOptions::new().header("tenant", "a.com");
        let defaults = RequestOptions::new().header("tenant", "b.com").header("x", "1");
        let merged = scoped.merge(&defaults);
        assert_eq!(merged.headers["tenant"], "a.com");
        assert_eq!(merged.headers["x"], "1");

        let merged = RequestOptions::new()
            .header("tenant", "a.com")
            .merge(&RequestOptions::new().header("TENANT", "b.com"));
        assert_eq!(merged.headers.len(), 1);
        assert_eq!(merged.headers["tenant"], "a.com");
    }
}
