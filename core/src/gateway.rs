//! Request building, execution, and localized failure interpretation.
//!
//! # Design
//! `RequestGateway` composes the pure halves, `build_request` and
//! `interpret`, around the ureq executor, mirroring the build/send/
//! interpret split used for the string table. Success bodies deserialize
//! into whatever type the caller asks for; every failure collapses into one
//! `RequestError` whose message comes from the owned `StringTable`.
//! Domain-specific clients are expected to hold a gateway and call the
//! method sugar, not to subclass anything.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{RequestError, UNKNOWN_ERROR};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::table::StringTable;
use crate::transport;

/// Per-request options. Headers are passed through verbatim, so opaque
/// concerns like `authorization` ride along untouched.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Issues HTTP requests against one host and translates failure responses
/// into localized `RequestError`s.
pub struct RequestGateway {
    table: StringTable,
    agent: ureq::Agent,
}

impl RequestGateway {
    /// Gateway bound to `host`, holding its own string table with only the
    /// generic `UNKNOWN_ERROR` entry until `init_language` runs.
    pub fn new(host: &str) -> Self {
        Self {
            table: StringTable::new(host),
            agent: transport::agent(),
        }
    }

    pub fn host(&self) -> &str {
        self.table.host()
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    /// Mutable table access, for loading over a custom transport or
    /// pre-seeding in tests.
    pub fn table_mut(&mut self) -> &mut StringTable {
        &mut self.table
    }

    /// Load the string table for `code`, falling back to the default
    /// language. Requests made before this still work; their failures just
    /// resolve against the built-in table.
    pub fn init_language(&mut self, code: &str) {
        let agent = &self.agent;
        self.table
            .load_language(code, |req| transport::send(agent, req));
    }

    /// Build the request for `issue` without sending it.
    ///
    /// GET serializes `data` into the query string; every other method
    /// JSON-serializes it into the body and adds `content-type:
    /// application/json` unless the caller's options already name one.
    pub fn build_request(
        &self,
        path: &str,
        method: HttpMethod,
        data: &impl Serialize,
        options: &RequestOptions,
    ) -> Result<HttpRequest, RequestError> {
        let mut headers = options.headers.clone();
        if !method.has_body() {
            let query = serde_urlencoded::to_string(data).map_err(|err| {
                tracing::debug!(path, error = %err, "query serialization failed");
                self.unknown_error()
            })?;
            let path = if query.is_empty() {
                format!("{}{path}", self.host())
            } else {
                format!("{}{path}?{query}", self.host())
            };
            return Ok(HttpRequest {
                method,
                path,
                headers,
                body: None,
            });
        }

        let body = serde_json::to_string(data).map_err(|err| {
            tracing::debug!(path, error = %err, "body serialization failed");
            self.unknown_error()
        })?;
        let has_content_type = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if !has_content_type {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.host()),
            headers,
            body: Some(body),
        })
    }

    /// Classify a response: 2xx JSON deserializes into `T`, anything else
    /// becomes a `RequestError` resolved against the string table.
    pub fn interpret<T: DeserializeOwned>(&self, response: &HttpResponse) -> Result<T, RequestError> {
        if !response.is_json() {
            return Err(self.unknown_error());
        }
        let value: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|_| self.unknown_error())?;

        if !response.is_success() {
            let reason = value.get("reason").and_then(serde_json::Value::as_str);
            return Err(match reason {
                Some(code) if self.table.contains(code) => {
                    RequestError::new(code, self.table.resolve(code))
                }
                _ => self.unknown_error(),
            });
        }

        serde_json::from_value(value).map_err(|_| self.unknown_error())
    }

    /// Build, send, and interpret one request. No retries; a transport
    /// failure surfaces as `UNKNOWN_ERROR`.
    pub fn issue<T: DeserializeOwned>(
        &self,
        path: &str,
        method: HttpMethod,
        data: &impl Serialize,
        options: &RequestOptions,
    ) -> Result<T, RequestError> {
        let request = self.build_request(path, method, data, options)?;
        let response = transport::send(&self.agent, &request).map_err(|err| {
            tracing::debug!(path, error = %err, "request failed below HTTP");
            self.unknown_error()
        })?;
        self.interpret(&response)
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        data: &impl Serialize,
    ) -> Result<T, RequestError> {
        self.issue(path, HttpMethod::Get, data, &RequestOptions::new())
    }

    pub fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        data: &impl Serialize,
    ) -> Result<T, RequestError> {
        self.issue(path, HttpMethod::Post, data, &RequestOptions::new())
    }

    pub fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        data: &impl Serialize,
    ) -> Result<T, RequestError> {
        self.issue(path, HttpMethod::Put, data, &RequestOptions::new())
    }

    pub fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        data: &impl Serialize,
    ) -> Result<T, RequestError> {
        self.issue(path, HttpMethod::Patch, data, &RequestOptions::new())
    }

    pub fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        data: &impl Serialize,
    ) -> Result<T, RequestError> {
        self.issue(path, HttpMethod::Delete, data, &RequestOptions::new())
    }

    fn unknown_error(&self) -> RequestError {
        RequestError::new(UNKNOWN_ERROR, self.table.resolve(UNKNOWN_ERROR))
    }
}
