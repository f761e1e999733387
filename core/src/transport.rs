//! ureq-based executor for `HttpRequest` values.
//!
//! # Design
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data rather than `Err`; success/failure
//! classification belongs to the interpretation layer, not the transport.
//! `TransportError` only covers failures below HTTP: connection refused,
//! DNS, malformed request, unreadable body.

use std::fmt;

use ureq::http::{Method, Request};
use ureq::Agent;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// A failure below the HTTP layer (connect, DNS, body read).
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Build an agent that reports non-2xx statuses as responses, not errors.
pub fn agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute an `HttpRequest` and return the response as plain data.
///
/// Response header names arrive lowercase (the `http` types ureq is built
/// on keep them that way), so the interpretation layer can match directly.
pub fn send(agent: &Agent, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
    let method = match req.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    };

    let mut builder = Request::builder().method(method).uri(&req.path);
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let request = builder
        .body(req.body.clone().unwrap_or_default())
        .map_err(|err| TransportError(err.to_string()))?;

    let mut response = agent.run(request)?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
