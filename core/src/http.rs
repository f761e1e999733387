//! HTTP transport types for the build/send/interpret split.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! gateway builds `HttpRequest` values and interprets `HttpResponse` values
//! as pure functions; the only code touching the network is the executor in
//! `transport`. This separation keeps request construction and response
//! classification deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can be built,
//! stored, and replayed freely (the vector tests do exactly that).

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether request data travels in the body (everything but GET).
    pub fn has_body(self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// An HTTP request described as plain data.
///
/// Built by `StringTable::build_fetch` and `RequestGateway::build_request`.
/// The executor in `transport` turns it into an actual network call.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after the round-trip, then passed to the
/// pure interpretation code. Header names are normalized to lowercase by
/// the executor so lookups here can compare directly.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// The `content-type` header value, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    /// True when the content-type indicates a JSON body.
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|value| value.contains("application/json"))
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
