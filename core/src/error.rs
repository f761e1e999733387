//! Error types for the localized API client.
//!
//! # Design
//! Every request failure surfaces as a single `RequestError` carrying the
//! server's reason code and the localized message resolved against the
//! loaded string table. Reason codes are an open, server-defined vocabulary,
//! so `kind` is a plain `String` rather than an enum; callers branch on it
//! programmatically and display `message` to users. Anything the client
//! cannot classify (non-JSON responses, unparseable bodies, transport
//! failures, unrecognized reason codes) collapses into `UNKNOWN_ERROR`.

use std::fmt;

/// Catch-all reason code for failures without a resolvable server reason.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Default message for `UNKNOWN_ERROR`, used before any table is loaded.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error has occurred.";

/// A failed API request: the server's reason code plus its localized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    /// Reason code reported by the server, or [`UNKNOWN_ERROR`].
    pub kind: String,
    /// Message resolved from the string table, or the generic fallback.
    pub message: String,
}

impl RequestError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// True when the failure carries no recognized reason code.
    pub fn is_unknown(&self) -> bool {
        self.kind == UNKNOWN_ERROR
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RequestError {}
