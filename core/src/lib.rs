//! Localized API error reporting client.
//!
//! # Overview
//! Fetches a per-language string table (reason code → message) from a
//! server, then wraps outgoing HTTP requests so failure responses carrying
//! a machine-readable `reason` are surfaced as human-readable, localized
//! `RequestError`s. Lookups fall back to the default language and to a
//! generic unknown-error message, so error display never dead-ends.
//!
//! # Design
//! - `StringTable` owns the reason→message map and the fetch-and-fallback
//!   load logic; replacement is wholesale, never a merge.
//! - `RequestGateway` owns a table plus a configured agent; each operation
//!   is split into a pure build step and a pure interpret step around a
//!   single network send, so the non-trivial logic tests without I/O.
//! - Domain clients hold a gateway and expose typed methods over its
//!   `get`/`post`/`put`/`patch`/`delete` sugar (composition, no base-class
//!   hierarchy).
//! - Transport failures while loading the table are logged and swallowed;
//!   the client stays usable on whatever table it already holds. Transport
//!   failures during a request surface as `UNKNOWN_ERROR`.

pub mod error;
pub mod gateway;
pub mod http;
pub mod table;
pub mod transport;

pub use error::{RequestError, UNKNOWN_ERROR, UNKNOWN_ERROR_MESSAGE};
pub use gateway::{RequestGateway, RequestOptions};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use table::{StringTable, DEFAULT_LANG};
pub use transport::TransportError;
