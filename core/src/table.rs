//! Localized reason-code string table and its fetch-and-fallback logic.
//!
//! # Design
//! `StringTable` holds the reason→message map for one language and is the
//! only mutable state in the crate. Fetching is split in two: `build_fetch`
//! produces the request and `absorb` classifies the response, both pure;
//! `load_language` orchestrates the fallback sequence
//! over an injected transport closure, so every branch unit-tests without a
//! network. Transport failures during a load are logged and treated as an
//! empty table: a client that cannot reach the localization service keeps
//! running on whatever table it already holds.

use std::collections::HashMap;

use crate::error::{UNKNOWN_ERROR, UNKNOWN_ERROR_MESSAGE};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::TransportError;

/// Language loaded when the requested one is unavailable.
pub const DEFAULT_LANG: &str = "en";

/// Reason→message map for the active language.
#[derive(Debug, Clone)]
pub struct StringTable {
    host: String,
    lang: String,
    strings: HashMap<String, String>,
    loaded: bool,
}

impl StringTable {
    /// Create a table bound to `host`, seeded with the generic
    /// `UNKNOWN_ERROR` entry so `resolve` is total from the start.
    pub fn new(host: &str) -> Self {
        let mut strings = HashMap::new();
        strings.insert(UNKNOWN_ERROR.to_string(), UNKNOWN_ERROR_MESSAGE.to_string());
        Self {
            host: host.trim_end_matches('/').to_string(),
            lang: DEFAULT_LANG.to_string(),
            strings,
            loaded: false,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Language of the currently held table.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// True once a load attempt has completed, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn strings(&self) -> &HashMap<String, String> {
        &self.strings
    }

    /// Request for the string table of `lang`.
    pub fn build_fetch(&self, lang: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/strings/{lang}.json", self.host),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Classify a fetch response into a table.
    ///
    /// Anything other than a 2xx JSON response parsing to a string→string
    /// map yields an empty map, which `load_language` treats as "language
    /// not available".
    pub fn absorb(response: &HttpResponse) -> HashMap<String, String> {
        if !response.is_success() || !response.is_json() {
            return HashMap::new();
        }
        serde_json::from_str(&response.body).unwrap_or_default()
    }

    /// Load the table for `code`, falling back to [`DEFAULT_LANG`] when the
    /// language is unavailable.
    ///
    /// The held table is replaced wholesale on success and left untouched
    /// when both attempts come back empty. `loaded` is set either way.
    pub fn load_language<F>(&mut self, code: &str, mut send: F)
    where
        F: FnMut(&HttpRequest) -> Result<HttpResponse, TransportError>,
    {
        let mut lang = code;
        let mut strings = self.fetch(lang, &mut send);
        if strings.is_empty() && code != DEFAULT_LANG {
            lang = DEFAULT_LANG;
            strings = self.fetch(lang, &mut send);
        }
        if !strings.is_empty() {
            strings
                .entry(UNKNOWN_ERROR.to_string())
                .or_insert_with(|| UNKNOWN_ERROR_MESSAGE.to_string());
            self.strings = strings;
            self.lang = lang.to_string();
        }
        self.loaded = true;
    }

    fn fetch<F>(&self, lang: &str, send: &mut F) -> HashMap<String, String>
    where
        F: FnMut(&HttpRequest) -> Result<HttpResponse, TransportError>,
    {
        let request = self.build_fetch(lang);
        match send(&request) {
            Ok(response) => Self::absorb(&response),
            Err(err) => {
                tracing::warn!(lang, error = %err, "string table fetch failed");
                HashMap::new()
            }
        }
    }

    /// Localized message for `code`, or the `UNKNOWN_ERROR` entry when the
    /// code is not in the table. Never fails.
    pub fn resolve(&self, code: &str) -> &str {
        self.strings
            .get(code)
            .or_else(|| self.strings.get(UNKNOWN_ERROR))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }

    /// Whether `code` itself resolves, as opposed to falling back.
    pub fn contains(&self, code: &str) -> bool {
        self.strings.contains_key(code)
    }
}
