//! URL-templated HTTP document provider.

use std::time::Duration;

use serde_json::Value;
use specrun_types::SpecDocument;
use tracing::debug;

use crate::errors::{LoadError, LoadResult};
use crate::provider::DocumentProvider;

/// Default document location: the canonical semantically versioned spec
/// corpus on GitHub.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/mustache/spec/master/specs/{group}.json";

/// A retrieval location template with a `{group}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitute the group name into the template.
    pub fn render(&self, group: &str) -> String {
        self.0.replace("{group}", group)
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_URL_TEMPLATE)
    }
}

/// Fetches specification documents over HTTP with a single blocking GET per
/// call. No retries, no caching, 30-second request timeout.
#[derive(Debug, Clone)]
pub struct HttpDocumentProvider {
    client: reqwest::blocking::Client,
    template: UrlTemplate,
}

impl HttpDocumentProvider {
    /// Create a provider for the given location template.
    pub fn new(template: UrlTemplate) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, template })
    }

    /// The URL this provider would fetch for a group.
    pub fn url_for(&self, group: &str) -> String {
        self.template.render(group)
    }
}

impl DocumentProvider for HttpDocumentProvider {
    fn fetch(&self, group: &str) -> LoadResult<SpecDocument> {
        let url = self.url_for(group);
        debug!(group, %url, "fetching specification document");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LoadError::Retrieval {
                group: group.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Retrieval {
                group: group.to_string(),
                reason: format!("{url} answered {status}"),
            });
        }

        let body = response.bytes().map_err(|e| LoadError::Retrieval {
            group: group.to_string(),
            reason: e.to_string(),
        })?;

        parse_document(group, &body)
    }
}

/// Parse a raw document body into a [`SpecDocument`].
///
/// The body must be a JSON object with a `tests` array of objects. Kept
/// separate from transport so the shape rules are testable without a server.
pub fn parse_document(group: &str, body: &[u8]) -> LoadResult<SpecDocument> {
    let parse_err = |reason: String| LoadError::Parse {
        group: group.to_string(),
        reason,
    };

    let value: Value =
        serde_json::from_slice(body).map_err(|e| parse_err(format!("invalid JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| parse_err("document body is not a JSON object".to_string()))?;

    let tests = object
        .get("tests")
        .ok_or_else(|| parse_err("document has no `tests` field".to_string()))?
        .as_array()
        .ok_or_else(|| parse_err("`tests` field is not an array".to_string()))?;

    let records = tests
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .as_object()
                .cloned()
                .ok_or_else(|| parse_err(format!("`tests[{i}]` is not an object")))
        })
        .collect::<LoadResult<Vec<_>>>()?;

    debug!(group, count = records.len(), "parsed specification document");
    Ok(SpecDocument::new(group, records))
}
