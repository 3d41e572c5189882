//! Boundary message types for the host application.
//!
//! The host shell (an extension background/UI layer, or any embedder)
//! talks to the pipeline in JSON: a `getPageContent` request in, either an
//! extracted document or a single well-formed failure object out. A
//! degenerate extraction (diagnostic placeholder turn) is a *success*
//! response — the failure shape exists only for an unreachable host
//! document, where the caller should prompt a reload.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::extract::extract_document;
use crate::options::Options;
use crate::result::ExtractedDocument;
use crate::tree::PageLocation;

/// Request consumed from the host messaging layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PageRequest {
    /// Extract the current page's conversation.
    #[serde(rename_all = "camelCase")]
    GetPageContent {
        /// Collect image references alongside the text.
        #[serde(default)]
        include_images: bool,
    },
}

/// The hard-failure response shape; produced only when the host document
/// itself cannot be read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFailure {
    /// Stable machine-readable code (`"host_unreachable"`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Hint the caller can render to the user.
    pub suggestion: String,
    /// Best-effort platform identification from the hostname.
    pub platform_id: String,
}

/// Response produced for the host messaging layer.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageResponse {
    /// Successful (possibly degenerate) extraction.
    Content(Box<ExtractedDocument>),
    /// Host runtime unreachable.
    Failure(ExtractFailure),
}

/// Handles one boundary request against a rendered document.
#[must_use]
pub fn handle_request(request: &PageRequest, html: &str, url: &str) -> PageResponse {
    let PageRequest::GetPageContent { include_images } = request;
    let options = Options {
        include_images: *include_images,
        ..Options::default()
    };
    match extract_document(html, url, &options) {
        Ok(doc) => PageResponse::Content(Box::new(doc)),
        Err(err @ Error::HostUnreachable(_)) => PageResponse::Failure(ExtractFailure {
            code: "host_unreachable".to_string(),
            message: err.to_string(),
            suggestion: "Reload the page and try again.".to_string(),
            platform_id: platform_hint(url),
        }),
        Err(err) => PageResponse::Failure(ExtractFailure {
            code: "parse_error".to_string(),
            message: err.to_string(),
            suggestion: "Reload the page and try again.".to_string(),
            platform_id: platform_hint(url),
        }),
    }
}

fn platform_hint(url: &str) -> String {
    let location = PageLocation::parse(url);
    crate::adapters::registry()
        .iter()
        .find(|a| a.matches(&location))
        .map_or_else(|| "generic".to_string(), |a| a.id().to_string())
}
