//! # convoscrape
//!
//! Conversation extraction and classification from rendered chat pages.
//!
//! This library extracts a structured conversation (ordered user/assistant
//! turns) from the rendered document of a third-party chat application,
//! then classifies and filters it so only the user's actual intent
//! (optionally plus the assistant's replies) is forwarded for
//! summarization. It works across independently-evolving page structures,
//! pierces shadow roots, and never fails for reasons originating in the
//! shape of third-party content — malformed pages degrade to a best-effort
//! result instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use convoscrape::{extract, process, Options};
//!
//! let html = r#"<html><head><title>Sorting help - ChatGPT</title></head><body>
//! <div data-message-author-role="user">How do I sort a Vec in Rust?</div>
//! <div data-message-author-role="assistant">Use the sort method.</div>
//! </body></html>"#;
//!
//! let doc = extract(html, "https://chatgpt.com/c/123")?;
//! assert_eq!(doc.title, "Sorting help");
//! assert_eq!(doc.turns.len(), 2);
//!
//! // User-only text for summarization:
//! let text = process(&doc, &Options::default());
//! assert_eq!(text, "User: How do I sort a Vec in Rust?");
//! # Ok::<(), convoscrape::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Orchestrator → (platform adapter | heuristic scraper) → normalizer →
//! content processor → plain text. Every stage is a pure function of the
//! current document; nothing persists between calls.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Page tree abstraction: arena tree, HTML binding, fixture builder.
pub mod tree;

/// Document Tree Accessor: shadow-piercing text collection and queries.
pub mod accessor;

/// Platform adapters and the fixed-priority registry.
pub mod adapters;

/// Heuristic Scraper: the fallback classifier cascade.
pub mod heuristic;

/// Normalizer: dedup and UI-noise stripping over turns.
pub mod normalize;

/// Content Processor: role filtering before summarization.
pub mod processor;

/// Character encoding detection for the bytes entry point.
pub mod encoding;

/// Boundary message types for the host application.
pub mod message;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use processor::process;
pub use result::{ExtractedDocument, Role, Turn};

/// Extracts a conversation from an HTML document using default options.
///
/// `url` is the page's location; adapters match on its hostname. An
/// unparseable URL is fine — only the generic adapter will match.
///
/// Returns a document whose `raw_text` is always populated, possibly with
/// a diagnostic placeholder when the page held no readable conversation.
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str, url: &str) -> Result<ExtractedDocument> {
    extract_with_options(html, url, &Options::default())
}

/// Extracts a conversation from an HTML document with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, url: &str, options: &Options) -> Result<ExtractedDocument> {
    extract::extract_document(html, url, options)
}

/// Extracts a conversation from raw HTML bytes, sniffing the character
/// encoding from meta tags first.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8], url: &str) -> Result<ExtractedDocument> {
    extract_bytes_with_options(html, url, &Options::default())
}

/// Extracts a conversation from raw HTML bytes with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(
    html: &[u8],
    url: &str,
    options: &Options,
) -> Result<ExtractedDocument> {
    let html_str = encoding::to_utf8(html);
    extract_with_options(&html_str, url, options)
}

/// Extracts a conversation from a pre-built page tree (the fixture
/// binding); embedders with their own tree source use this instead of the
/// HTML entry points.
#[must_use]
pub fn extract_from_page(page: &tree::Page, options: &Options) -> ExtractedDocument {
    extract::extract_from_page(page, options)
}
