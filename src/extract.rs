//! Scrape Orchestrator.
//!
//! Selects the first matching adapter, invokes it, and escalates through a
//! fixed fallback chain when the result is empty or too short: heuristic
//! scraper (via the generic adapter) → whole-page visible text → a
//! diagnostic placeholder turn. The contract is to always return a
//! non-null result object — content-shape problems degrade, they never
//! throw. The only surfaced error is an unreachable host document.

use tracing::{debug, trace};

use crate::accessor::{collect_text, deep_query_all, tag_is};
use crate::adapters;
use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::options::Options;
use crate::patterns::{BARE_TITLES, INIT_ARTIFACT, TITLE_SUFFIXES};
use crate::result::{ExtractedDocument, Role, Turn};
use crate::tree::{NodeId, Page, PageTree};

/// Runs the full extraction pipeline over an HTML document.
///
/// # Errors
///
/// Returns [`Error::HostUnreachable`] when the document is empty or
/// whitespace — the one condition that cannot degrade to a best-effort
/// result. Everything else produces a document, possibly a degenerate one.
pub fn extract_document(html: &str, url: &str, options: &Options) -> Result<ExtractedDocument> {
    if html.trim().is_empty() {
        return Err(Error::HostUnreachable(
            "document has no content to read".to_string(),
        ));
    }
    let page = Page::from_html(html, url);
    Ok(extract_from_page(&page, options))
}

/// Pipeline body over an already-built page; the fixture-tree entry point
/// for tests and embedders with their own tree binding.
#[must_use]
pub fn extract_from_page(page: &Page, options: &Options) -> ExtractedDocument {
    let registry = adapters::registry();
    let adapter = registry.iter().find(|a| a.matches(&page.location));

    // The catch-all makes a miss impossible; the map_or keeps that
    // assumption out of the type system.
    let (platform_id, turns) = adapter.map_or_else(
        || ("generic", Vec::new()),
        |a| {
            trace!(adapter = a.id(), host = page.location.host(), "adapter selected");
            (a.id(), a.extract(page))
        },
    );

    // Artifact sweep over individual turns, then normalization.
    let mut turns: Vec<Turn> = turns
        .into_iter()
        .filter(|turn| !INIT_ARTIFACT.is_match(&turn.content))
        .collect();
    turns = normalize(turns);

    let mut raw_text = turns
        .iter()
        .map(|turn| turn.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    if raw_text.trim().chars().count() < options.min_text_len {
        debug!(
            platform = platform_id,
            len = raw_text.len(),
            "extraction too short, falling back to whole-page text"
        );
        raw_text = collect_text(&page.tree, PageTree::ROOT, &options.ignore_substrings);
    }

    if raw_text.trim().chars().count() < options.min_text_len {
        let host = page.location.host();
        let host = if host.is_empty() { "unknown host" } else { host };
        let diagnostic = format!(
            "No readable conversation content was found on {host} (visible text length: {} characters).",
            raw_text.trim().chars().count()
        );
        debug!(platform = platform_id, "degenerate result synthesized");
        turns = vec![Turn::indexed(Role::User, diagnostic.clone(), 0)];
        raw_text = diagnostic;
    }

    // Second artifact sweep on the final text: adapters that bypassed the
    // per-turn path (whole-page fallback) still get cleaned.
    let raw_text = INIT_ARTIFACT.replace_all(&raw_text, "").trim().to_string();

    let images = if options.include_images {
        collect_images(&page.tree, options)
    } else {
        Vec::new()
    };

    ExtractedDocument {
        url: page.location.as_str().to_string(),
        title: clean_title(page.tree.title().as_deref()),
        platform_id: platform_id.to_string(),
        turns,
        raw_text,
        images,
    }
}

/// Strips known platform suffixes from the document title; a bare platform
/// name (no conversation title set) becomes a neutral default.
#[must_use]
pub fn clean_title(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "Untitled conversation".to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || BARE_TITLES.contains(&trimmed) {
        return "Untitled conversation".to_string();
    }
    for suffix in TITLE_SUFFIXES {
        if let Some(stripped) = trimmed.strip_suffix(suffix) {
            let stripped = stripped.trim();
            if !stripped.is_empty() {
                return stripped.to_string();
            }
        }
    }
    trimmed.to_string()
}

/// Collects image URLs: document order, deduplicated, capped, inline
/// `data:` URIs excluded, declared dimensions under the minimum rejected.
/// Images without declared dimensions are accepted — a static document
/// cannot report rendered size.
fn collect_images(tree: &PageTree, options: &Options) -> Vec<String> {
    let imgs = deep_query_all(tree, PageTree::ROOT, &tag_is("img"));
    let mut seen: Vec<String> = Vec::new();
    for img in imgs {
        if seen.len() >= options.max_images {
            break;
        }
        let Some(src) = tree.attr(img, "src") else {
            continue;
        };
        let src = src.trim();
        if src.is_empty() || src.starts_with("data:") {
            continue;
        }
        if dimension_below(tree, img, "width", options.min_image_dim)
            || dimension_below(tree, img, "height", options.min_image_dim)
        {
            continue;
        }
        if seen.iter().any(|s| s == src) {
            continue;
        }
        seen.push(src.to_string());
    }
    seen
}

fn dimension_below(tree: &PageTree, img: NodeId, attr: &str, min: u32) -> bool {
    tree.attr(img, attr)
        .and_then(|v| v.trim().trim_end_matches("px").parse::<u32>().ok())
        .is_some_and(|v| v < min)
}
