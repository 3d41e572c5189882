//! Content Processor: final role filtering before summarization.
//!
//! Turns the extracted document into the plain-text block handed to the
//! external summarizer. Structured turns are always preferred; the raw-text
//! block filter below is a safety net for the fallback path only, because
//! `include_assistant = false` is a user-facing correctness promise
//! ("never show me the assistant's answer") and the heuristic scraper's
//! own filtering is conservative but imperfect.

use crate::options::Options;
use crate::patterns::{ASSISTANT_OPENER, CODE_SIGNATURE, HALLUCINATION_MARKERS, USER_COMMAND_WORD};
use crate::result::{ExtractedDocument, Role};

/// Produces the text block sent to summarization.
///
/// - Structured turns present: render `"<Role>: <content>"` joined by blank
///   lines; with `include_assistant` unset keep user turns only, and if at
///   least one survives return immediately — never fall through to raw-text
///   heuristics once structured data exists.
/// - No structured turns, assistant excluded: run the block filter over
///   `raw_text`; no survivors yields an empty string (caller treats that as
///   "no content").
/// - No structured turns, assistant included: `raw_text` unmodified.
#[must_use]
pub fn process(doc: &ExtractedDocument, options: &Options) -> String {
    if !doc.turns.is_empty() {
        let rendered: Vec<String> = doc
            .turns
            .iter()
            .filter(|turn| options.include_assistant || turn.role == Role::User)
            .map(|turn| format!("{}: {}", turn.role, turn.content))
            .collect();
        if options.include_assistant || !rendered.is_empty() {
            return rendered.join("\n\n");
        }
        // All turns were assistant-tagged and the caller excluded them.
        return String::new();
    }

    if options.include_assistant {
        return doc.raw_text.clone();
    }
    filter_raw_blocks(&doc.raw_text, options)
}

/// Reason a raw-text block was rejected; names mirror the heuristic
/// scraper's cascade style so individual rules stay testable.
#[must_use]
pub fn reject_block(block: &str, options: &Options) -> Option<&'static str> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Some("empty");
    }
    if ASSISTANT_OPENER.is_match(trimmed) {
        return Some("assistant-opener");
    }
    if CODE_SIGNATURE.is_match(trimmed) {
        return Some("code-signature");
    }
    if trimmed.chars().count() > options.long_block_len && !USER_COMMAND_WORD.is_match(trimmed) {
        return Some("long-block-without-command");
    }
    let lower = trimmed.to_ascii_lowercase();
    if HALLUCINATION_MARKERS.iter().any(|m| lower.contains(m)) {
        return Some("hallucination-marker");
    }
    None
}

fn filter_raw_blocks(raw_text: &str, options: &Options) -> String {
    let survivors: Vec<String> = raw_text
        .split("\n\n")
        .filter_map(|block| {
            let trimmed = block.trim();
            match reject_block(trimmed, options) {
                None => Some(format!("User: {trimmed}")),
                Some(reason) => {
                    tracing::trace!(reason, len = trimmed.len(), "processor rejected block");
                    None
                }
            }
        })
        .collect();
    survivors.join("\n\n")
}
