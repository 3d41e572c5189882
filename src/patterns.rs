//! Compiled regex patterns and literal sets for conversation extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for
//! efficiency, organized by their stage in the pipeline. Several of these
//! encode deliberately approximate heuristics (see the cascade in the
//! `heuristic` module); they are kept as named, tunable rules rather than
//! being "corrected", because the right behavior is domain-ambiguous.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tree accessor denylists
// =============================================================================

/// Matches class/id tokens of consent/banner/policy chrome that must never
/// contribute visible text. Word-ish boundaries keep "policy" from eating
/// content containers like "policy-analysis-article".
pub static CONSENT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(cookie|consent|gdpr|ccpa|\bbanner\b|privacy[-_]?(?:notice|policy|prompt)|terms[-_]?of[-_]?(?:use|service)|\bdisclaimer\b|onetrust|didomi|usercentrics|truste)",
    )
    .expect("CONSENT_CLASS regex")
});

/// Tags that carry no renderable text semantics; their subtrees are skipped
/// entirely during visible-text collection and deep queries.
pub const SKIP_TAGS: &[&str] = &[
    "script", "style", "meta", "link", "head", "title", "noscript", "template", "iframe",
    "object", "svg", "path", "g", "defs", "symbol", "use", "canvas", "nav", "header", "footer",
];

/// Paragraph-level tags: a blank line follows their content so paragraph
/// boundaries survive into the blank-line splitting the processor does.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "ul", "ol", "pre", "blockquote", "table",
    "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Line-level tags: a single line break follows their content.
pub const LINE_BREAK_TAGS: &[&str] = &["br", "li", "tr"];

// =============================================================================
// Orchestrator artifact sweep
// =============================================================================

/// Matches page-initialization debris that occasionally leaks into visible
/// text: framework hydration payloads, bundler globals, raw state JSON.
pub static INIT_ARTIFACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(window\.__[A-Z_]+__|__NEXT_DATA__|self\.__next_f|webpackJsonp|webpackChunk|\bhydrat(?:e|ion)Root\b|^\s*\{"props":|^\s*\{"state":|document\.getElementById\()"#,
    )
    .expect("INIT_ARTIFACT regex")
});

// =============================================================================
// Heuristic scraper cascade
// =============================================================================

/// Matches class/id tokens or role attributes of containers that hold
/// assistant-authored content; the heuristic scraper excludes these
/// subtrees before any text rule runs.
pub static ASSISTANT_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bassistant\b|bot[-_]message|model[-_]?response|ai[-_]?(?:message|response|reply)|response[-_]?container|markdown[-_]?(?:body|response)|agent[-_]?turn)",
    )
    .expect("ASSISTANT_CONTAINER regex")
});

/// Matches meta-instruction sentences: assistant planning text that
/// instructs content generation and sometimes leaks into the page.
pub static META_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:the\s+(?:story|essay|article|poem|response|text|code|script)\s+(?:should|must|will|needs\s+to)\b|focus\s+on\s+(?:teamwork|themes?|the)\b|make\s+sure\s+(?:to|that|it)\b|the\s+tone\s+should\b|incorporate\s+the\s+following\b)",
    )
    .expect("META_INSTRUCTION regex")
});

/// Matches narrative openers typical of generated fiction.
pub static NARRATIVE_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:once\s+upon\s+a\s+time|in\s+a\s+(?:world|land|kingdom|realm|small\s+(?:town|village))|long\s+ago|deep\s+in\s+the\s+(?:forest|woods)|it\s+was\s+a\s+(?:dark|cold|bright|stormy)|the\s+(?:sun|rain|wind)\s+)",
    )
    .expect("NARRATIVE_OPENER regex")
});

/// Matches assistant self-reference openers ("here is", "certainly", ...).
pub static ASSISTANT_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:here(?:'s|\s+is|\s+are)\b|certainly\b|sure[,!.\s]|of\s+course\b|absolutely[,!.\s]|great\s+question\b|i(?:'d|\s+would)\s+be\s+(?:happy|glad)\b|as\s+an\s+ai\b|i\s+hope\s+this\s+helps\b|let\s+me\s+know\s+if\b|below\s+(?:is|are)\b|i've\s+(?:created|written|updated|made)\b)",
    )
    .expect("ASSISTANT_OPENER regex")
});

/// Matches user-intent openers: imperative verbs, question words, and
/// first-person need/want phrasings. Long text (over the cascade's length
/// threshold) must start with one of these to be kept as user text — an
/// unverified approximation preserved from production tuning.
pub static USER_INTENT_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:create|write|make|generate|build|fix|debug|explain|summari[sz]e|translate|convert|refactor|improve|rewrite|draft|design|analy[sz]e|compare|review|list|describe|implement|add|remove|update|optimi[sz]e|help|show|give|tell|find|suggest|recommend|how|what|why|when|where|who|which|can|could|would|should|please|i\s+(?:need|want|have|am|was))\b",
    )
    .expect("USER_INTENT_OPENER regex")
});

/// Matches image-caption phrasing produced by vision features.
pub static IMAGE_CAPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^the\s+image\s+(?:shows|depicts|contains|features|appears)")
        .expect("IMAGE_CAPTION regex")
});

/// Exact-match UI noise literals: button labels and chrome strings that
/// read as text nodes but are not conversation content.
pub const UI_NOISE_LITERALS: &[&str] = &[
    "Regenerate",
    "Regenerate response",
    "Copy",
    "Copy code",
    "Copy link",
    "Share",
    "Like",
    "Dislike",
    "New chat",
    "Send",
    "Send message",
    "Stop generating",
    "Try again",
    "Retry",
    "Edit",
    "Read aloud",
    "Good response",
    "Bad response",
    "Continue",
    "Continue generating",
    "Search",
    "Deep research",
    "Thinking",
    "Show thinking",
    "Sources",
    "Learn more",
    "See more",
    "Show more",
];

/// Length threshold (characters) beyond which heuristic text must start
/// with a recognized user-intent opener.
pub const LONG_TEXT_LEN: usize = 200;

// =============================================================================
// Content processor fallback filter
// =============================================================================

/// Matches code signatures inside a raw-text block: fences and import or
/// definition statements that mark assistant-generated code.
pub static CODE_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(```|^\s*(?:import\s+[\w.{]|from\s+\w+\s+import\b|#include\s*<|def\s+\w+\s*\(|fn\s+\w+\s*\(|function\s+\w+\s*\(|public\s+(?:static\s+)?class\s))",
    )
    .expect("CODE_SIGNATURE regex")
});

/// Matches a user-command indicator word anywhere in a block; long blocks
/// without one are treated as assistant prose.
pub static USER_COMMAND_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:please|fix|write|create|make|generate|build|explain|translate|summari[sz]e|help|need|want|refactor|convert|debug)\b|\?",
    )
    .expect("USER_COMMAND_WORD regex")
});

/// Phrases and stock names that in production almost always mark
/// hallucination-prone assistant prose rather than user input.
pub const HALLUCINATION_MARKERS: &[&str] = &[
    "as a large language model",
    "i cannot browse the internet",
    "a testament to",
    "rich tapestry of",
    "in the bustling city of",
    "elara",
];

// =============================================================================
// Title cleanup
// =============================================================================

/// Known platform suffixes appended to document titles.
pub const TITLE_SUFFIXES: &[&str] = &[
    " - ChatGPT",
    " | ChatGPT",
    " - Claude",
    " | Claude",
    " - Gemini",
    " - Grok",
    " | Perplexity",
    " - Poe",
    " - DeepSeek",
    " - Microsoft Copilot",
    " | character.ai",
    " - Le Chat",
];

/// Bare titles that mean "no conversation title was set".
pub const BARE_TITLES: &[&str] = &[
    "ChatGPT", "Claude", "Gemini", "Grok", "Perplexity", "Poe", "DeepSeek", "Copilot",
    "Le Chat", "Qwen",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_class_matches_banner_tokens() {
        assert!(CONSENT_CLASS.is_match("cookie-consent-wrapper"));
        assert!(CONSENT_CLASS.is_match("gdpr_overlay"));
        assert!(CONSENT_CLASS.is_match("onetrust-pc-dark-filter"));
        assert!(!CONSENT_CLASS.is_match("message-content"));
    }

    #[test]
    fn init_artifact_matches_hydration_debris() {
        assert!(INIT_ARTIFACT.is_match("window.__INITIAL_STATE__ = {}"));
        assert!(INIT_ARTIFACT.is_match("self.__next_f.push([1,\"...\"])"));
        assert!(INIT_ARTIFACT.is_match(r#"{"props":{"pageProps":{}}}"#));
        assert!(!INIT_ARTIFACT.is_match("explain closures to me"));
    }

    #[test]
    fn assistant_opener_is_anchored() {
        assert!(ASSISTANT_OPENER.is_match("Here is the code you asked for"));
        assert!(ASSISTANT_OPENER.is_match("Certainly! Let's begin"));
        assert!(ASSISTANT_OPENER.is_match("Of course, happy to help"));
        // Only matches at the start of the block.
        assert!(!ASSISTANT_OPENER.is_match("I typed: here is my attempt"));
    }

    #[test]
    fn user_intent_opener_accepts_commands_and_questions() {
        assert!(USER_INTENT_OPENER.is_match("Fix this bug in my script"));
        assert!(USER_INTENT_OPENER.is_match("how do I sort a vec?"));
        assert!(USER_INTENT_OPENER.is_match("I need a cover letter"));
        assert!(!USER_INTENT_OPENER.is_match("The protagonist walked slowly"));
    }

    #[test]
    fn meta_instruction_matches_planning_text() {
        assert!(META_INSTRUCTION.is_match("The story should focus on redemption."));
        assert!(META_INSTRUCTION.is_match("Make sure to mention the deadline."));
        assert!(!META_INSTRUCTION.is_match("I read a story yesterday."));
    }

    #[test]
    fn narrative_opener_matches_fiction_starts() {
        assert!(NARRATIVE_OPENER.is_match("Once upon a time, in a village..."));
        assert!(NARRATIVE_OPENER.is_match("In a world where robots dream"));
        assert!(!NARRATIVE_OPENER.is_match("Write me a story about robots"));
    }

    #[test]
    fn code_signature_matches_fences_and_imports() {
        assert!(CODE_SIGNATURE.is_match("```python\nprint('hi')\n```"));
        assert!(CODE_SIGNATURE.is_match("import numpy as np"));
        assert!(CODE_SIGNATURE.is_match("fn main() {"));
        assert!(!CODE_SIGNATURE.is_match("my main function is broken, fix it"));
    }
}
