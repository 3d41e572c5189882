//! Result types for extraction output.
//!
//! This module defines the structured output from conversation extraction:
//! role-tagged turns and the document wrapper handed to the Content
//! Processor and, serialized, to the host messaging layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The platform's model side of the conversation.
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Assistant => write!(f, "Assistant"),
        }
    }
}

/// One role-tagged message extracted from a conversation.
///
/// Ordering is significant: turns appear in the order they were
/// encountered in the source tree, which stands in for chronological
/// order. `content` is never empty after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Author of the message.
    pub role: Role,

    /// Visible text of the message.
    pub content: String,

    /// Position in the source document, when the adapter recorded one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Turn {
    /// Convenience constructor without a source index.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            index: None,
        }
    }

    /// Convenience constructor with a source index.
    #[must_use]
    pub fn indexed(role: Role, content: impl Into<String>, index: usize) -> Self {
        Self {
            role,
            content: content.into(),
            index: Some(index),
        }
    }
}

/// Result of conversation extraction from a rendered page.
///
/// Invariant: `raw_text` is always populated, possibly with a diagnostic
/// placeholder, even when `turns` is empty — downstream code never
/// receives a fully-null result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    /// Source URL of the page, as given by the caller.
    pub url: String,

    /// Cleaned document title (platform suffixes stripped).
    pub title: String,

    /// Identifier of the adapter that produced the turns
    /// (`"generic"` for the heuristic fallback).
    pub platform_id: String,

    /// Ordered, normalized conversation turns. May be empty.
    pub turns: Vec<Turn>,

    /// Joined visible text; never empty (see invariant above).
    pub raw_text: String,

    /// Image URLs found on the page, at most ten, deduplicated,
    /// never inline `data:` URIs. Empty unless image collection was
    /// requested.
    pub images: Vec<String>,
}
