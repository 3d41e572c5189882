//! Heuristic Scraper: the platform-agnostic fallback.
//!
//! When no adapter recognizes the page, every text block under a best-guess
//! chat container is run through an ordered cascade of rejection rules, and
//! the survivors become `user` turns. The cascade is deliberately
//! conservative: dropping real user text is acceptable, keeping assistant
//! text is not, because downstream summarization promises "ignore assistant
//! text" to the user.
//!
//! Each rule is a named predicate so tests can target one rule without
//! re-deriving the whole cascade, and so tuning stays auditable.

use crate::patterns::{
    ASSISTANT_CONTAINER, ASSISTANT_OPENER, IMAGE_CAPTION, LONG_TEXT_LEN, META_INSTRUCTION,
    NARRATIVE_OPENER, UI_NOISE_LITERALS, USER_INTENT_OPENER,
};
use crate::result::{Role, Turn};
use crate::tree::{NodeId, Page, PageTree};

/// One rejection rule: a name (for diagnostics and tests) and a predicate
/// that returns `true` when the text must be dropped.
pub struct Rule {
    /// Stable rule identifier.
    pub name: &'static str,
    /// Returns `true` to reject the text block.
    pub rejects: fn(&str) -> bool,
}

fn rejects_meta_instruction(text: &str) -> bool {
    META_INSTRUCTION.is_match(text)
}

fn rejects_narrative_opener(text: &str) -> bool {
    NARRATIVE_OPENER.is_match(text)
}

fn rejects_assistant_opener(text: &str) -> bool {
    ASSISTANT_OPENER.is_match(text)
}

/// Long text must open with a user-intent verb or question word. An
/// unverified approximation preserved from production tuning; it will
/// misclassify some long pasted user text by construction.
fn rejects_long_text_without_intent(text: &str) -> bool {
    text.chars().count() > LONG_TEXT_LEN && !USER_INTENT_OPENER.is_match(text)
}

fn rejects_ui_noise_literal(text: &str) -> bool {
    UI_NOISE_LITERALS.contains(&text)
}

fn rejects_image_caption(text: &str) -> bool {
    IMAGE_CAPTION.is_match(text)
}

/// The cascade, evaluated short-circuit in this order.
pub static CASCADE: &[Rule] = &[
    Rule {
        name: "meta-instruction",
        rejects: rejects_meta_instruction,
    },
    Rule {
        name: "narrative-opener",
        rejects: rejects_narrative_opener,
    },
    Rule {
        name: "assistant-opener",
        rejects: rejects_assistant_opener,
    },
    Rule {
        name: "long-text-without-intent",
        rejects: rejects_long_text_without_intent,
    },
    Rule {
        name: "ui-noise-literal",
        rejects: rejects_ui_noise_literal,
    },
    Rule {
        name: "image-caption",
        rejects: rejects_image_caption,
    },
];

/// Runs the cascade over one trimmed text block. Returns the name of the
/// rejecting rule, or `None` when the text survives as user content.
#[must_use]
pub fn classify(text: &str) -> Option<&'static str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some("empty");
    }
    CASCADE
        .iter()
        .find(|rule| (rule.rejects)(trimmed))
        .map(|rule| rule.name)
}

/// Best-guess conversation container: `main`, `[role=main]`, or the first
/// element whose class/id tokens mention chat/conversation/thread; the
/// document root otherwise.
#[must_use]
pub fn guess_chat_root(tree: &PageTree) -> NodeId {
    fn walk(tree: &PageTree, id: NodeId) -> Option<NodeId> {
        if let Some(name) = tree.name(id) {
            if name == "main" || tree.attr(id, "role") == Some("main") {
                return Some(id);
            }
            let tokens = tree.class_id_tokens(id);
            if tokens.contains("chat") || tokens.contains("conversation") || tokens.contains("thread")
            {
                return Some(id);
            }
        }
        let shadow_hit = tree.shadow_root(id).and_then(|s| walk(tree, s));
        if shadow_hit.is_some() {
            return shadow_hit;
        }
        tree.children(id).iter().find_map(|c| walk(tree, *c))
    }
    walk(tree, PageTree::ROOT).unwrap_or(PageTree::ROOT)
}

/// Scrapes a page with no matching adapter: classify every candidate text
/// block under the chat container, emit survivors as `user` turns in
/// document order, then merge adjacent same-role turns.
#[must_use]
pub fn scrape(page: &Page) -> Vec<Turn> {
    let tree = &page.tree;
    let root = guess_chat_root(tree);
    let mut blocks = Vec::new();
    gather_blocks(tree, root, &mut blocks);

    let mut turns = Vec::new();
    for (index, block) in blocks.into_iter().enumerate() {
        match classify(&block) {
            None => turns.push(Turn::indexed(Role::User, block.trim(), index)),
            Some(rule) => {
                tracing::trace!(rule, len = block.len(), "heuristic rejected block");
            }
        }
    }
    merge_adjacent(turns)
}

/// Gathers candidate text blocks in document order, excluding subtrees
/// under known assistant-role containers before any text rule runs.
/// Non-content and consent regions are skipped the same way the visible-
/// text accessor skips them.
fn gather_blocks(tree: &PageTree, node: NodeId, out: &mut Vec<String>) {
    if tree.is_element(node) {
        if let Some(name) = tree.name(node) {
            if crate::patterns::SKIP_TAGS.contains(&name) {
                return;
            }
        }
        let tokens = tree.class_id_tokens(node);
        if !tokens.is_empty() && crate::patterns::CONSENT_CLASS.is_match(&tokens) {
            return;
        }
        if is_assistant_container(tree, node) {
            return;
        }
        let direct_text = direct_text(tree, node);
        if !direct_text.is_empty() {
            out.push(direct_text);
        }
        if let Some(shadow) = tree.shadow_root(node) {
            gather_blocks(tree, shadow, out);
        }
        for child in tree.children(node) {
            gather_blocks(tree, *child, out);
        }
    }
}

fn is_assistant_container(tree: &PageTree, node: NodeId) -> bool {
    let tokens = tree.class_id_tokens(node);
    if !tokens.is_empty() && ASSISTANT_CONTAINER.is_match(&tokens) {
        return true;
    }
    tree.attr(node, "data-message-author-role") == Some("assistant")
        || tree.attr(node, "data-role") == Some("assistant")
}

/// Visible text of the element's immediate text children only; descending
/// happens in `gather_blocks` so assistant exclusion applies at every level.
fn direct_text(tree: &PageTree, node: NodeId) -> String {
    let mut out = String::new();
    for child in tree.children(node) {
        if let Some(text) = tree.text_value(*child) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(trimmed);
            }
        }
    }
    out
}

/// Merges adjacent turns of the same role with a newline separator, so
/// fragmented text nodes reconstruct one logical message.
#[must_use]
pub fn merge_adjacent(turns: Vec<Turn>) -> Vec<Turn> {
    let mut merged: Vec<Turn> = Vec::new();
    for turn in turns {
        match merged.last_mut() {
            Some(last) if last.role == turn.role => {
                last.content.push('\n');
                last.content.push_str(&turn.content);
            }
            _ => merged.push(turn),
        }
    }
    merged
}
