//! Platform adapters.
//!
//! One adapter per known platform, each a self-contained strategy that
//! knows that platform's current DOM shape. Dispatch is a closed,
//! fixed-priority list: the orchestrator uses the first adapter whose
//! `matches` returns true, and the generic catch-all (which always
//! matches) is last. Registration is deliberately not open-ended — the
//! catch-all must stay last and must always match.
//!
//! Two extraction strategies recur and live here as shared helpers:
//!
//! - **Structured**: query role-marker elements in document order and tag
//!   roles from the marker; when no markers exist, fall back to generic
//!   message containers with position-parity roles (even = user, odd =
//!   assistant) — a known heuristic, not guaranteed correct.
//! - **Shotgun**: emit the single largest visible-text block under a
//!   best-guess root as one `user` turn verbatim, trading role accuracy
//!   for completeness.
//!
//! Adapters never fail: a selector miss is zero turns, not an error.

mod character_ai;
mod chatgpt;
mod claude;
mod copilot;
mod deepseek;
mod gemini;
mod generic;
mod grok;
mod huggingchat;
mod lechat;
mod perplexity;
mod poe;
mod qwen;

use crate::accessor::{collect_text, deep_query_all, has_attr};
use crate::heuristic;
use crate::result::{Role, Turn};
use crate::tree::{NodeId, Page, PageLocation, PageTree};

/// A named, stateless extraction strategy for one platform.
pub trait Adapter: Sync {
    /// Stable platform identifier (`"chatgpt"`, `"claude"`, ...).
    fn id(&self) -> &'static str;

    /// Pure hostname test; O(1), no side effects, never fails.
    fn matches(&self, location: &PageLocation) -> bool;

    /// Extracts ordered turns. Never fails; an unexpected page shape
    /// yields an empty vector and the orchestrator escalates.
    fn extract(&self, page: &Page) -> Vec<Turn>;
}

/// Fixed priority order; the generic catch-all is last and always matches.
#[must_use]
pub fn registry() -> &'static [&'static dyn Adapter] {
    static REGISTRY: [&dyn Adapter; 13] = [
        &chatgpt::ChatGpt,
        &claude::Claude,
        &gemini::Gemini,
        &deepseek::DeepSeek,
        &grok::Grok,
        &copilot::Copilot,
        &perplexity::Perplexity,
        &poe::Poe,
        &huggingchat::HuggingChat,
        &lechat::LeChat,
        &qwen::Qwen,
        &character_ai::CharacterAi,
        &generic::Generic,
    ];
    &REGISTRY
}

/// Visible text of one node, with no extra ignore list.
pub(crate) fn text_of(tree: &PageTree, node: NodeId) -> String {
    collect_text(tree, node, &[])
}

/// Drops immediately-adjacent identical `(role, content)` pairs; hidden
/// re-renders can duplicate DOM nodes.
pub(crate) fn dedup_adjacent(turns: Vec<Turn>) -> Vec<Turn> {
    let mut out: Vec<Turn> = Vec::new();
    for turn in turns {
        if out
            .last()
            .is_some_and(|last| last.role == turn.role && last.content == turn.content)
        {
            continue;
        }
        out.push(turn);
    }
    out
}

/// Structured strategy over an attribute marker: every element carrying
/// `marker_attr` becomes a turn, user when the value equals `user_value`,
/// assistant otherwise.
pub(crate) fn structured_by_attr(page: &Page, marker_attr: &'static str, user_value: &str) -> Vec<Turn> {
    let tree = &page.tree;
    let nodes = deep_query_all(tree, PageTree::ROOT, &has_attr(marker_attr));
    let turns = nodes
        .into_iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let role = if tree.attr(node, marker_attr) == Some(user_value) {
                Role::User
            } else {
                Role::Assistant
            };
            let content = text_of(tree, node);
            if content.trim().is_empty() {
                None
            } else {
                Some(Turn::indexed(role, content.trim(), index))
            }
        })
        .collect();
    dedup_adjacent(turns)
}

/// Structured strategy over dedicated tags: `user_tag` elements are user
/// turns, `assistant_tag` elements assistant turns, in document order.
pub(crate) fn structured_by_tags(page: &Page, user_tag: &'static str, assistant_tag: &'static str) -> Vec<Turn> {
    let tree = &page.tree;
    let nodes = deep_query_all(tree, PageTree::ROOT, &|t: &PageTree, id: NodeId| {
        matches!(t.name(id), Some(name) if name == user_tag || name == assistant_tag)
    });
    let turns = nodes
        .into_iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let role = if tree.name(node) == Some(user_tag) {
                Role::User
            } else {
                Role::Assistant
            };
            let content = text_of(tree, node);
            if content.trim().is_empty() {
                None
            } else {
                Some(Turn::indexed(role, content.trim(), index))
            }
        })
        .collect();
    dedup_adjacent(turns)
}

/// Position-parity fallback: message containers in document order, even
/// index = user, odd = assistant. A last resort, documented as a known
/// approximation and kept tunable rather than "fixed".
pub(crate) fn parity_turns<F>(page: &Page, container_rule: &F) -> Vec<Turn>
where
    F: Fn(&PageTree, NodeId) -> bool,
{
    let tree = &page.tree;
    let nodes = deep_query_all(tree, PageTree::ROOT, container_rule);
    let turns = nodes
        .into_iter()
        .filter_map(|node| {
            let content = text_of(tree, node);
            let trimmed = content.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .enumerate()
        .map(|(index, content)| {
            let role = if index % 2 == 0 { Role::User } else { Role::Assistant };
            Turn::indexed(role, content, index)
        })
        .collect();
    dedup_adjacent(turns)
}

/// Shotgun strategy: the single largest visible-text block among the
/// direct children of the best-guess chat root, emitted verbatim as one
/// `user` turn so no information is lost.
pub(crate) fn shotgun(page: &Page) -> Vec<Turn> {
    let tree = &page.tree;
    let root = heuristic::guess_chat_root(tree);
    let mut best: Option<String> = None;
    let candidates = if tree.children(root).is_empty() {
        vec![root]
    } else {
        tree.children(root).to_vec()
    };
    for node in candidates {
        let text = text_of(tree, node);
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if best.as_ref().is_none_or(|b| text.chars().count() > b.chars().count()) {
            best = Some(text.to_string());
        }
    }
    // Root's own text when children carried nothing.
    if best.is_none() {
        let text = text_of(tree, root);
        if !text.trim().is_empty() {
            best = Some(text.trim().to_string());
        }
    }
    best.map(|content| vec![Turn::indexed(Role::User, content, 0)])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ends_with_always_matching_catch_all() {
        let adapters = registry();
        let last = adapters.last().copied().map(Adapter::id);
        assert_eq!(last, Some("generic"));

        let nowhere = PageLocation::parse("https://definitely-unknown.example/");
        let matching: Vec<&str> = adapters
            .iter()
            .filter(|a| a.matches(&nowhere))
            .map(|a| a.id())
            .collect();
        assert_eq!(matching, vec!["generic"]);
    }

    #[test]
    fn dedup_adjacent_collapses_repeated_pairs() {
        let turns = vec![
            Turn::new(Role::User, "hi"),
            Turn::new(Role::User, "hi"),
            Turn::new(Role::Assistant, "ok"),
        ];
        let deduped = dedup_adjacent(turns);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn parity_assigns_even_user_odd_assistant() {
        let mut tree = PageTree::new();
        let body = tree.element(PageTree::ROOT, "body");
        for text in ["first", "second", "third"] {
            let msg = tree.element_attrs(body, "div", &[("class", "message")]);
            tree.text(msg, text);
        }
        let page = Page::from_tree(tree, "https://example.com/");
        let turns = parity_turns(&page, &crate::accessor::class_contains("message"));
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[2].role, Role::User);
    }

    #[test]
    fn shotgun_picks_largest_block_as_user_turn() {
        let mut tree = PageTree::new();
        let main = tree.element(PageTree::ROOT, "main");
        let small = tree.element(main, "div");
        tree.text(small, "short");
        let large = tree.element(main, "div");
        tree.text(large, "a considerably longer block of page text");
        let page = Page::from_tree(tree, "https://example.com/");

        let turns = shotgun(&page);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
        assert!(turns[0].content.starts_with("a considerably longer"));
    }
}
