//! Document Tree Accessor.
//!
//! Read-only traversal primitives over a [`PageTree`]: visible-text
//! collection and predicate-based deep queries. Both pierce shadow roots
//! transparently and skip non-content regions, and neither can fail —
//! unknown nodes simply contribute nothing.
//!
//! Queries take predicate rules rather than CSS selector strings because
//! shadow sub-trees live behind an edge ordinary selector engines cannot
//! follow; the rule helpers below cover what the adapters need.

use crate::patterns::{BLOCK_TAGS, CONSENT_CLASS, LINE_BREAK_TAGS, SKIP_TAGS};
use crate::tree::{NodeId, PageTree};

/// Collects the visible text of `node` and its descendants.
///
/// Shadow roots are walked before ordinary children (shadow content is what
/// a browser renders). Tags in [`SKIP_TAGS`] contribute nothing, as does any
/// element whose class/id tokens match the consent/banner denylist or one of
/// the caller-supplied `ignore_substrings`. Block-level tags emit a line
/// break so paragraph boundaries survive into later splitting.
#[must_use]
pub fn collect_text(tree: &PageTree, node: NodeId, ignore_substrings: &[String]) -> String {
    let mut out = String::new();
    walk_text(tree, node, ignore_substrings, &mut out);
    tidy(&out)
}

fn walk_text(tree: &PageTree, node: NodeId, ignore: &[String], out: &mut String) {
    if let Some(text) = tree.text_value(node) {
        if !text.trim().is_empty() {
            out.push_str(text);
            out.push(' ');
        }
        return;
    }

    let Some(name) = tree.name(node) else {
        return;
    };
    if SKIP_TAGS.contains(&name) {
        return;
    }
    if is_denied(tree, node, ignore) {
        return;
    }
    let is_block = BLOCK_TAGS.contains(&name);
    let is_line_break = LINE_BREAK_TAGS.contains(&name);

    if let Some(shadow) = tree.shadow_root(node) {
        walk_text(tree, shadow, ignore, out);
    }
    for child in tree.children(node) {
        walk_text(tree, *child, ignore, out);
    }
    if is_block {
        out.push_str("\n\n");
    } else if is_line_break {
        out.push('\n');
    }
}

fn is_denied(tree: &PageTree, node: NodeId, ignore: &[String]) -> bool {
    let tokens = tree.class_id_tokens(node);
    if tokens.is_empty() {
        return false;
    }
    if CONSENT_CLASS.is_match(&tokens) {
        return true;
    }
    ignore
        .iter()
        .any(|s| !s.is_empty() && tokens.contains(&s.to_ascii_lowercase()))
}

/// Collapses horizontal whitespace runs and excess blank lines left behind
/// by traversal, preserving single line breaks.
fn tidy(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if lines.last().is_some_and(String::is_empty) {
                continue;
            }
            lines.push(String::new());
        } else {
            lines.push(collapsed);
        }
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

/// Collects every element under `root` (shadow roots included, skip tags
/// excluded) for which `rule` returns true, in document order.
pub fn deep_query_all<F>(tree: &PageTree, root: NodeId, rule: &F) -> Vec<NodeId>
where
    F: Fn(&PageTree, NodeId) -> bool,
{
    let mut matches = Vec::new();
    walk_query(tree, root, rule, &mut matches);
    matches
}

/// First element matching `rule`, in document order.
pub fn deep_query<F>(tree: &PageTree, root: NodeId, rule: &F) -> Option<NodeId>
where
    F: Fn(&PageTree, NodeId) -> bool,
{
    deep_query_all(tree, root, rule).into_iter().next()
}

fn walk_query<F>(tree: &PageTree, node: NodeId, rule: &F, matches: &mut Vec<NodeId>)
where
    F: Fn(&PageTree, NodeId) -> bool,
{
    let Some(name) = tree.name(node) else {
        return;
    };
    if SKIP_TAGS.contains(&name) && name != "nav" && name != "header" && name != "footer" {
        // nav/header/footer are text-skips only; structural queries may
        // still need to look inside them (e.g. image collection).
        return;
    }
    if rule(tree, node) {
        matches.push(node);
    }
    if let Some(shadow) = tree.shadow_root(node) {
        walk_query(tree, shadow, rule, matches);
    }
    for child in tree.children(node) {
        walk_query(tree, *child, rule, matches);
    }
}

// === Rule helpers used by adapters ===

/// Rule: element carries the attribute, any value.
#[must_use]
pub fn has_attr(name: &'static str) -> impl Fn(&PageTree, NodeId) -> bool {
    move |tree, id| tree.attr(id, name).is_some()
}

/// Rule: element attribute equals `value` exactly.
#[must_use]
pub fn attr_eq(
    name: &'static str,
    value: &'static str,
) -> impl Fn(&PageTree, NodeId) -> bool {
    move |tree, id| tree.attr(id, name) == Some(value)
}

/// Rule: element attribute value starts with `prefix`.
#[must_use]
pub fn attr_starts_with(
    name: &'static str,
    prefix: &'static str,
) -> impl Fn(&PageTree, NodeId) -> bool {
    move |tree, id| tree.attr(id, name).is_some_and(|v| v.starts_with(prefix))
}

/// Rule: element class attribute contains `needle` as a substring.
#[must_use]
pub fn class_contains(needle: &'static str) -> impl Fn(&PageTree, NodeId) -> bool {
    move |tree, id| {
        tree.attr(id, "class")
            .is_some_and(|c| c.to_ascii_lowercase().contains(needle))
    }
}

/// Rule: element has the given tag name.
#[must_use]
pub fn tag_is(name: &'static str) -> impl Fn(&PageTree, NodeId) -> bool {
    move |tree, id| tree.name(id) == Some(name)
}
