//! Perplexity adapter.
//!
//! Queries render as elements whose class mentions `query`, answers inside
//! `prose` containers. Both are collected in one document-order pass.

use crate::accessor::deep_query_all;
use crate::result::{Role, Turn};
use crate::tree::{NodeId, Page, PageLocation, PageTree};

use super::{dedup_adjacent, text_of, Adapter};

pub(super) struct Perplexity;

fn classify_node(tree: &PageTree, id: NodeId) -> Option<Role> {
    let class = tree.attr(id, "class")?.to_ascii_lowercase();
    if class.split_whitespace().any(|t| t == "query" || t.starts_with("query-")) {
        Some(Role::User)
    } else if class.split_whitespace().any(|t| t == "prose") {
        Some(Role::Assistant)
    } else {
        None
    }
}

impl Adapter for Perplexity {
    fn id(&self) -> &'static str {
        "perplexity"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("perplexity.ai")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        let tree = &page.tree;
        let nodes = deep_query_all(tree, PageTree::ROOT, &|t: &PageTree, id: NodeId| {
            classify_node(t, id).is_some()
        });
        let turns = nodes
            .into_iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let role = classify_node(tree, node)?;
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
}
