//! Claude adapter.
//!
//! User messages carry `data-testid="user-message"`; assistant messages sit
//! in containers whose class includes `font-claude-message`. Both are read
//! in one document-order pass so interleaving survives.

use crate::accessor::deep_query_all;
use crate::result::{Role, Turn};
use crate::tree::{NodeId, Page, PageLocation, PageTree};

use super::{dedup_adjacent, text_of, Adapter};

pub(super) struct Claude;

fn is_user_message(tree: &PageTree, id: NodeId) -> bool {
    tree.attr(id, "data-testid") == Some("user-message")
}

fn is_assistant_message(tree: &PageTree, id: NodeId) -> bool {
    tree.attr(id, "class")
        .is_some_and(|c| c.contains("font-claude-message"))
}

impl Adapter for Claude {
    fn id(&self) -> &'static str {
        "claude"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("claude.ai")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        let tree = &page.tree;
        let nodes = deep_query_all(tree, PageTree::ROOT, &|t: &PageTree, id: NodeId| {
            is_user_message(t, id) || is_assistant_message(t, id)
        });
        let turns = nodes
            .into_iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let role = if is_user_message(tree, node) {
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
}
