//! Poe adapter.
//!
//! Message rows use CSS-module classes; the stable part of the name
//! survives hashing (`ChatMessage_messageRow`, with `rightSideMessageRow`
//! marking the human side).

use crate::accessor::{class_contains, deep_query_all};
use crate::result::{Role, Turn};
use crate::tree::{Page, PageLocation, PageTree};

use super::{dedup_adjacent, text_of, Adapter};

pub(super) struct Poe;

impl Adapter for Poe {
    fn id(&self) -> &'static str {
        "poe"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("poe.com")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        let tree = &page.tree;
        let rows = deep_query_all(tree, PageTree::ROOT, &class_contains("chatmessage_messagerow"));
        let turns = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let class = tree.attr(node, "class").unwrap_or("").to_ascii_lowercase();
                let role = if class.contains("rightsidemessagerow") {
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
