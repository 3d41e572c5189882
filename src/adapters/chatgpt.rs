//! ChatGPT adapter.
//!
//! The conversation view tags every message with
//! `data-message-author-role="user" | "assistant"`, the most stable marker
//! the platform has kept across redesigns. When the markers are absent
//! (shared/read-only views), fall back to the `conversation-turn` test ids
//! with position-parity roles.

use crate::accessor::attr_starts_with;
use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{parity_turns, structured_by_attr, Adapter};

pub(super) struct ChatGpt;

impl Adapter for ChatGpt {
    fn id(&self) -> &'static str {
        "chatgpt"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("chatgpt.com") || location.host_contains("chat.openai.com")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        let turns = structured_by_attr(page, "data-message-author-role", "user");
        if !turns.is_empty() {
            return turns;
        }
        parity_turns(page, &attr_starts_with("data-testid", "conversation-turn"))
    }
}
