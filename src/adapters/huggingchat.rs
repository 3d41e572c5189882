//! HuggingChat adapter.
//!
//! Message groups carry a `data-message-role` attribute in the current
//! markup; when that is absent the generic message containers fall back
//! to position parity.

use crate::accessor::class_contains;
use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{parity_turns, structured_by_attr, Adapter};

pub(super) struct HuggingChat;

impl Adapter for HuggingChat {
    fn id(&self) -> &'static str {
        "huggingchat"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("huggingface.co")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        let turns = structured_by_attr(page, "data-message-role", "user");
        if !turns.is_empty() {
            return turns;
        }
        parity_turns(page, &class_contains("message-group"))
    }
}
