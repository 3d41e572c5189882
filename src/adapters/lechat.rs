//! Le Chat (Mistral) adapter.
//!
//! No role attributes survive minification; message containers are found
//! by class and roles assigned by position parity.

use crate::accessor::class_contains;
use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{parity_turns, Adapter};

pub(super) struct LeChat;

impl Adapter for LeChat {
    fn id(&self) -> &'static str {
        "lechat"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("chat.mistral.ai")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        parity_turns(page, &class_contains("chat-message"))
    }
}
