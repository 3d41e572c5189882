//! Qwen adapter.
//!
//! Message bubbles are distinguished only by class; roles come from
//! position parity.

use crate::accessor::class_contains;
use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{parity_turns, Adapter};

pub(super) struct Qwen;

impl Adapter for Qwen {
    fn id(&self) -> &'static str {
        "qwen"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("chat.qwen.ai") || location.host_contains("tongyi.aliyun.com")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        parity_turns(page, &class_contains("chat-item"))
    }
}
