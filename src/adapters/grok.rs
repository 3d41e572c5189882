//! Grok adapter.
//!
//! Messages render as `message-bubble` containers without role attributes;
//! position parity is the only role signal available.

use crate::accessor::class_contains;
use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{parity_turns, Adapter};

pub(super) struct Grok;

impl Adapter for Grok {
    fn id(&self) -> &'static str {
        "grok"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("grok.com") || location.host_contains("grok.x.ai")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        parity_turns(page, &class_contains("message-bubble"))
    }
}
