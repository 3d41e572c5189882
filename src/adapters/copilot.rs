//! Microsoft Copilot adapter.
//!
//! Messages carry `data-content="user-message" | "ai-message"`. Parts of
//! the composer live behind shadow roots, which the deep query pierces.

use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{structured_by_attr, Adapter};

pub(super) struct Copilot;

impl Adapter for Copilot {
    fn id(&self) -> &'static str {
        "copilot"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("copilot.microsoft.com")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        structured_by_attr(page, "data-content", "user-message")
    }
}
