//! Generic catch-all adapter.
//!
//! Always matches and sits last in the registry; wraps the heuristic
//! scraper so every extraction goes through the same adapter interface.

use crate::heuristic;
use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{dedup_adjacent, Adapter};

pub(super) struct Generic;

impl Adapter for Generic {
    fn id(&self) -> &'static str {
        "generic"
    }

    fn matches(&self, _location: &PageLocation) -> bool {
        true
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        dedup_adjacent(heuristic::scrape(page))
    }
}
