//! Gemini adapter.
//!
//! The Angular app renders dedicated custom elements per side:
//! `<user-query>` and `<model-response>`. Role comes straight from the tag.

use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{structured_by_tags, Adapter};

pub(super) struct Gemini;

impl Adapter for Gemini {
    fn id(&self) -> &'static str {
        "gemini"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("gemini.google.com")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        structured_by_tags(page, "user-query", "model-response")
    }
}
