//! Character.AI adapter.
//!
//! Roleplay pages interleave persona text, swipes, and pinned greetings in
//! ways no marker query untangles reliably; shotgun keeps everything.

use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{shotgun, Adapter};

pub(super) struct CharacterAi;

impl Adapter for CharacterAi {
    fn id(&self) -> &'static str {
        "character_ai"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("character.ai")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        shotgun(page)
    }
}
