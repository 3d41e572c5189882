//! DeepSeek adapter.
//!
//! Class names are build-hashed and churn on every deploy, so there is no
//! reliable role marker to query. Shotgun strategy: the largest visible
//! block under the chat root, verbatim, as a single user turn — role
//! accuracy is sacrificed so nothing is lost.

use crate::result::Turn;
use crate::tree::{Page, PageLocation};

use super::{shotgun, Adapter};

pub(super) struct DeepSeek;

impl Adapter for DeepSeek {
    fn id(&self) -> &'static str {
        "deepseek"
    }

    fn matches(&self, location: &PageLocation) -> bool {
        location.host_contains("deepseek.com")
    }

    fn extract(&self, page: &Page) -> Vec<Turn> {
        shotgun(page)
    }
}
