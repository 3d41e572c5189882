//! Normalizer: deduplication and literal UI-noise stripping.
//!
//! A pure, order-preserving, single-pass function over the orchestrator's
//! turns. Idempotent: applying it twice equals applying it once.

use crate::patterns::UI_NOISE_LITERALS;
use crate::result::Turn;

/// Drops empty/whitespace-only turns, turns identical in role and content
/// to the immediately preceding turn, and turns whose content exactly
/// equals a known UI-noise literal.
#[must_use]
pub fn normalize(turns: Vec<Turn>) -> Vec<Turn> {
    let mut out: Vec<Turn> = Vec::new();
    for mut turn in turns {
        let trimmed = turn.content.trim();
        if trimmed.is_empty() {
            continue;
        }
        if UI_NOISE_LITERALS.contains(&trimmed) {
            continue;
        }
        if out
            .last()
            .is_some_and(|last| last.role == turn.role && last.content == trimmed)
        {
            continue;
        }
        if trimmed.len() != turn.content.len() {
            turn.content = trimmed.to_string();
        }
        out.push(turn);
    }
    out
}
