//! # Progress Calculator
//!
//! Collapses a milestone timeline into the 0–100 percentage shown on the
//! job dashboard.

use crate::item::TimelineItem;

/// Percentage of completed milestones, rounded to the nearest integer.
///
/// An empty timeline (department not reached) is 0. Pure and idempotent.
pub fn progress(timeline: &[TimelineItem]) -> u8 {
    if timeline.is_empty() {
        return 0;
    }
    let completed = timeline.iter().filter(|item| item.completed).count();
    // Integer round-half-up of 100 * completed / len.
    ((200 * completed + timeline.len()) / (2 * timeline.len())) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────
