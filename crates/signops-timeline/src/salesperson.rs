//! # Sales Timeline
//!
//! Site-visit progress. Legacy rows from the old sales UI sometimes carry
//! only detail fields with no sub-status, so every predicate accepts the
//! field-presence form alongside the status flag.

use signops_core::SalespersonStage;

use crate::item::{assign_current, TimelineItem};

/// Derive the sales timeline.
///
/// Milestones: Salesperson Assigned → Site Visit Scheduled → Site Visited
/// → Sign Details Submitted.
pub fn derive_timeline(stage: Option<&SalespersonStage>) -> Vec<TimelineItem> {
    let Some(stage) = stage else {
        return Vec::new();
    };

    let status = stage.status.as_deref().unwrap_or("").trim().to_ascii_lowercase();

    let visit_scheduled =
        !status.is_empty() || stage.site_address.is_some() || stage.visit_notes.is_some();
    let site_visited =
        status.contains("visited") || stage.visited_at.is_some() || stage.visit_notes.is_some();
    let details_submitted =
        stage.sign_type.is_some() && stage.material.is_some() && stage.measurements.is_some();

    let mut items = vec![
        TimelineItem::new("Salesperson Assigned", true),
        TimelineItem::new("Site Visit Scheduled", visit_scheduled),
        TimelineItem::new("Site Visited", site_visited).with_timestamp(stage.visited_at),
        TimelineItem::new("Sign Details Submitted", details_submitted),
    ];
    assign_current(&mut items);
    items
}

// ─── Tests ───────────────────────────────────────────────────────────
