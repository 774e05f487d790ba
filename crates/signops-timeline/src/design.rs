//! # Design Timeline
//!
//! Artwork progress from the design department's drifted status strings.
//! The review and approval milestones are substring matches ("review",
//! "approved") against the lowercased status; feedback and approval are
//! distinct list entries that share a predicate — the stored data never
//! distinguished them.

use signops_core::DesignStage;

use crate::item::{assign_current, TimelineItem};

/// Derive the design timeline.
///
/// Milestones: Design Started → Draft Created → Sent for Review →
/// Feedback Received → Design Approved.
pub fn derive_timeline(stage: Option<&DesignStage>) -> Vec<TimelineItem> {
    let Some(stage) = stage else {
        return Vec::new();
    };

    let status = stage.status.as_deref().unwrap_or("").trim().to_ascii_lowercase();

    let started = !status.is_empty() && status != "pending";
    let in_review = status.contains("review") || status.contains("approved");
    let approved = status.contains("approved");

    let mut items = vec![
        TimelineItem::new("Design Started", started).with_timestamp(stage.started_at),
        TimelineItem::new("Draft Created", in_review),
        TimelineItem::new("Sent for Review", in_review).with_timestamp(stage.sent_for_review_at),
        TimelineItem::new("Feedback Received", approved),
        TimelineItem::new("Design Approved", approved).with_timestamp(stage.approved_at),
    ];
    assign_current(&mut items);
    items
}

// ─── Tests ───────────────────────────────────────────────────────────
