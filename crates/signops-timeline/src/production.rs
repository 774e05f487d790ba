//! # Production Timeline
//!
//! Fabrication progress. The production UI writes stage-specific status
//! strings ("started", "sent_to_printing", "framing_started", ...); each
//! milestone's predicate accepts every status that implies it already
//! happened, so a job that jumped straight to framing still shows the
//! earlier milestones as done.

use signops_core::ProductionStage;

use crate::item::{assign_current, TimelineItem};
use crate::vocab::is_completed_status;

/// Derive the production timeline.
///
/// Milestones: Queued → Started → Sent to Printing → Framing →
/// Production Complete (with the estimated completion date attached when
/// the record carries one).
pub fn derive_timeline(stage: Option<&ProductionStage>) -> Vec<TimelineItem> {
    let Some(stage) = stage else {
        return Vec::new();
    };

    let status = stage.status.as_deref().unwrap_or("").trim().to_ascii_lowercase();
    let done = is_completed_status(&status);

    let queued = stage.status.is_some() || stage.assigned_team.is_some();
    let started = status.contains("started")
        || status.contains("progress")
        || status.contains("printing")
        || status.contains("framing")
        || done;
    let sent_to_printing = status.contains("printing") || status.contains("framing") || done;
    let framing = status.contains("framing") || done;

    let mut items = vec![
        TimelineItem::new("Queued", queued),
        TimelineItem::new("Started", started).with_timestamp(stage.started_at),
        TimelineItem::new("Sent to Printing", sent_to_printing),
        TimelineItem::new("Framing", framing),
        TimelineItem::new("Production Complete", done)
            .with_timestamp(stage.estimated_completion),
    ];
    assign_current(&mut items);
    items
}

// ─── Tests ───────────────────────────────────────────────────────────
