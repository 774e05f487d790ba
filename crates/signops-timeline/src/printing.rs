//! # Printing Timeline
//!
//! Print-run progress. The shortest timeline: received, started, done.

use signops_core::PrintingStage;

use crate::item::{assign_current, TimelineItem};
use crate::vocab::is_completed_status;

/// Derive the printing timeline.
///
/// Milestones: Print Job Received → Printing Started → Printing Complete.
pub fn derive_timeline(stage: Option<&PrintingStage>) -> Vec<TimelineItem> {
    let Some(stage) = stage else {
        return Vec::new();
    };

    let status = stage.status.as_deref().unwrap_or("").trim().to_ascii_lowercase();
    let done = is_completed_status(&status);

    let received = stage.status.is_some();
    // "print_started" is the canonical flag; older rows wrote variants
    // like "started" or "printing_started".
    let print_started = status == "print_started" || status.contains("started") || done;

    let mut items = vec![
        TimelineItem::new("Print Job Received", received),
        TimelineItem::new("Printing Started", print_started)
            .with_timestamp(stage.print_started_at),
        TimelineItem::new("Printing Complete", done),
    ];
    assign_current(&mut items);
    items
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_with_status(status: &str) -> PrintingStage {
        PrintingStage { status: Some(status.to_string()), ..Default::default() }
    }

    #[test]
    fn test_absent_record_yields_empty_timeline() {
        assert!(derive_timeline(None).is_empty());
    }

    #[test]
    fn test_no_status_means_not_received() {
        let timeline = derive_timeline(Some(&PrintingStage::default()));
        assert!(!timeline[0].completed);
        assert!(timeline[0].current);
    }

    #[test]
    fn test_queued_status_means_received() {
        let timeline = derive_timeline(Some(&stage_with_status("queued")));
        assert!(timeline[0].completed);
        assert!(!timeline[1].completed);
        assert!(timeline[1].current);
    }

    #[test]
    fn test_print_started_exact_flag() {
        let timeline = derive_timeline(Some(&stage_with_status("print_started")));
        assert!(timeline[1].completed);
        assert!(timeline[2].current);
    }

    #[test]
    fn test_legacy_started_variant() {
        let timeline = derive_timeline(Some(&stage_with_status("printing_started")));
        assert!(timeline[1].completed);
        assert!(timeline[2].current);
    }

    #[test]
    fn test_completed_statuses() {
        for status in ["print_complete", "done", "completed"] {
            let timeline = derive_timeline(Some(&stage_with_status(status)));
            assert!(timeline.iter().all(|item| item.completed), "status {status:?}");
            assert!(timeline.iter().all(|item| !item.current));
        }
    }
}
