//! # Dashboard Glue
//!
//! Assembles all six department timelines for a job in one call — the
//! read-only view the dashboard renders.

use serde::Serialize;

use signops_core::{Department, Job, DEPARTMENTS};

use crate::item::TimelineItem;
use crate::progress::progress;
use crate::{accounts, design, printing, production, receptionist, salesperson};

/// One department's derived view: milestones plus the progress percentage.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentTimeline {
    /// Which department this timeline describes.
    pub department: Department,
    /// Ordered milestones; empty when the department has not been reached.
    pub items: Vec<TimelineItem>,
    /// `round(100 * completed / total)`, 0 for an empty timeline.
    pub progress: u8,
}

/// Derive every department's timeline for a job, in pipeline order.
///
/// Read-only with respect to the job; deriving twice yields the same view.
pub fn derive_all(job: &Job) -> Vec<DepartmentTimeline> {
    DEPARTMENTS
        .iter()
        .map(|&department| {
            let items = match department {
                Department::Receptionist => {
                    receptionist::derive_timeline(job.receptionist.as_ref())
                }
                Department::Salesperson => salesperson::derive_timeline(job.salesperson.as_ref()),
                Department::Design => design::derive_timeline(job.design.as_ref()),
                Department::Production => production::derive_timeline(job.production.as_ref()),
                Department::Printing => printing::derive_timeline(job.printing.as_ref()),
                Department::Accounts => accounts::derive_timeline(Some(&job.accounts)),
            };
            let progress = progress(&items);
            DepartmentTimeline { department, items, progress }
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use signops_core::{DesignStage, ProductionStage};

    fn make_job() -> Job {
        Job::new("Chaiwala & Co".to_string(), "Rooftop letters".to_string(), 80_000)
    }

    #[test]
    fn test_fresh_job_has_all_departments() {
        let views = derive_all(&make_job());
        assert_eq!(views.len(), DEPARTMENTS.len());
        // Unreached departments derive empty timelines at zero progress.
        let design = views.iter().find(|v| v.department == Department::Design).unwrap();
        assert!(design.items.is_empty());
        assert_eq!(design.progress, 0);
    }

    #[test]
    fn test_single_current_invariant_across_all_departments() {
        let mut job = make_job();
        job.design = Some(DesignStage {
            status: Some("sent_for_review".to_string()),
            ..Default::default()
        });
        job.production = Some(ProductionStage {
            status: Some("framing_started".to_string()),
            ..Default::default()
        });

        for view in derive_all(&job) {
            let currents = view.items.iter().filter(|item| item.current).count();
            assert!(currents <= 1, "{} has {currents} current items", view.department);
            // No current item may precede a completed one.
            if let Some(current_at) = view.items.iter().position(|item| item.current) {
                assert!(view.items[current_at + 1..].iter().all(|item| !item.completed));
            }
        }
    }

    #[test]
    fn test_progress_reflects_derived_items() {
        let mut job = make_job();
        job.production = Some(ProductionStage {
            status: Some("framing_started".to_string()),
            ..Default::default()
        });
        let views = derive_all(&job);
        let production = views.iter().find(|v| v.department == Department::Production).unwrap();
        // Four of five milestones done.
        assert_eq!(production.progress, 80);
    }
}
