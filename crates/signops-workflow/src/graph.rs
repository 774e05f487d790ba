//! # Transition Graph
//!
//! The static map of legal department hand-offs, encoded as data rather
//! than conditional chains scattered through call sites. Two tables:
//!
//! - [`TRANSITIONS`] — for each status, the statuses it may move to next.
//! - [`PAYMENT_GATES`] — for a target status, the minimum payment status a
//!   job must have reached before it may enter.
//!
//! ## Graph
//!
//! ```text
//! job_received ──▶ sales_assigned ──▶ site_visited ──▶ design_pending
//!                                                            │
//!                         ┌──(revisions)──┐                  ▼
//!                         ▼               │          design_in_review
//!                   design_pending ◀──────┴──────────────────│
//!                                                            ▼
//!                                                     design_approved
//!                                                            │ gate: partially_paid
//!                                                            ▼
//!      printing_started ◀── production_started        (cancel reachable
//!             │                                        up to this point)
//!             ▼
//!      print_complete ──▶ framing_started ──▶ production_complete
//!             │                                      ▲        │ gate: payment_done
//!             └────────(no framing)──────────────────┘        ▼
//!                                                        delivered ──▶ completed
//! ```
//!
//! `completed` and `cancelled` are terminal: their edge sets are empty.
//!
//! ## Registration Invariant
//!
//! Every status in the catalog has a row here, even terminal ones. A status
//! registered in the catalog but absent from this table would be
//! unconditionally unreachable — the tests enforce full coverage.

use signops_core::{JobStatus, PaymentStatus};

/// Allowed next statuses per current status. One row per catalog entry.
pub const TRANSITIONS: &[(JobStatus, &[JobStatus])] = &[
    (JobStatus::JobReceived, &[JobStatus::SalesAssigned, JobStatus::Cancelled]),
    (JobStatus::SalesAssigned, &[JobStatus::SiteVisited, JobStatus::Cancelled]),
    (JobStatus::SiteVisited, &[JobStatus::DesignPending, JobStatus::Cancelled]),
    (JobStatus::DesignPending, &[JobStatus::DesignInReview, JobStatus::Cancelled]),
    (
        JobStatus::DesignInReview,
        &[JobStatus::DesignApproved, JobStatus::DesignPending, JobStatus::Cancelled],
    ),
    (JobStatus::DesignApproved, &[JobStatus::ProductionStarted, JobStatus::Cancelled]),
    // Once material is committed there is no cancel edge; the job runs to
    // delivery.
    (JobStatus::ProductionStarted, &[JobStatus::PrintingStarted]),
    (JobStatus::PrintingStarted, &[JobStatus::PrintComplete]),
    (JobStatus::PrintComplete, &[JobStatus::FramingStarted, JobStatus::ProductionComplete]),
    (JobStatus::FramingStarted, &[JobStatus::ProductionComplete]),
    (JobStatus::ProductionComplete, &[JobStatus::Delivered]),
    (JobStatus::Delivered, &[JobStatus::Completed]),
    (JobStatus::Completed, &[]),
    (JobStatus::Cancelled, &[]),
];

/// Minimum payment status required to *enter* a target status.
///
/// Statuses absent from this table have no payment precondition. A job
/// satisfies a gate when its payment status compares `>=` the minimum.
pub const PAYMENT_GATES: &[(JobStatus, PaymentStatus)] = &[
    // An advance must be on the books before fabrication begins.
    (JobStatus::ProductionStarted, PaymentStatus::PartiallyPaid),
    // Full payment before the sign leaves the shop.
    (JobStatus::Delivered, PaymentStatus::PaymentDone),
];

/// The statuses a job may legally move to from `current`.
///
/// Empty for terminal statuses.
pub fn allowed_next(current: JobStatus) -> &'static [JobStatus] {
    TRANSITIONS
        .iter()
        .find(|(status, _)| *status == current)
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

/// The minimum payment status required to enter `target`, if gated.
pub fn payment_gate(target: JobStatus) -> Option<PaymentStatus> {
    PAYMENT_GATES
        .iter()
        .find(|(status, _)| *status == target)
        .map(|(_, minimum)| *minimum)
}

// ─── Tests ───────────────────────────────────────────────────────────
