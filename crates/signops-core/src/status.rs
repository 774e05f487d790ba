//! # Status Catalog
//!
//! Enumerates every job status and payment status in the system, with their
//! stored string encodings and display labels. Pure data, no logic — the
//! transition graph that governs movement between statuses lives in
//! `signops-workflow`.
//!
//! ## Registration Invariant
//!
//! The stored JSON shares these vocabularies with the persistence layer. A
//! new status value must be registered here *and* in the transition graph
//! (and any precondition table) simultaneously, or transitions into and out
//! of it are unconditionally rejected. The `FromStr` impls are the parse
//! boundary: unknown strings never enter the typed world.

use serde::{Deserialize, Serialize};

use crate::error::StatusParseError;

// ─── Job Status ──────────────────────────────────────────────────────

/// The lifecycle status of a job — the single source of truth for which
/// department currently owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Intake complete, receptionist owns the job.
    JobReceived,
    /// A salesperson has been assigned for the site visit.
    SalesAssigned,
    /// The salesperson has visited the site and captured measurements.
    SiteVisited,
    /// Handed to the design department, work not yet started.
    DesignPending,
    /// Artwork drafted and sent to the customer for review.
    DesignInReview,
    /// Customer approved the artwork.
    DesignApproved,
    /// Fabrication has begun.
    ProductionStarted,
    /// The printing department has started the print run.
    PrintingStarted,
    /// Print run finished, panels back with production.
    PrintComplete,
    /// Framing and mounting in progress.
    FramingStarted,
    /// Fabrication finished, ready for hand-over.
    ProductionComplete,
    /// Sign delivered to the customer.
    Delivered,
    /// Payment collected, job closed (terminal).
    Completed,
    /// Job cancelled before fabrication (terminal).
    Cancelled,
}

/// Every registered job status, in lifecycle order.
///
/// Enumeration-friendly mirror of the catalog for table-driven tests and
/// exhaustive graph checks.
pub const JOB_STATUSES: &[JobStatus] = &[
    JobStatus::JobReceived,
    JobStatus::SalesAssigned,
    JobStatus::SiteVisited,
    JobStatus::DesignPending,
    JobStatus::DesignInReview,
    JobStatus::DesignApproved,
    JobStatus::ProductionStarted,
    JobStatus::PrintingStarted,
    JobStatus::PrintComplete,
    JobStatus::FramingStarted,
    JobStatus::ProductionComplete,
    JobStatus::Delivered,
    JobStatus::Completed,
    JobStatus::Cancelled,
];

impl JobStatus {
    /// The stored `snake_case` encoding of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobReceived => "job_received",
            Self::SalesAssigned => "sales_assigned",
            Self::SiteVisited => "site_visited",
            Self::DesignPending => "design_pending",
            Self::DesignInReview => "design_in_review",
            Self::DesignApproved => "design_approved",
            Self::ProductionStarted => "production_started",
            Self::PrintingStarted => "printing_started",
            Self::PrintComplete => "print_complete",
            Self::FramingStarted => "framing_started",
            Self::ProductionComplete => "production_complete",
            Self::Delivered => "delivered",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// The canonical display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::JobReceived => "Job Received",
            Self::SalesAssigned => "Salesperson Assigned",
            Self::SiteVisited => "Site Visited",
            Self::DesignPending => "Design Pending",
            Self::DesignInReview => "Design In Review",
            Self::DesignApproved => "Design Approved",
            Self::ProductionStarted => "Production Started",
            Self::PrintingStarted => "Printing Started",
            Self::PrintComplete => "Printing Complete",
            Self::FramingStarted => "Framing Started",
            Self::ProductionComplete => "Production Complete",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// The department that owns a job in this status, if any.
    ///
    /// `Cancelled` has no owner — the job left the pipeline.
    pub fn department(&self) -> Option<Department> {
        match self {
            Self::JobReceived => Some(Department::Receptionist),
            Self::SalesAssigned | Self::SiteVisited => Some(Department::Salesperson),
            Self::DesignPending | Self::DesignInReview | Self::DesignApproved => {
                Some(Department::Design)
            }
            Self::ProductionStarted | Self::FramingStarted | Self::ProductionComplete => {
                Some(Department::Production)
            }
            Self::PrintingStarted | Self::PrintComplete => Some(Department::Printing),
            Self::Delivered | Self::Completed => Some(Department::Accounts),
            Self::Cancelled => None,
        }
    }

    /// Whether this status is terminal (no further transitions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JOB_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusParseError::UnknownJobStatus { value: s.to_string() })
    }
}

// ─── Payment Status ──────────────────────────────────────────────────

/// Derived payment state of a job.
///
/// Ordered by "how paid" — `PaymentPending < PartiallyPaid < PaymentDone` —
/// so a payment precondition is a minimum bar: a status satisfies the gate
/// whenever it compares greater than or equal to the required minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing paid yet.
    PaymentPending,
    /// Some, but not all, of the agreed amount paid.
    PartiallyPaid,
    /// Paid in full.
    PaymentDone,
}

/// Every payment status, in rank order.
pub const PAYMENT_STATUSES: &[PaymentStatus] = &[
    PaymentStatus::PaymentPending,
    PaymentStatus::PartiallyPaid,
    PaymentStatus::PaymentDone,
];

impl PaymentStatus {
    /// The stored `snake_case` encoding of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentPending => "payment_pending",
            Self::PartiallyPaid => "partially_paid",
            Self::PaymentDone => "payment_done",
        }
    }

    /// The canonical display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PaymentPending => "Payment Pending",
            Self::PartiallyPaid => "Partially Paid",
            Self::PaymentDone => "Payment Complete",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PAYMENT_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusParseError::UnknownPaymentStatus { value: s.to_string() })
    }
}

// ─── Department ──────────────────────────────────────────────────────

/// The six departments a job passes through from intake to payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Creates jobs and captures customer details.
    Receptionist,
    /// Visits the site and captures sign specifications.
    Salesperson,
    /// Produces the artwork.
    Design,
    /// Fabricates and frames the sign.
    Production,
    /// Runs the print job.
    Printing,
    /// Invoices and collects payment.
    Accounts,
}

/// Every department, in pipeline order.
pub const DEPARTMENTS: &[Department] = &[
    Department::Receptionist,
    Department::Salesperson,
    Department::Design,
    Department::Production,
    Department::Printing,
    Department::Accounts,
];

impl Department {
    /// The canonical display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Receptionist => "Reception",
            Self::Salesperson => "Sales",
            Self::Design => "Design",
            Self::Production => "Production",
            Self::Printing => "Printing",
            Self::Accounts => "Accounts",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
