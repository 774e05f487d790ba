//! # signops-store — Persistence Contract and Mutating Services
//!
//! The workflow engine's pure layers (`signops-workflow`, `signops-timeline`)
//! operate on an already-fetched job snapshot. This crate owns the two
//! operations that actually write: recording a payment and committing a
//! status transition.
//!
//! ## Concurrency Contract
//!
//! Both operations are read-modify-write sequences over shared persisted
//! state. The [`JobStore`] trait therefore requires *versioned* snapshots
//! and compare-and-swap commits: a commit names the version it read, and
//! the store rejects it with [`StoreError::Conflict`] if another writer got
//! there first. Updates to a single job are linearizable; jobs are
//! independent units of concurrency. Two racing payments on the same job
//! both land — neither ledger entry nor paid-total increment is lost.
//!
//! Commits are all-or-nothing: either the whole append/transition applies
//! or nothing does.
//!
//! [`MemoryJobStore`] is the reference implementation; a database-backed
//! store must provide the same CAS semantics (conditional update on a
//! version column, or a serializable transaction).

pub mod memory;
pub mod service;
pub mod store;

// ─── Store re-exports ───────────────────────────────────────────────

pub use memory::MemoryJobStore;
pub use store::{JobSnapshot, JobStore, StoreError};

// ─── Service re-exports ─────────────────────────────────────────────

pub use service::{
    record_payment, request_transition, PaymentError, PaymentOutcome, TransitionError,
    TransitionOutcome,
};
