//! # signops-workflow — Job Lifecycle Workflow Engine
//!
//! Decides which department a job may move to next. Three pieces:
//!
//! - **Transition graph** (`graph.rs`): a static edge table mapping each
//!   status to the statuses it may legally move to, plus a table of payment
//!   gates — minimum payment statuses required to *enter* certain statuses.
//!   Encoding the graph as data keeps the set of legal hand-offs auditable
//!   and lets tests enumerate it exhaustively.
//!
//! - **Validator** (`validator.rs`): combines the two tables to answer
//!   "may this job move from A to B given its payment state", and to
//!   enumerate every next status annotated with whether it is currently
//!   blocked and why. Rejections are reported as values
//!   ([`WorkflowValidation`]), never as errors — the caller renders blocked
//!   actions, it does not catch exceptions.
//!
//! - **Payment calculator** (`payment.rs`): the pure, total function from
//!   (total, paid) to [`PaymentStatus`](signops_core::PaymentStatus), used
//!   both for display and for gate checks.
//!
//! Everything here is synchronous and side-effect-free, operating on an
//! already-fetched snapshot. Committing an approved transition is the
//! persistence layer's job (`signops-store`).

pub mod graph;
pub mod payment;
pub mod validator;

// ─── Graph re-exports ───────────────────────────────────────────────

pub use graph::{allowed_next, payment_gate, PAYMENT_GATES, TRANSITIONS};

// ─── Validator re-exports ───────────────────────────────────────────

pub use validator::{next_statuses, validate_transition, NextStatus, WorkflowValidation};

// ─── Payment re-exports ─────────────────────────────────────────────

pub use payment::payment_status;
