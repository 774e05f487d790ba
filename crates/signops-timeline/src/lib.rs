//! # signops-timeline — Stage Timeline Deriver
//!
//! Reconstructs a human-readable progress timeline per department from the
//! loosely-structured stage records on a [`Job`](signops_core::Job). Each
//! department stores its own ad-hoc fields, with historical synonyms for
//! the same concept — field presence is often the only signal of progress.
//! The derivers here turn that into an ordered milestone checklist.
//!
//! ## Shared Pattern
//!
//! One deriver per department (`receptionist`, `salesperson`, `design`,
//! `production`, `printing`, `accounts`), all following the same shape:
//!
//! 1. Absent stage record → empty timeline (department not reached).
//! 2. A fixed, ordered list of milestone labels.
//! 3. Per-milestone completion predicates over the record's fields: field
//!    presence, exact status equality, or substring matches against a
//!    lowercased status string.
//! 4. Exactly one milestone marked `current` — assigned centrally by
//!    [`item::assign_current`] so the single-current invariant holds no
//!    matter how the predicates overlap.
//! 5. Timestamps attached where the record supplies them.
//!
//! The substring heuristics are a compatibility contract with the stored
//! vocabulary, not a canonical encoding — see `vocab.rs`.

pub mod accounts;
pub mod dashboard;
pub mod design;
pub mod item;
pub mod printing;
pub mod production;
pub mod progress;
pub mod receptionist;
pub mod salesperson;
pub mod vocab;

// ─── Re-exports ─────────────────────────────────────────────────────

pub use dashboard::{derive_all, DepartmentTimeline};
pub use item::TimelineItem;
pub use progress::progress;
pub use vocab::is_completed_status;
