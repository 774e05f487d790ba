//! # signops-core — Foundational Types for the Sign-Shop Workflow Engine
//!
//! This crate is the bedrock of the signops workspace. It defines the status
//! catalog, the job data model, and the domain primitives every other crate
//! builds on. Every other crate in the workspace depends on `signops-core`;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed status vocabularies.** `JobStatus` and `PaymentStatus` are
//!    closed enums with `snake_case` string encodings matching the stored
//!    JSON. Unknown strings are rejected at the parse boundary — a status
//!    that is not registered in the catalog cannot enter the system.
//!
//! 2. **Newtype wrappers for identifiers.** `JobId` and `PaymentRecordId`
//!    are uuid newtypes. No bare strings for identifiers.
//!
//! 3. **Typed stage records, not open dictionaries.** Each department's raw
//!    data is an explicit optional-field struct. Derivers pattern-match on
//!    well-defined fields instead of probing arbitrary keys.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! 5. **Integer amounts.** Money is whole currency units (`i64`) — no
//!    floats in payment arithmetic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `signops-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod job;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{StatusParseError, TimestampParseError};
pub use identity::{JobId, PaymentRecordId};
pub use job::{
    AccountsStage, DesignStage, Job, PaymentMode, PaymentRecord, PrintingStage, ProductionStage,
    ReceptionistStage, SalespersonStage,
};
pub use status::{Department, JobStatus, PaymentStatus, DEPARTMENTS, JOB_STATUSES, PAYMENT_STATUSES};
pub use temporal::Timestamp;
