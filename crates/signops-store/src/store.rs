//! # Job Store Contract
//!
//! The seam between the workflow engine and whatever holds the jobs. The
//! engine never talks to a database directly — it reads versioned
//! snapshots and commits against the version it read.

use thiserror::Error;

use signops_core::{Job, JobId, JobStatus, PaymentRecord, PaymentStatus};

/// A job together with the store version it was read at.
///
/// The version is the CAS token: pass it back on commit, and the commit
/// fails with [`StoreError::Conflict`] if the job has changed since.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    /// The job as of this version.
    pub job: Job,
    /// Monotonically increasing per-job version, bumped on every commit.
    pub version: u64,
}

/// Errors surfaced by a job store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No job with the given identifier.
    #[error("job not found: {job_id}")]
    JobNotFound {
        /// The missing job.
        job_id: JobId,
    },

    /// A job with this identifier already exists.
    #[error("job already exists: {job_id}")]
    DuplicateJob {
        /// The conflicting job.
        job_id: JobId,
    },

    /// The commit lost a race: the job moved past the version it was read at.
    #[error("write conflict on {job_id}: expected version {expected}, found {actual}")]
    Conflict {
        /// The contended job.
        job_id: JobId,
        /// The version the caller read.
        expected: u64,
        /// The version the store holds now.
        actual: u64,
    },

    /// The underlying storage failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Versioned job persistence with compare-and-swap commits.
///
/// Required property: updates to a single job are linearizable. Every
/// commit is atomic — it either fully applies (and bumps the version and
/// `updated_at`) or leaves the job untouched.
pub trait JobStore {
    /// Fetch a snapshot of a job.
    fn get(&self, job_id: JobId) -> Result<JobSnapshot, StoreError>;

    /// Insert a newly created job at version 0.
    fn insert(&self, job: Job) -> Result<(), StoreError>;

    /// All jobs, in unspecified order.
    fn list(&self) -> Result<Vec<JobSnapshot>, StoreError>;

    /// Commit an approved status transition.
    fn commit_status(
        &self,
        job_id: JobId,
        expected_version: u64,
        new_status: JobStatus,
    ) -> Result<JobSnapshot, StoreError>;

    /// Commit a payment append: the new ledger entry, the recomputed paid
    /// total, and the recomputed payment status, as one atomic write.
    fn commit_payment(
        &self,
        job_id: JobId,
        expected_version: u64,
        new_amount_paid: i64,
        new_payment_status: PaymentStatus,
        record: PaymentRecord,
    ) -> Result<JobSnapshot, StoreError>;
}
