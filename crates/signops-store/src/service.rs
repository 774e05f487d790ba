//! # Mutating Services
//!
//! The two write paths of the workflow engine: payment recording and
//! status transitions. Each is a fetch-validate-commit sequence over a
//! [`JobStore`], retried a bounded number of times when a compare-and-swap
//! commit loses a race.

use thiserror::Error;
use tracing::{debug, info, warn};

use signops_core::{
    JobId, JobStatus, PaymentMode, PaymentRecord, PaymentRecordId, PaymentStatus, Timestamp,
};
use signops_workflow::{payment_status, validate_transition, WorkflowValidation};

use crate::store::{JobStore, StoreError};

/// CAS attempts before giving up on a contended job. A conflict implies
/// another writer committed, so the retry count bounds how many concurrent
/// writers per job the services absorb without surfacing the conflict.
const MAX_COMMIT_ATTEMPTS: u32 = 5;

// ─── Payment Recording ───────────────────────────────────────────────

/// Errors from [`record_payment`].
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Payments must be positive.
    #[error("payment amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a successful payment append.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    /// Identifier of the new ledger entry.
    pub record_id: PaymentRecordId,
    /// The job's paid total after the append.
    pub amount_paid: i64,
    /// The recomputed payment status.
    pub payment_status: PaymentStatus,
}

/// Append a payment to a job's ledger and recompute its payment status.
///
/// Reads the current snapshot, appends an immutable [`PaymentRecord`],
/// derives the new status from the agreed total and the new paid total,
/// and commits the whole update atomically. A lost CAS race is retried
/// against a fresh snapshot, so concurrent payments on the same job all
/// land; after [`MAX_COMMIT_ATTEMPTS`] the conflict surfaces to the caller.
pub fn record_payment(
    store: &impl JobStore,
    job_id: JobId,
    amount: i64,
    mode: PaymentMode,
    recorded_by: &str,
    notes: Option<String>,
) -> Result<PaymentOutcome, PaymentError> {
    if amount <= 0 {
        return Err(PaymentError::InvalidAmount { amount });
    }

    let record = PaymentRecord {
        id: PaymentRecordId::new(),
        amount,
        mode,
        recorded_by: recorded_by.to_string(),
        recorded_at: Timestamp::now(),
        notes,
    };

    let mut attempt = 1;
    loop {
        let snapshot = store.get(job_id)?;
        let new_paid = snapshot.job.accounts.amount_paid.saturating_add(amount);
        let new_status = payment_status(snapshot.job.amount, new_paid);

        match store.commit_payment(job_id, snapshot.version, new_paid, new_status, record.clone())
        {
            Ok(after) => {
                info!(
                    %job_id,
                    record = %record.id,
                    amount,
                    amount_paid = new_paid,
                    payment_status = %new_status,
                    ledger_len = after.job.accounts.payments.len(),
                    "payment recorded"
                );
                return Ok(PaymentOutcome {
                    record_id: record.id,
                    amount_paid: new_paid,
                    payment_status: new_status,
                });
            }
            Err(StoreError::Conflict { .. }) if attempt < MAX_COMMIT_ATTEMPTS => {
                warn!(%job_id, attempt, "payment commit lost a race, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

// ─── Status Transition ───────────────────────────────────────────────

/// Errors from [`request_transition`].
#[derive(Error, Debug)]
pub enum TransitionError {
    /// The workflow validator rejected the transition. Carries the full
    /// structured validation so the caller can render the reason and any
    /// payment requirement.
    #[error("transition rejected: {}", .validation.reason.as_deref().unwrap_or("not allowed"))]
    Rejected {
        /// The structured rejection.
        validation: WorkflowValidation,
    },

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a committed status transition.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    /// Status before the transition.
    pub from: JobStatus,
    /// Status after the transition.
    pub to: JobStatus,
}

/// Validate and commit a status transition for a job.
///
/// The live payment status is derived from the accounts record on the
/// snapshot, so a payment gate always sees the latest ledger state. The
/// validator's verdict is re-checked on every CAS retry — a racing write
/// may have changed what is legal.
pub fn request_transition(
    store: &impl JobStore,
    job_id: JobId,
    target: JobStatus,
) -> Result<TransitionOutcome, TransitionError> {
    let mut attempt = 1;
    loop {
        let snapshot = store.get(job_id)?;
        let current = snapshot.job.status;
        let payment = payment_status(snapshot.job.amount, snapshot.job.accounts.amount_paid);

        let validation = validate_transition(current, target, payment);
        debug!(%job_id, %current, %target, %payment, allowed = validation.allowed, "transition validated");
        if !validation.allowed {
            return Err(TransitionError::Rejected { validation });
        }

        match store.commit_status(job_id, snapshot.version, target) {
            Ok(_) => {
                info!(%job_id, from = %current, to = %target, "status transition committed");
                return Ok(TransitionOutcome { from: current, to: target });
            }
            Err(StoreError::Conflict { .. }) if attempt < MAX_COMMIT_ATTEMPTS => {
                warn!(%job_id, attempt, "transition commit lost a race, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
