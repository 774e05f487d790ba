//! # In-Memory Job Store
//!
//! Reference implementation of [`JobStore`]. A single mutex over the job
//! map makes every commit atomic; per-job versions provide the CAS
//! semantics a database-backed store would implement with a conditional
//! update on a version column.

use std::collections::HashMap;
use std::sync::Mutex;

use signops_core::{Job, JobId, JobStatus, PaymentRecord, PaymentStatus};

use crate::store::{JobSnapshot, JobStore, StoreError};

#[derive(Debug)]
struct Entry {
    job: Job,
    version: u64,
}

/// Mutex-guarded in-memory job store.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: Mutex<HashMap<JobId, Entry>>,
}

impl MemoryJobStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing jobs (e.g. a deserialized ledger file).
    /// All jobs start at version 0.
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job>) -> Self {
        let map = jobs
            .into_iter()
            .map(|job| (job.id, Entry { job, version: 0 }))
            .collect();
        Self { jobs: Mutex::new(map) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<JobId, Entry>> {
        // A poisoned lock means a panic mid-commit in another thread; the
        // map itself is still consistent because commits mutate via
        // whole-entry replacement.
        self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl JobStore for MemoryJobStore {
    fn get(&self, job_id: JobId) -> Result<JobSnapshot, StoreError> {
        let jobs = self.lock();
        let entry = jobs.get(&job_id).ok_or(StoreError::JobNotFound { job_id })?;
        Ok(JobSnapshot { job: entry.job.clone(), version: entry.version })
    }

    fn insert(&self, job: Job) -> Result<(), StoreError> {
        let mut jobs = self.lock();
        if jobs.contains_key(&job.id) {
            return Err(StoreError::DuplicateJob { job_id: job.id });
        }
        jobs.insert(job.id, Entry { job, version: 0 });
        Ok(())
    }

    fn list(&self) -> Result<Vec<JobSnapshot>, StoreError> {
        let jobs = self.lock();
        Ok(jobs
            .values()
            .map(|entry| JobSnapshot { job: entry.job.clone(), version: entry.version })
            .collect())
    }

    fn commit_status(
        &self,
        job_id: JobId,
        expected_version: u64,
        new_status: JobStatus,
    ) -> Result<JobSnapshot, StoreError> {
        let mut jobs = self.lock();
        let entry = jobs.get_mut(&job_id).ok_or(StoreError::JobNotFound { job_id })?;
        if entry.version != expected_version {
            return Err(StoreError::Conflict {
                job_id,
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.job.status = new_status;
        entry.job.touch();
        entry.version += 1;
        Ok(JobSnapshot { job: entry.job.clone(), version: entry.version })
    }

    fn commit_payment(
        &self,
        job_id: JobId,
        expected_version: u64,
        new_amount_paid: i64,
        new_payment_status: PaymentStatus,
        record: PaymentRecord,
    ) -> Result<JobSnapshot, StoreError> {
        let mut jobs = self.lock();
        let entry = jobs.get_mut(&job_id).ok_or(StoreError::JobNotFound { job_id })?;
        if entry.version != expected_version {
            return Err(StoreError::Conflict {
                job_id,
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.job.accounts.payments.push(record);
        entry.job.accounts.amount_paid = new_amount_paid;
        entry.job.accounts.payment_status = new_payment_status;
        entry.job.touch();
        entry.version += 1;
        Ok(JobSnapshot { job: entry.job.clone(), version: entry.version })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use signops_core::{PaymentMode, PaymentRecordId, Timestamp};

    fn make_job() -> Job {
        Job::new("Nimco House".to_string(), "Window decals".to_string(), 12_000)
    }

    fn make_record(amount: i64) -> PaymentRecord {
        PaymentRecord {
            id: PaymentRecordId::new(),
            amount,
            mode: PaymentMode::Cash,
            recorded_by: "Alice".to_string(),
            recorded_at: Timestamp::now(),
            notes: None,
        }
    }

    #[test]
    fn test_get_unknown_job() {
        let store = MemoryJobStore::new();
        assert!(matches!(
            store.get(JobId::new()),
            Err(StoreError::JobNotFound { .. })
        ));
    }

    #[test]
    fn test_insert_and_get() {
        let store = MemoryJobStore::new();
        let job = make_job();
        let id = job.id;
        store.insert(job).unwrap();
        let snapshot = store.get(id).unwrap();
        assert_eq!(snapshot.version, 0);
        assert_eq!(snapshot.job.id, id);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = MemoryJobStore::new();
        let job = make_job();
        store.insert(job.clone()).unwrap();
        assert!(matches!(
            store.insert(job),
            Err(StoreError::DuplicateJob { .. })
        ));
    }

    #[test]
    fn test_commit_status_bumps_version() {
        let store = MemoryJobStore::new();
        let job = make_job();
        let id = job.id;
        store.insert(job).unwrap();

        let after = store.commit_status(id, 0, JobStatus::SalesAssigned).unwrap();
        assert_eq!(after.version, 1);
        assert_eq!(after.job.status, JobStatus::SalesAssigned);
    }

    #[test]
    fn test_stale_version_conflicts() {
        let store = MemoryJobStore::new();
        let job = make_job();
        let id = job.id;
        store.insert(job).unwrap();
        store.commit_status(id, 0, JobStatus::SalesAssigned).unwrap();

        let err = store.commit_status(id, 0, JobStatus::SiteVisited).unwrap_err();
        match err {
            StoreError::Conflict { expected, actual, .. } => {
                assert_eq!(expected, 0);
                assert_eq!(actual, 1);
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
        // The losing write left nothing behind.
        assert_eq!(store.get(id).unwrap().job.status, JobStatus::SalesAssigned);
    }

    #[test]
    fn test_commit_payment_is_atomic() {
        let store = MemoryJobStore::new();
        let job = make_job();
        let id = job.id;
        store.insert(job).unwrap();

        let after = store
            .commit_payment(
                id,
                0,
                5_000,
                signops_core::PaymentStatus::PartiallyPaid,
                make_record(5_000),
            )
            .unwrap();
        assert_eq!(after.job.accounts.payments.len(), 1);
        assert_eq!(after.job.accounts.amount_paid, 5_000);
        assert_eq!(after.version, 1);
    }

    #[test]
    fn test_updated_at_refreshes_on_commit() {
        let store = MemoryJobStore::new();
        let job = make_job();
        let id = job.id;
        let created = job.created_at;
        store.insert(job).unwrap();
        let after = store.commit_status(id, 0, JobStatus::SalesAssigned).unwrap();
        assert!(after.job.updated_at >= created);
    }
}
