//! # Ledger File
//!
//! Loads and saves the JSON job ledger the CLI operates on. A missing
//! file is an empty ledger; saves are pretty-printed with jobs in
//! creation order so diffs stay readable.

use std::fs;
use std::path::Path;

use anyhow::Context;

use signops_core::{Job, JobId};
use signops_store::{JobStore, MemoryJobStore};

/// Load the ledger file into an in-memory store.
pub fn load(path: &Path) -> anyhow::Result<MemoryJobStore> {
    if !path.exists() {
        return Ok(MemoryJobStore::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading ledger {}", path.display()))?;
    let jobs: Vec<Job> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing ledger {}", path.display()))?;
    tracing::debug!(path = %path.display(), jobs = jobs.len(), "loaded ledger");
    Ok(MemoryJobStore::from_jobs(jobs))
}

/// Write the store's jobs back to the ledger file.
pub fn save(path: &Path, store: &MemoryJobStore) -> anyhow::Result<()> {
    let mut jobs: Vec<Job> = store
        .list()
        .context("listing jobs")?
        .into_iter()
        .map(|snapshot| snapshot.job)
        .collect();
    jobs.sort_by_key(|job| job.created_at);
    let raw = serde_json::to_string_pretty(&jobs).context("serializing ledger")?;
    fs::write(path, raw).with_context(|| format!("writing ledger {}", path.display()))?;
    tracing::debug!(path = %path.display(), jobs = jobs.len(), "saved ledger");
    Ok(())
}

/// Parse a `--job` argument into a [`JobId`].
pub fn parse_job_id(s: &str) -> anyhow::Result<JobId> {
    JobId::parse(s).with_context(|| format!("invalid job id {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let store = load(Path::new("/nonexistent/ledger.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let store = MemoryJobStore::new();
        let job = Job::new("Mehran Motors".to_string(), "Pillar sign".to_string(), 30_000);
        let id = job.id;
        store.insert(job).unwrap();
        save(&path, &store).unwrap();

        let reloaded = load(&path).unwrap();
        let snapshot = reloaded.get(id).unwrap();
        assert_eq!(snapshot.job.customer_name, "Mehran Motors");
        assert_eq!(snapshot.job.amount, 30_000);
    }

    #[test]
    fn test_parse_job_id_rejects_garbage() {
        assert!(parse_job_id("nope").is_err());
    }
}
