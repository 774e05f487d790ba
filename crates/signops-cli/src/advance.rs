//! `signops advance` — request a status transition.

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;

use signops_core::JobStatus;
use signops_store::{request_transition, TransitionError};

use crate::ledger;

/// Arguments for the `advance` subcommand.
#[derive(clap::Args, Debug)]
pub struct AdvanceArgs {
    /// Job identifier (UUID).
    #[arg(long)]
    pub job: String,
    /// Target status (stored encoding, e.g. `design_approved`).
    #[arg(long)]
    pub to: String,
}

pub fn run(file: &Path, args: AdvanceArgs) -> anyhow::Result<()> {
    let target = JobStatus::from_str(&args.to)
        .with_context(|| format!("unregistered status {:?}", args.to))?;
    let store = ledger::load(file)?;
    let job_id = ledger::parse_job_id(&args.job)?;

    match request_transition(&store, job_id, target) {
        Ok(outcome) => {
            ledger::save(file, &store)?;
            println!("{job_id}: {} -> {}", outcome.from.label(), outcome.to.label());
            Ok(())
        }
        Err(TransitionError::Rejected { validation }) => {
            // Blocked, not broken: report the reason and leave the ledger
            // untouched.
            println!(
                "blocked: {}",
                validation.reason.as_deref().unwrap_or("transition not allowed")
            );
            if let Some(minimum) = validation.required_payment_status {
                println!("requires: {}", minimum.label());
            }
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
