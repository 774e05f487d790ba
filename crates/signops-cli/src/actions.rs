//! `signops actions` — list what a job can do next, with blocked reasons.

use std::path::Path;

use signops_store::JobStore;
use signops_workflow::next_statuses;

use crate::ledger;

/// Arguments for the `actions` subcommand.
#[derive(clap::Args, Debug)]
pub struct ActionsArgs {
    /// Job identifier (UUID).
    #[arg(long)]
    pub job: String,
}

pub fn run(file: &Path, args: ActionsArgs) -> anyhow::Result<()> {
    let store = ledger::load(file)?;
    let snapshot = store.get(ledger::parse_job_id(&args.job)?)?;
    let job = snapshot.job;

    let actions = next_statuses(job.status, job.payment_status());
    if actions.is_empty() {
        println!("{} is {} — no further transitions", job.id, job.status.label());
        return Ok(());
    }

    println!("{} is {}; next:", job.id, job.status.label());
    for action in actions {
        if action.blocked {
            println!(
                "  - {} ({}) BLOCKED: {}",
                action.label,
                action.status,
                action.reason.as_deref().unwrap_or("not allowed")
            );
        } else {
            println!("  - {} ({})", action.label, action.status);
        }
    }
    Ok(())
}
