//! `signops show` — render a job's per-department timelines and progress.

use std::path::Path;

use signops_store::JobStore;
use signops_timeline::derive_all;

use crate::ledger;

/// Arguments for the `show` subcommand.
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Job identifier (UUID).
    #[arg(long)]
    pub job: String,
}

pub fn run(file: &Path, args: ShowArgs) -> anyhow::Result<()> {
    let store = ledger::load(file)?;
    let snapshot = store.get(ledger::parse_job_id(&args.job)?)?;
    let job = snapshot.job;

    println!("{} — {} ({})", job.id, job.customer_name, job.status.label());
    println!(
        "amount {} | paid {} | {}",
        job.amount,
        job.accounts.amount_paid,
        job.accounts.payment_status.label()
    );

    for view in derive_all(&job) {
        println!();
        if view.items.is_empty() {
            println!("{} — not reached", view.department);
            continue;
        }
        println!("{} — {}%", view.department, view.progress);
        for item in &view.items {
            let marker = if item.completed {
                "[x]"
            } else if item.current {
                "[>]"
            } else {
                "[ ]"
            };
            match item.timestamp {
                Some(ts) => println!("  {marker} {} ({ts})", item.label),
                None => println!("  {marker} {}", item.label),
            }
        }
    }
    Ok(())
}
