//! `signops new` — create a job at intake.

use std::path::Path;

use signops_core::Job;
use signops_store::JobStore;

use crate::ledger;

/// Arguments for the `new` subcommand.
#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Customer the sign is for.
    #[arg(long)]
    pub customer: String,
    /// What the customer asked for.
    #[arg(long)]
    pub description: String,
    /// Agreed price in whole currency units (0 until the sales visit
    /// finalizes it).
    #[arg(long, default_value_t = 0)]
    pub amount: i64,
}

pub fn run(file: &Path, args: CreateArgs) -> anyhow::Result<()> {
    let store = ledger::load(file)?;
    let job = Job::new(args.customer, args.description, args.amount);
    let id = job.id;
    store.insert(job)?;
    ledger::save(file, &store)?;
    println!("created {}", id.as_uuid());
    Ok(())
}
