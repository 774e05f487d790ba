//! `signops pay` — record a payment against a job.

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;

use signops_core::PaymentMode;
use signops_store::record_payment;

use crate::ledger;

/// Arguments for the `pay` subcommand.
#[derive(clap::Args, Debug)]
pub struct PayArgs {
    /// Job identifier (UUID).
    #[arg(long)]
    pub job: String,
    /// Amount in whole currency units.
    #[arg(long)]
    pub amount: i64,
    /// Payment mode: cash, card, bank_transfer, cheque, online.
    #[arg(long, default_value = "cash")]
    pub mode: String,
    /// Who recorded the payment.
    #[arg(long)]
    pub by: String,
    /// Free-form notes.
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn run(file: &Path, args: PayArgs) -> anyhow::Result<()> {
    let mode = PaymentMode::from_str(&args.mode)
        .with_context(|| format!("unknown payment mode {:?}", args.mode))?;
    let store = ledger::load(file)?;
    let job_id = ledger::parse_job_id(&args.job)?;

    let outcome = record_payment(&store, job_id, args.amount, mode, &args.by, args.notes)?;
    ledger::save(file, &store)?;

    println!(
        "recorded {} via {mode}; paid {} total ({})",
        args.amount,
        outcome.amount_paid,
        outcome.payment_status.label()
    );
    Ok(())
}
