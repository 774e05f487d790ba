//! # signops CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

/// Sign-shop workflow CLI.
///
/// Tracks jobs from intake through sales, design, production, printing,
/// and payment collection, against a JSON job ledger.
#[derive(Parser, Debug)]
#[command(name = "signops", version, about)]
struct Cli {
    /// Path to the job ledger file.
    #[arg(long, default_value = "jobs.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a job at intake.
    New(signops_cli::create::CreateArgs),
    /// Show per-department timelines and progress for a job.
    Show(signops_cli::show::ShowArgs),
    /// List the statuses a job can move to next.
    Actions(signops_cli::actions::ActionsArgs),
    /// Request a status transition.
    Advance(signops_cli::advance::AdvanceArgs),
    /// Record a payment.
    Pay(signops_cli::pay::PayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => signops_cli::create::run(&cli.file, args),
        Commands::Show(args) => signops_cli::show::run(&cli.file, args),
        Commands::Actions(args) => signops_cli::actions::run(&cli.file, args),
        Commands::Advance(args) => signops_cli::advance::run(&cli.file, args),
        Commands::Pay(args) => signops_cli::pay::run(&cli.file, args),
    }
}
