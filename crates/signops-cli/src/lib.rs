//! # signops-cli — Command Handlers
//!
//! One module per subcommand, each exposing a clap `Args` struct and a
//! `run` function. The binary in `main.rs` assembles and dispatches.
//!
//! All commands operate on a JSON job ledger file: it is loaded into a
//! [`MemoryJobStore`](signops_store::MemoryJobStore), the command runs
//! against the store, and mutating commands write the ledger back.

pub mod actions;
pub mod advance;
pub mod create;
pub mod ledger;
pub mod pay;
pub mod show;
