//! # kat-cli — Known-Answer Hash Verifier
//!
//! Runs one fixed known-answer test against a crypto provider:
//!
//! 1. acquire the crypto subsystem
//! 2. hash the embedded message with a single one-shot call
//! 3. compare length and bytes against the embedded expected digest
//! 4. print the report to stdout
//! 5. release the subsystem and signal the result through the exit code
//!
//! ## Modules
//!
//! - `config` — startup configuration and the clap arguments that feed it
//! - `report` — every line the verifier writes to stdout
//! - `verifier` — the pipeline and its `Outcome`
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the pipeline; `main.rs` only wires
//!   stdout, logging and the provider together.
//! - The report is the only thing written to stdout. Logs go to stderr.
//! - `Outcome` derives `Serialize` so callers embedding the verifier can
//!   record results; the binary does not emit machine-readable output.

pub mod config;
pub mod report;
pub mod verifier;

pub use config::{VerifierArgs, VerifierConfig};
pub use verifier::{Outcome, Verifier};
