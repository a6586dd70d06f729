//! # kat CLI Entry Point
//!
//! Wires stdout, logging and the SHA-256 provider into the verifier and
//! turns its outcome into the process exit status.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kat_cli::{Verifier, VerifierArgs};
use kat_crypto::Sha2Provider;
use tracing_subscriber::EnvFilter;

/// Known-answer hash verifier.
///
/// Hashes the embedded message "Hello World!" with SHA-256 in one shot and
/// checks the digest against the embedded expected vector. Exits 0 when the
/// digest matches (or SHA-256 is not available), 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "kat", version, about)]
struct Cli {
    #[command(flatten)]
    verifier: VerifierArgs,
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs are opt-in through RUST_LOG and never share stdout with the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.verifier.into_config();
    tracing::debug!(?config, "starting known-answer check");

    let verifier = Verifier::new(Sha2Provider::new(), config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = verifier
        .run(&mut out)
        .context("failed to write verifier report")?;
    out.flush().context("failed to flush stdout")?;

    Ok(outcome.into())
}
