//! # Known-Answer Verifier
//!
//! The linear pipeline:
//!
//! ```text
//! START -> INIT -> (INIT_FAILED -> END_FAIL)
//!                | COMPUTE -> (COMPUTE_FAILED -> END_FAIL)
//!                           | VALIDATE -> (MISMATCH -> END_FAIL)
//!                                       | (MATCH -> REPORT -> TEARDOWN -> END_OK)
//! ```
//!
//! Teardown is owned by [`CryptoSession`]: every path that got past INIT
//! releases the provider, and INIT_FAILED releases nothing. Every failure
//! is terminal and is reported as one diagnostic line plus a failing
//! [`Outcome`].

use std::io::Write;
use std::process::ExitCode;

use kat_core::{DigestBuffer, KatError, KnownAnswer, SHA256_HELLO_WORLD};
use kat_crypto::{CryptoProvider, CryptoSession};
use serde::Serialize;

use crate::config::VerifierConfig;
use crate::report;

/// Terminal state of a verifier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Digest matched the known answer and was reported.
    Passed,
    /// The algorithm is not available; nothing was attempted.
    Unavailable,
    /// The crypto subsystem could not be initialized.
    InitFailed,
    /// The one-shot hash call returned an error.
    ComputeFailed,
    /// The digest differs from the known answer in length or content.
    Mismatch,
}

impl Outcome {
    /// True for the outcomes that exit with status 0.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed | Self::Unavailable)
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Runs one known-answer check against a provider.
#[derive(Debug)]
pub struct Verifier<P> {
    provider: P,
    config: VerifierConfig,
    known_answer: KnownAnswer,
    buffer_capacity: Option<usize>,
}

impl<P: CryptoProvider> Verifier<P> {
    /// Verifier for the embedded SHA-256 `"Hello World!"` vector.
    pub fn new(provider: P, config: VerifierConfig) -> Self {
        Self {
            provider,
            config,
            known_answer: SHA256_HELLO_WORLD,
            buffer_capacity: None,
        }
    }

    /// Check a different known answer.
    pub fn with_known_answer(mut self, known_answer: KnownAnswer) -> Self {
        self.known_answer = known_answer;
        self
    }

    /// Offer the provider an output buffer of `capacity` bytes instead of
    /// the algorithm's digest size.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity);
        self
    }

    /// The provider this verifier drives.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run the pipeline, writing the report to `out`.
    ///
    /// Pipeline failures come back as a failing [`Outcome`]. Only a failure
    /// to write the report is returned as an error.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Outcome, KatError> {
        let algorithm = self.known_answer.algorithm;
        if !self.config.is_enabled(algorithm) {
            tracing::info!(%algorithm, "algorithm not enabled; skipping known-answer check");
            report::unavailable(out, algorithm)?;
            return Ok(Outcome::Unavailable);
        }

        report::banner(out, algorithm)?;

        let outcome = match self.verify(out) {
            Ok(()) => Outcome::Passed,
            Err(KatError::Initialization(e)) => {
                tracing::error!(error = %e, "crypto subsystem initialization failed");
                report::init_failed(out)?;
                Outcome::InitFailed
            }
            Err(KatError::Compute(e)) => {
                tracing::error!(error = %e, %algorithm, "one-shot hash compute failed");
                report::compute_failed(out)?;
                Outcome::ComputeFailed
            }
            Err(KatError::Validation(mismatch)) => {
                tracing::error!(%mismatch, %algorithm, "known-answer validation failed");
                report::mismatch(out)?;
                Outcome::Mismatch
            }
            Err(e @ KatError::Io(_)) => return Err(e),
        };
        tracing::info!(?outcome, "known-answer check finished");
        Ok(outcome)
    }

    fn verify<W: Write>(&self, out: &mut W) -> Result<(), KatError> {
        let ka = &self.known_answer;
        let session = CryptoSession::acquire(&self.provider).map_err(KatError::Initialization)?;

        let mut digest = match self.buffer_capacity {
            Some(capacity) => DigestBuffer::with_capacity(capacity),
            None => DigestBuffer::for_algorithm(ka.algorithm),
        };
        session
            .hash_compute(ka.algorithm, ka.message, &mut digest)
            .map_err(KatError::Compute)?;
        tracing::debug!(produced = digest.len(), capacity = digest.capacity(), "digest computed");

        ka.check(&digest)?;
        report::success(out, ka, &digest)?;

        drop(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kat_crypto::Sha2Provider;

    fn run(verifier: &Verifier<Sha2Provider>) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = verifier.run(&mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_hello_world_passes() {
        let verifier = Verifier::new(Sha2Provider::new(), VerifierConfig::all_enabled());
        let (outcome, text) = run(&verifier);
        assert_eq!(outcome, Outcome::Passed);
        assert_eq!(outcome.exit_code(), 0);
        assert!(text.ends_with(
            "The SHA-256( 'Hello World!' ) is: \
             7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069\n"
        ));
        assert!(!verifier.provider().is_initialized());
    }

    #[test]
    fn test_undersized_buffer_is_compute_failure() {
        let verifier = Verifier::new(Sha2Provider::new(), VerifierConfig::all_enabled())
            .with_buffer_capacity(31);
        let (outcome, text) = run(&verifier);
        assert_eq!(outcome, Outcome::ComputeFailed);
        assert_eq!(outcome.exit_code(), 1);
        assert!(text.ends_with("hash compute failed\n"));
        assert!(!text.contains("successful"));
        assert!(!verifier.provider().is_initialized());
    }

    #[test]
    fn test_disabled_algorithm_skips_provider() {
        let config = VerifierConfig {
            sha256_enabled: false,
        };
        let verifier = Verifier::new(Sha2Provider::new(), config);
        let (outcome, text) = run(&verifier);
        assert_eq!(outcome, Outcome::Unavailable);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(text, "SHA-256 support not defined in this build.\n");
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert!(Outcome::Passed.is_success());
        assert!(Outcome::Unavailable.is_success());
        for failing in [Outcome::InitFailed, Outcome::ComputeFailed, Outcome::Mismatch] {
            assert!(!failing.is_success());
            assert_eq!(failing.exit_code(), 1);
        }
    }

    #[test]
    fn test_outcome_serde_form() {
        assert_eq!(
            serde_json::to_string(&Outcome::ComputeFailed).unwrap(),
            "\"compute_failed\""
        );
    }
}
