//! # SHA-256 Provider
//!
//! [`CryptoProvider`] backed by the RustCrypto `sha2` crate.
//!
//! `sha2` keeps no global state, so `init`/`free` only toggle a flag. The
//! flag still matters: hashing outside an init/free window is rejected the
//! same way a stateful provider would reject it.

use std::cell::Cell;

use kat_core::{CryptoError, HashAlgorithm};
use sha2::{Digest, Sha256};

use crate::provider::CryptoProvider;

/// SHA-256 provider. Single-threaded by construction (`!Sync`).
#[derive(Debug, Default)]
pub struct Sha2Provider {
    initialized: Cell<bool>,
}

impl Sha2Provider {
    /// Create an uninitialized provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a successful `init` and the next `free`.
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }
}

impl CryptoProvider for Sha2Provider {
    fn init(&self) -> Result<(), CryptoError> {
        if !self.initialized.replace(true) {
            tracing::debug!(provider = "sha2", "crypto provider initialized");
        }
        Ok(())
    }

    fn hash_compute(
        &self,
        algorithm: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<usize, CryptoError> {
        if !self.initialized.get() {
            return Err(CryptoError::BadState);
        }
        let required = algorithm.output_len();
        if out.len() < required {
            return Err(CryptoError::BufferTooSmall {
                required,
                capacity: out.len(),
            });
        }
        match algorithm {
            HashAlgorithm::Sha256 => {
                let hash = Sha256::digest(input);
                out[..required].copy_from_slice(&hash);
            }
        }
        tracing::trace!(%algorithm, input_len = input.len(), "one-shot hash computed");
        Ok(required)
    }

    fn free(&self) {
        if self.initialized.replace(false) {
            tracing::debug!(provider = "sha2", "crypto provider released");
        }
    }
}
