//! # Crypto Provider Trait
//!
//! The capability the verifier consumes. Implementations own their global
//! state; callers are expected to go through [`CryptoSession`] rather than
//! pairing `init` and `free` by hand.
//!
//! [`CryptoSession`]: crate::CryptoSession

use kat_core::{CryptoError, HashAlgorithm};

/// One-shot hashing backend with explicit subsystem lifetime.
pub trait CryptoProvider {
    /// Acquire provider state. Calling it again while initialized succeeds
    /// without side effects.
    fn init(&self) -> Result<(), CryptoError>;

    /// Hash `input` with `algorithm` into `out`, returning the number of
    /// bytes written.
    ///
    /// Must return [`CryptoError::BufferTooSmall`] when `out` is shorter
    /// than `algorithm.output_len()`, without writing a truncated digest,
    /// and [`CryptoError::BadState`] when the provider is not initialized.
    fn hash_compute(
        &self,
        algorithm: HashAlgorithm,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<usize, CryptoError>;

    /// Release provider state. Safe to call when not initialized.
    fn free(&self);
}
