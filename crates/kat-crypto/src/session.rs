//! # Crypto Session
//!
//! Scoped ownership of an initialized provider. Acquiring a session calls
//! `init`; dropping it calls `free` exactly once. A failed `init` yields no
//! session, so nothing is released for it.

use kat_core::{CryptoError, DigestBuffer, HashAlgorithm};

use crate::provider::CryptoProvider;

/// An initialized provider, released on drop.
#[derive(Debug)]
pub struct CryptoSession<'p, P: CryptoProvider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: CryptoProvider + ?Sized> CryptoSession<'p, P> {
    /// Initialize `provider` and hold it until the session is dropped.
    pub fn acquire(provider: &'p P) -> Result<Self, CryptoError> {
        provider.init()?;
        Ok(Self { provider })
    }

    /// One-shot hash of `input` into `out`.
    ///
    /// The full buffer capacity is offered to the provider; the produced
    /// length is recorded in `out`.
    pub fn hash_compute(
        &self,
        algorithm: HashAlgorithm,
        input: &[u8],
        out: &mut DigestBuffer,
    ) -> Result<usize, CryptoError> {
        out.write_with(|buf| self.provider.hash_compute(algorithm, input, buf))
    }
}

impl<P: CryptoProvider + ?Sized> Drop for CryptoSession<'_, P> {
    fn drop(&mut self) {
        self.provider.free();
    }
}
