//! # kat-crypto — Crypto Provider Seam
//!
//! The verifier never hashes anything itself. It talks to a
//! [`CryptoProvider`] through three calls:
//!
//! - `init` — acquire whatever global state the provider needs.
//! - `hash_compute` — one-shot digest into a caller-owned buffer.
//! - `free` — release the provider state.
//!
//! [`CryptoSession`] wraps `init`/`free` in a guard so release happens on
//! every exit path after a successful init, and never when init failed.
//!
//! ## Crate Policy
//!
//! - Depends only on `kat-core` internally.
//! - `Sha2Provider` is the only production provider. Tests exercise it with
//!   real SHA-256; failure paths use small local providers.
//! - No `unsafe` code.

pub mod provider;
pub mod session;
pub mod sha256;

pub use provider::CryptoProvider;
pub use session::CryptoSession;
pub use sha256::Sha2Provider;
