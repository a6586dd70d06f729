//! # kat-core — Foundational Types for the Known-Answer Verifier
//!
//! This crate is the leaf of the workspace. It defines the values that flow
//! through the verification pipeline without knowing how a digest is
//! actually computed.
//!
//! ## Key Design Principles
//!
//! 1. **One algorithm identifier.** `HashAlgorithm` is a closed enum with a
//!    single `Sha256` variant. Its digest size drives buffer sizing.
//!
//! 2. **Write-once output buffer.** `DigestBuffer` is zero-initialized,
//!    accepts exactly one write, and never reports a produced length larger
//!    than its capacity.
//!
//! 3. **Embedded known answers.** `KnownAnswer` pairs a fixed message with
//!    its expected digest. Validation is length equality followed by
//!    byte-for-byte equality.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kat-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public value types that can appear in a result record (`HashAlgorithm`)
//!   derive `Serialize`/`Deserialize`, even though the binary itself only
//!   prints text.

pub mod algorithm;
pub mod buffer;
pub mod error;
pub mod vector;

// Re-export primary types for ergonomic imports.
pub use algorithm::HashAlgorithm;
pub use buffer::DigestBuffer;
pub use error::{BufferError, CryptoError, KatError, Mismatch};
pub use vector::{KnownAnswer, SHA256_HELLO_WORLD};
