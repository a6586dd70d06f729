//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the verifier. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Provider failures (`CryptoError`) carry the status the provider
//!   reported, e.g. the required versus supplied buffer size.
//! - Validation failures (`Mismatch`) are correctness failures, kept apart
//!   from operational ones.
//! - `KatError` ties each failure to the pipeline step it happened in.

use thiserror::Error;

use crate::algorithm::HashAlgorithm;

/// Top-level error type for the verification pipeline.
#[derive(Error, Debug)]
pub enum KatError {
    /// The crypto subsystem could not be acquired.
    #[error("crypto subsystem initialization failed: {0}")]
    Initialization(#[source] CryptoError),

    /// The one-shot digest call returned a non-success status.
    #[error("one-shot hash compute failed: {0}")]
    Compute(#[source] CryptoError),

    /// The digest does not match the known answer.
    #[error("known-answer validation failed: {0}")]
    Validation(#[from] Mismatch),

    /// Writing the report failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Status reported by a crypto provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The provider is not initialized, or was already released.
    #[error("crypto provider is not initialized")]
    BadState,

    /// The provider does not implement the requested algorithm.
    ///
    /// `Sha2Provider` implements every `HashAlgorithm` variant and never
    /// returns this; it is the status for providers with a narrower set.
    #[error("algorithm {0} is not supported by this provider")]
    NotSupported(HashAlgorithm),

    /// The output buffer cannot hold the full digest.
    #[error("output buffer too small: {required} bytes required, {capacity} available")]
    BufferTooSmall {
        /// Digest size of the requested algorithm.
        required: usize,
        /// Capacity of the supplied buffer.
        capacity: usize,
    },

    /// Provider-specific initialization failure.
    #[error("initialization failed: {0}")]
    InitFailed(String),

    /// The provider reported a length the output buffer rejected.
    #[error("output buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Violations of the write-once `DigestBuffer` contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The buffer already holds a digest.
    #[error("digest buffer was already written")]
    AlreadyWritten,

    /// The produced length is larger than the buffer.
    #[error("produced length {len} exceeds buffer capacity {capacity}")]
    LengthExceedsCapacity {
        /// Length reported by the writer.
        len: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },
}

/// A computed digest that differs from the known answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Produced length differs from the expected vector length.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    Length {
        /// Length of the expected vector.
        expected: usize,
        /// Length the provider produced.
        actual: usize,
    },

    /// Lengths agree but the bytes differ.
    #[error("digest content differs from the expected vector")]
    Content,
}
