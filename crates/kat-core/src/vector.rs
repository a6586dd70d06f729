//! # Known-Answer Vectors
//!
//! A known answer pairs a fixed input message with the digest a correct
//! implementation must produce for it.
//!
//! ## Validation
//!
//! [`KnownAnswer::check`] is two-part: the produced length must equal the
//! expected length, then the bytes must be equal over that length. A
//! length mismatch fails even if every compared byte agrees.

use crate::algorithm::HashAlgorithm;
use crate::buffer::DigestBuffer;
use crate::error::Mismatch;

/// SHA-256 of `b"Hello World!"` (12 bytes, no trailing NUL).
pub const SHA256_HELLO_WORLD: KnownAnswer = KnownAnswer {
    algorithm: HashAlgorithm::Sha256,
    message: b"Hello World!",
    expected: &[
        0x7f, 0x83, 0xb1, 0x65, 0x7f, 0xf1, 0xfc, 0x53, 0xb9, 0x2d, 0xc1, 0x81, 0x48, 0xa1, 0xd6,
        0x5d, 0xfc, 0x2d, 0x4b, 0x1f, 0xa3, 0xd6, 0x77, 0x28, 0x4a, 0xdd, 0xd2, 0x00, 0x12, 0x6d,
        0x90, 0x69,
    ],
};

/// An input message and its expected digest under one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Algorithm the expected digest was computed with.
    pub algorithm: HashAlgorithm,
    /// Input message.
    pub message: &'static [u8],
    /// Expected digest.
    pub expected: &'static [u8],
}

impl KnownAnswer {
    /// Compare a computed digest against the expected vector.
    pub fn check(&self, computed: &DigestBuffer) -> Result<(), Mismatch> {
        self.check_bytes(computed.as_bytes())
    }

    /// Same as [`check`](Self::check) over a raw produced slice.
    pub fn check_bytes(&self, produced: &[u8]) -> Result<(), Mismatch> {
        if produced.len() != self.expected.len() {
            return Err(Mismatch::Length {
                expected: self.expected.len(),
                actual: produced.len(),
            });
        }
        if produced != self.expected {
            return Err(Mismatch::Content);
        }
        Ok(())
    }

    /// The message as text for the report. Non-UTF-8 bytes are replaced.
    pub fn message_text(&self) -> std::borrow::Cow<'static, str> {
        String::from_utf8_lossy(self.message)
    }
}
