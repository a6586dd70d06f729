//! # Digest Buffer
//!
//! Fixed-capacity output buffer for a one-shot digest call.
//!
//! ## Invariants
//!
//! - The backing storage is zeroed at construction.
//! - It is written at most once, through [`DigestBuffer::write_with`].
//! - The produced length never exceeds the capacity.

use crate::algorithm::HashAlgorithm;
use crate::error::BufferError;

/// Write-once output buffer with a produced-length field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestBuffer {
    bytes: Vec<u8>,
    len: usize,
    written: bool,
}

impl DigestBuffer {
    /// Create a buffer sized for the digest of `algorithm`.
    pub fn for_algorithm(algorithm: HashAlgorithm) -> Self {
        Self::with_capacity(algorithm.output_len())
    }

    /// Create a zeroed buffer of arbitrary capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: vec![0u8; capacity],
            len: 0,
            written: false,
        }
    }

    /// Total bytes the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Bytes produced by the writer; zero until written.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been produced.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once [`write_with`](Self::write_with) has succeeded.
    pub fn is_written(&self) -> bool {
        self.written
    }

    /// The produced prefix of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Render the produced bytes as lowercase hex, two digits per byte.
    pub fn to_hex(&self) -> String {
        self.as_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Hand the whole zeroed backing slice to `write`, which returns the
    /// number of bytes it produced.
    ///
    /// Fails with [`BufferError::AlreadyWritten`] on a second call and with
    /// [`BufferError::LengthExceedsCapacity`] if the writer claims more bytes
    /// than the buffer holds. Errors from `write` are passed through and
    /// leave the buffer unwritten.
    pub fn write_with<F, E>(&mut self, write: F) -> Result<usize, E>
    where
        F: FnOnce(&mut [u8]) -> Result<usize, E>,
        E: From<BufferError>,
    {
        if self.written {
            return Err(BufferError::AlreadyWritten.into());
        }
        let produced = write(self.bytes.as_mut_slice())?;
        if produced > self.bytes.len() {
            // Do not leave partial output behind.
            self.bytes.iter_mut().for_each(|b| *b = 0);
            return Err(BufferError::LengthExceedsCapacity {
                len: produced,
                capacity: self.bytes.len(),
            }
            .into());
        }
        self.len = produced;
        self.written = true;
        Ok(produced)
    }
}
