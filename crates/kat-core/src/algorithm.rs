//! # Hash Algorithm Identifier
//!
//! Names the hash function a provider is asked to run. The verifier uses a
//! single compile-time constant value; the enum exists so providers can
//! reject anything they do not implement.

use serde::{Deserialize, Serialize};

/// The hash algorithm requested from a crypto provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4), 32-byte output.
    Sha256,
}

impl HashAlgorithm {
    /// Size of the digest this algorithm produces, in bytes.
    pub const fn output_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
        }
    }

    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }

    /// Human-facing name used in the report.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_output_len() {
        assert_eq!(HashAlgorithm::Sha256.output_len(), 32);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "sha256");
        assert_eq!(HashAlgorithm::Sha256.display_name(), "SHA-256");
    }

    #[test]
    fn test_algorithm_serde_form() {
        let json = serde_json::to_string(&HashAlgorithm::Sha256).unwrap();
        assert_eq!(json, "\"sha256\"");
        let back: HashAlgorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HashAlgorithm::Sha256);
    }
}
