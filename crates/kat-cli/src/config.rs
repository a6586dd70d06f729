//! # Verifier Configuration
//!
//! Which algorithms are available is decided once at startup. The cargo
//! `sha256` feature sets the default; `--disable-sha256` can switch it off
//! at runtime so the "not defined" path is reachable from a normal build.

use clap::Args;
use kat_core::HashAlgorithm;

/// Startup configuration for [`Verifier`](crate::Verifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    /// SHA-256 is available to the verifier.
    pub sha256_enabled: bool,
}

impl VerifierConfig {
    /// Configuration derived from the enabled cargo features.
    pub fn from_build() -> Self {
        Self {
            sha256_enabled: cfg!(feature = "sha256"),
        }
    }

    /// Configuration with every algorithm available.
    pub fn all_enabled() -> Self {
        Self {
            sha256_enabled: true,
        }
    }

    /// Whether `algorithm` may be exercised.
    pub fn is_enabled(&self, algorithm: HashAlgorithm) -> bool {
        match algorithm {
            HashAlgorithm::Sha256 => self.sha256_enabled,
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Command-line arguments for the verifier.
#[derive(Args, Debug, Default)]
pub struct VerifierArgs {
    /// Behave as if SHA-256 support were not compiled in.
    #[arg(long)]
    pub disable_sha256: bool,
}

impl VerifierArgs {
    /// Apply the arguments on top of the build configuration.
    pub fn into_config(self) -> VerifierConfig {
        let mut config = VerifierConfig::from_build();
        if self.disable_sha256 {
            config.sha256_enabled = false;
        }
        config
    }
}
