//! # Report Output
//!
//! Every line the verifier prints. Kept in one place so the stdout format
//! can be checked line by line.

use std::io::{self, Write};

use kat_core::{DigestBuffer, HashAlgorithm, KnownAnswer};

/// Header printed before the subsystem is initialized.
pub fn banner(out: &mut impl Write, algorithm: HashAlgorithm) -> io::Result<()> {
    write!(
        out,
        "PSA Crypto API: {} example\n\n",
        algorithm.display_name()
    )
}

/// Single line printed when the algorithm is not available in this build.
pub fn unavailable(out: &mut impl Write, algorithm: HashAlgorithm) -> io::Result<()> {
    writeln!(
        out,
        "{} support not defined in this build.",
        algorithm.display_name()
    )
}

pub fn init_failed(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "crypto init failed")
}

pub fn compute_failed(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "hash compute failed")
}

/// Length and content mismatches print the same line.
pub fn mismatch(out: &mut impl Write) -> io::Result<()> {
    write!(out, "One-shot hash operation gave the wrong result!\n\n")
}

/// Confirmation, then the hex digest followed by the hashed message.
pub fn success(
    out: &mut impl Write,
    known_answer: &KnownAnswer,
    digest: &DigestBuffer,
) -> io::Result<()> {
    write!(out, "One-shot hash operation successful!\n\n")?;
    writeln!(
        out,
        "The {}( '{}' ) is: {}",
        known_answer.algorithm.display_name(),
        known_answer.message_text(),
        digest.to_hex()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kat_core::{BufferError, SHA256_HELLO_WORLD};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            render(|o| banner(o, HashAlgorithm::Sha256)),
            "PSA Crypto API: SHA-256 example\n\n"
        );
    }

    #[test]
    fn test_unavailable_is_single_line() {
        let text = render(|o| unavailable(o, HashAlgorithm::Sha256));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("not defined"));
    }

    #[test]
    fn test_success_lines() {
        let mut digest = DigestBuffer::for_algorithm(HashAlgorithm::Sha256);
        digest
            .write_with::<_, BufferError>(|buf| {
                buf.copy_from_slice(SHA256_HELLO_WORLD.expected);
                Ok(32)
            })
            .unwrap();
        let text = render(|o| success(o, &SHA256_HELLO_WORLD, &digest));
        assert_eq!(
            text,
            "One-shot hash operation successful!\n\n\
             The SHA-256( 'Hello World!' ) is: \
             7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069\n"
        );
    }
}
