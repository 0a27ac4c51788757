//! Digest verification against an expected hex value.

use std::io::Read;

use crate::error::Result;
use crate::hasher::{digest, digest_stream};

/// Outcome of a verification: the computed digest, the expected digest, and
/// the exact bytes that were hashed.
///
/// Immutable once constructed. The expected value is normalized to uppercase
/// at construction; equality is case-insensitive either way, since different
/// tools emit hex digests in either case. A mismatch is a normal outcome,
/// not an error.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    computed: String,
    expected: String,
    content: Vec<u8>,
}

impl VerificationResult {
    fn new(computed: String, expected: &str, content: Vec<u8>) -> Self {
        Self {
            computed,
            expected: expected.to_ascii_uppercase(),
            content,
        }
    }

    /// The digest computed from the content, as produced.
    pub fn computed(&self) -> &str {
        &self.computed
    }

    /// The caller-supplied expected digest, uppercased.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The exact bytes that were hashed.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Reclaim the hashed bytes without copying.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Whether computed and expected digests match, ignoring case.
    pub fn is_equal(&self) -> bool {
        self.computed.eq_ignore_ascii_case(&self.expected)
    }
}

/// Verify an in-memory byte sequence against an expected hex digest.
pub fn verify(content: &[u8], algorithm_name: &str, expected_hex: &str) -> Result<VerificationResult> {
    let computed = digest(content, algorithm_name)?;
    Ok(VerificationResult::new(
        computed,
        expected_hex,
        content.to_vec(),
    ))
}

/// Verify a stream against an expected hex digest, retaining the consumed
/// bytes in the result so the caller can act on the verified payload without
/// re-reading the source.
pub fn verify_stream<R: Read>(
    source: R,
    algorithm_name: &str,
    expected_hex: &str,
) -> Result<VerificationResult> {
    let (computed, content) = digest_stream(source, algorithm_name)?;
    Ok(VerificationResult::new(computed, expected_hex, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "md5")]
    mod md5 {
        use std::io::Cursor;

        use super::super::*;

        const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";
        const FOX_MD5_LOWER: &str = "9e107d9d372bb6826bd81d3542a419d6";

        #[test]
        fn test_match_is_case_insensitive() {
            let result = verify(FOX, "MD5", FOX_MD5_LOWER).unwrap();
            assert!(result.is_equal());
            assert_eq!(result.computed(), FOX_MD5_LOWER.to_ascii_uppercase());
        }

        #[test]
        fn test_expected_is_uppercased() {
            let result = verify(FOX, "MD5", FOX_MD5_LOWER).unwrap();
            assert_eq!(result.expected(), FOX_MD5_LOWER.to_ascii_uppercase());
        }

        #[test]
        fn test_mismatch_is_not_an_error() {
            let result = verify(FOX, "MD5", "00000000000000000000000000000000").unwrap();
            assert!(!result.is_equal());
        }

        #[test]
        fn test_content_is_retained() {
            let result = verify_stream(Cursor::new(FOX), "MD5", FOX_MD5_LOWER).unwrap();
            assert!(result.is_equal());
            assert_eq!(result.content(), FOX);
            assert_eq!(result.into_content(), FOX);
        }
    }

    #[test]
    fn test_unknown_algorithm_is_surfaced() {
        let err = verify(b"anything", "WHIRLPOOL-9000", "AB").unwrap_err();
        assert!(matches!(err, crate::Error::UnsupportedAlgorithm(_)));
    }
}
