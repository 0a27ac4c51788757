//! Runtime resolution of digest-family names to concrete primitives.
//!
//! The supported set is whatever the enabled algorithm features provide;
//! the crate keeps no registry of its own.

use digest::DynDigest;

use crate::error::{Error, Result};

/// Resolve an algorithm name to a fresh, single-use digest primitive.
///
/// Matching ignores case and an optional dash, so `"SHA-256"`, `"sha256"`
/// and `"Sha-256"` all resolve to the same primitive. Every call returns a
/// private instance; primitives are never shared between computations.
pub(crate) fn resolve(name: &str) -> Result<Box<dyn DynDigest>> {
    let mut normalized = name.to_ascii_uppercase();
    normalized.retain(|c| c != '-');

    match normalized.as_str() {
        #[cfg(feature = "md5")]
        "MD5" => Ok(Box::new(md5::Md5::default())),
        #[cfg(feature = "sha1")]
        "SHA1" => Ok(Box::new(sha1::Sha1::default())),
        #[cfg(feature = "sha2")]
        "SHA224" => Ok(Box::new(sha2::Sha224::default())),
        #[cfg(feature = "sha2")]
        "SHA256" => Ok(Box::new(sha2::Sha256::default())),
        #[cfg(feature = "sha2")]
        "SHA384" => Ok(Box::new(sha2::Sha384::default())),
        #[cfg(feature = "sha2")]
        "SHA512" => Ok(Box::new(sha2::Sha512::default())),
        #[cfg(feature = "sha3")]
        "SHA3224" => Ok(Box::new(sha3::Sha3_224::default())),
        #[cfg(feature = "sha3")]
        "SHA3256" => Ok(Box::new(sha3::Sha3_256::default())),
        #[cfg(feature = "sha3")]
        "SHA3384" => Ok(Box::new(sha3::Sha3_384::default())),
        #[cfg(feature = "sha3")]
        "SHA3512" => Ok(Box::new(sha3::Sha3_512::default())),
        _ => Err(Error::UnsupportedAlgorithm(name.to_string())),
    }
}

/// Canonical names of the algorithms enabled by the compiled feature set.
pub fn names() -> &'static [&'static str] {
    &[
        #[cfg(feature = "md5")]
        "MD5",
        #[cfg(feature = "sha1")]
        "SHA-1",
        #[cfg(feature = "sha2")]
        "SHA-224",
        #[cfg(feature = "sha2")]
        "SHA-256",
        #[cfg(feature = "sha2")]
        "SHA-384",
        #[cfg(feature = "sha2")]
        "SHA-512",
        #[cfg(feature = "sha3")]
        "SHA3-224",
        #[cfg(feature = "sha3")]
        "SHA3-256",
        #[cfg(feature = "sha3")]
        "SHA3-384",
        #[cfg(feature = "sha3")]
        "SHA3-512",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_fails_fast() {
        let err = resolve("NOT-A-DIGEST").err().unwrap();
        assert!(matches!(err, Error::UnsupportedAlgorithm(name) if name == "NOT-A-DIGEST"));
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_name_matching_is_lenient() {
        for name in ["SHA-256", "sha256", "Sha-256", "SHA256"] {
            let primitive = resolve(name).unwrap();
            assert_eq!(primitive.output_size(), 32);
        }
    }

    #[test]
    fn test_listed_names_resolve() {
        for name in names() {
            assert!(resolve(name).is_ok(), "'{name}' should resolve");
        }
    }
}
