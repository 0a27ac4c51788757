//! Streaming digest computation and hex checksum verification.
//!
//! Computes digests over in-memory content or streamed input, renders them
//! as uppercase hex, and compares them case-insensitively against expected
//! values while keeping the exact bytes that were hashed available to the
//! caller. Algorithms are picked by name at runtime and resolved to fresh,
//! single-use primitives; the supported set is whatever the enabled cargo
//! features provide.
//!
//! # Key Features
//!
//! - **Streaming**: hashes chunks as they arrive, never requiring the whole
//!   stream in memory before digesting begins
//! - **Consume-and-retain**: the streaming entry points hand back the exact
//!   bytes they consumed, so callers can reuse the verified payload
//! - **Runtime algorithm selection**: digest families resolved by name,
//!   feature-gated per algorithm crate
//!
//! # Example
//!
//! ```
//! use verihash::verify;
//!
//! let content = b"The quick brown fox jumps over the lazy dog";
//! let result = verify(content, "MD5", "9e107d9d372bb6826bd81d3542a419d6")?;
//!
//! assert!(result.is_equal());
//! assert_eq!(result.expected(), "9E107D9D372BB6826BD81D3542A419D6");
//! # Ok::<(), verihash::Error>(())
//! ```

pub use self::algorithm::names as algorithm_names;
pub use self::compare::streams_equal;
pub use self::error::{Error, Result};
pub use self::hasher::{DEFAULT_BUF_SIZE, digest, digest_stream, digest_stream_with_buffer};
pub use self::hex::bytes_to_hex;
pub use self::reader::TeeReader;
pub use self::verify::{VerificationResult, verify, verify_stream};

mod algorithm;
mod compare;
mod error;
mod hasher;
mod hex;
mod reader;
mod verify;
