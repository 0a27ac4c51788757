//! Buffer and streaming digest entry points.

use std::io::Read;

use digest::DynDigest as _;

use crate::algorithm;
use crate::error::Result;
use crate::hex::bytes_to_hex;
use crate::reader::TeeReader;

/// Default chunk size for streaming reads. Larger values trade memory for
/// fewer read calls.
pub const DEFAULT_BUF_SIZE: usize = 64 * 1024;

/// Compute the hex digest of an in-memory byte sequence.
///
/// Deterministic: the same content and algorithm always yield the same
/// string. Fails with [`Error::UnsupportedAlgorithm`](crate::Error) when the
/// name is not recognized; no partial result is ever returned.
pub fn digest(content: &[u8], algorithm_name: &str) -> Result<String> {
    let mut primitive = algorithm::resolve(algorithm_name)?;
    primitive.update(content);
    Ok(bytes_to_hex(&primitive.finalize()))
}

/// Compute the hex digest of a stream, returning the digest together with
/// every byte consumed.
///
/// The stream is hashed as it is read, in [`DEFAULT_BUF_SIZE`] chunks, so it
/// never has to be memory-resident before hashing begins. The consumed bytes
/// are still accumulated in full and handed back so the caller can reuse
/// them without re-reading the source; callers needing bounded memory should
/// hash the source directly instead. The source may be fully consumed, but
/// its lifecycle stays with the caller.
pub fn digest_stream<R: Read>(source: R, algorithm_name: &str) -> Result<(String, Vec<u8>)> {
    digest_stream_with_buffer(source, algorithm_name, DEFAULT_BUF_SIZE)
}

/// [`digest_stream`] with a caller-chosen chunk size.
pub fn digest_stream_with_buffer<R: Read>(
    source: R,
    algorithm_name: &str,
    buf_size: usize,
) -> Result<(String, Vec<u8>)> {
    // Resolve before touching the stream, so a bad name never reads a byte.
    let mut primitive = algorithm::resolve(algorithm_name)?;

    let mut tee = TeeReader::new(source);
    let mut buf = vec![0u8; buf_size.max(1)];
    loop {
        let n = tee.read(&mut buf)?;
        if n == 0 {
            break;
        }
        primitive.update(&buf[..n]);
    }

    Ok((bytes_to_hex(&primitive.finalize()), tee.into_captured()))
}
