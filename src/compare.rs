//! Byte-wise stream equality, independent of digesting.

use std::io::{BufReader, Read};

use crate::error::Result;

/// Compare two streams byte-by-byte for exact equality.
///
/// Reads both sides in lockstep and returns `true` only when they reach
/// end-of-stream together with no differing byte; a single differing byte or
/// a length difference yields `false`. Both streams are taken by value and
/// dropped on every exit path, so cleanup is unconditional even when a read
/// fails mid-comparison.
pub fn streams_equal<A: Read, B: Read>(a: A, b: B) -> Result<bool> {
    let mut a = BufReader::new(a);
    let mut b = BufReader::new(b);
    loop {
        let x = next_byte(&mut a)?;
        let y = next_byte(&mut b)?;
        if x != y {
            return Ok(false);
        }
        if x.is_none() {
            return Ok(true);
        }
    }
}

fn next_byte<R: Read>(reader: &mut R) -> std::io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    match reader.read(&mut byte)? {
        0 => Ok(None),
        _ => Ok(Some(byte[0])),
    }
}
