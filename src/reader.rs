use std::io::{self, Read};

/// Reader adapter that captures every byte it forwards.
///
/// Wraps any `Read` source; each successful read appends the bytes handed to
/// the caller onto an internal buffer, so the capture always matches what the
/// consumer saw, in content and order. Reading the source to exhaustion
/// leaves the capture equal to the full stream content. Not tied to
/// digesting; composable with any byte source.
pub struct TeeReader<R> {
    inner: R,
    captured: Vec<u8>,
}

impl<R> TeeReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            captured: Vec::new(),
        }
    }

    /// Bytes captured so far.
    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    /// Consume the adapter, keeping only the captured bytes.
    pub fn into_captured(self) -> Vec<u8> {
        self.captured
    }
}

impl<R: Read> Read for TeeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.captured.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}
