//! `io::Write` adapter that feeds written bytes into a digest engine

use super::digest::Digest;
use super::traits::DigestEngine;
use std::io;

/// Output stream over a [`DigestEngine`].
///
/// Everything written is forwarded to the engine, so the usual `io::Write`
/// tooling (`write!`, `io::copy`, buffered writers) can produce a digest.
#[derive(Debug)]
pub struct DigestWriter<E: DigestEngine> {
    engine: E,
    bytes_written: u64,
}

impl<E: DigestEngine> DigestWriter<E> {
    /// Wrap an engine; it is reset so the stream starts from empty input
    pub fn new(mut engine: E) -> Self {
        engine.reset();
        Self {
            engine,
            bytes_written: 0,
        }
    }

    /// Bytes accepted by this writer so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Borrow the underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Close the stream and return the digest of everything written
    pub fn finish(mut self) -> Digest {
        log::trace!("Closing digest stream after {} bytes", self.bytes_written);
        self.engine.digest()
    }

    /// Unwrap the engine without finalizing it; buffered input stays in place
    pub fn into_inner(self) -> E {
        self.engine
    }
}

impl<E: DigestEngine + Default> Default for DigestWriter<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: DigestEngine> io::Write for DigestWriter<E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.engine.update(buf)?;
        self.bytes_written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
