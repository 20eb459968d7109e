//! Core trait for incremental digest engines

use super::digest::Digest;
use crate::Result;

/// An incremental message digest engine.
///
/// The lifecycle is `update* -> digest -> reset`. Once `digest` has been
/// called, further `update` calls fail until `reset` is called, and
/// repeated `digest` calls return the same value.
pub trait DigestEngine {
    /// Append bytes to the message
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalize and return the digest of everything fed since the last reset
    fn digest(&mut self) -> Digest;

    /// Return to the freshly constructed state
    fn reset(&mut self);

    /// Digest size in bytes
    fn digest_length(&self) -> usize;

    /// Feed `data` and finalize in one call
    fn update_and_digest(&mut self, data: &[u8]) -> Result<Digest> {
        self.update(data)?;
        Ok(self.digest())
    }
}
