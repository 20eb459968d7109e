//! Streaming MD5 engine

use super::compress::{BLOCK_SIZE, INITIAL_STATE, compress};
use super::digest::{DIGEST_LENGTH, Digest};
use super::traits::DigestEngine;
use crate::Result;
use crate::error::StateError;
use std::io;

/// Offset inside the final block where the 64-bit length field starts
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Incremental RFC 1321 MD5 hasher.
///
/// Input may be split across any number of [`update`](Self::update) calls;
/// the digest only depends on the concatenated bytes. After
/// [`digest`](Self::digest) the engine is finalized: the digest is cached,
/// updates are rejected with [`StateError::UpdateAfterFinalize`], and
/// [`reset`](Self::reset) returns it to the initial state.
///
/// Instances are independent and `Send + Sync`, but each one describes a
/// single sequential computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Md5Engine {
    state: [u32; 4],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    // Wraps modulo 2^64
    total_length: u64,
    finalized: Option<Digest>,
}

impl Md5Engine {
    /// Create an engine in the initial state
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_length: 0,
            finalized: None,
        }
    }

    /// Return to the initial state, discarding buffered input and any
    /// cached digest
    pub fn reset(&mut self) {
        if self.total_length > 0 || self.finalized.is_some() {
            log::trace!(
                "Resetting MD5 engine after {} bytes (finalized: {})",
                self.total_length,
                self.finalized.is_some()
            );
        }
        *self = Self::new();
    }

    /// Append bytes to the message.
    ///
    /// Complete 64-byte blocks are compressed immediately; fewer than 64
    /// bytes stay buffered. Empty slices are accepted and change nothing.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized.is_some() {
            log::debug!(
                "Rejected {} byte update on finalized MD5 engine",
                data.len()
            );
            return Err(StateError::update_after_finalize(self.total_length).into());
        }

        self.feed(data);
        Ok(())
    }

    /// Finalize and return the digest.
    ///
    /// The first call pads the message and caches the result; later calls
    /// return the cached digest until [`reset`](Self::reset).
    pub fn digest(&mut self) -> Digest {
        if let Some(digest) = self.finalized {
            return digest;
        }

        let bit_length = self.total_length.wrapping_mul(8);

        let pad_len = if self.buffer_len < LENGTH_OFFSET {
            LENGTH_OFFSET - self.buffer_len
        } else {
            BLOCK_SIZE + LENGTH_OFFSET - self.buffer_len
        };
        let mut padding = [0u8; BLOCK_SIZE];
        padding[0] = 0x80;

        self.absorb(&padding[..pad_len]);
        self.absorb(&bit_length.to_le_bytes());
        debug_assert_eq!(self.buffer_len, 0);

        let mut bytes = [0u8; DIGEST_LENGTH];
        for (out, word) in bytes.chunks_exact_mut(4).zip(self.state) {
            out.copy_from_slice(&word.to_le_bytes());
        }
        let digest = Digest::from_bytes(bytes);

        log::trace!(
            "Finalized MD5 engine over {} bytes: {digest}",
            self.total_length
        );
        self.finalized = Some(digest);
        digest
    }

    /// Digest size in bytes (always 16)
    pub const fn digest_length(&self) -> usize {
        DIGEST_LENGTH
    }

    /// Number of bytes fed since the last reset
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Whether [`digest`](Self::digest) has been called since the last reset
    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Bytes held back waiting for a complete block
    pub fn buffered_len(&self) -> usize {
        self.buffer_len
    }

    fn feed(&mut self, data: &[u8]) {
        self.total_length = self.total_length.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    /// Move bytes through the block buffer without touching the length
    /// counter; padding goes through here as well
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
        for block in blocks {
            compress(&mut self.state, block);
        }

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffer_len = tail.len();
    }
}

impl Default for Md5Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestEngine for Md5Engine {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        Md5Engine::update(self, data)
    }

    fn digest(&mut self) -> Digest {
        Md5Engine::digest(self)
    }

    fn reset(&mut self) {
        Md5Engine::reset(self)
    }

    fn digest_length(&self) -> usize {
        DIGEST_LENGTH
    }
}

impl io::Write for Md5Engine {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.update(data)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Compute the MD5 digest of `data` in one call
pub fn md5_digest(data: &[u8]) -> Digest {
    let mut engine = Md5Engine::new();
    engine.feed(data);
    engine.digest()
}
