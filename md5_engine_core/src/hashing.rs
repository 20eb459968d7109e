//! Hash calculation functionality for the MD5 Engine Core Library
//!
//! This module contains the streaming MD5 engine, the digest value type and
//! convenience helpers built on top of them.

use crate::{Error, Result, error::ValidationError};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

mod compress;
mod digest;
mod md5;
mod stream;
mod traits;

pub use self::digest::{DIGEST_LENGTH, Digest, digest_to_hex};
pub use self::md5::{Md5Engine, md5_digest};
pub use self::stream::DigestWriter;
pub use self::traits::DigestEngine;

/// Hash algorithms supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// RFC 1321 MD5
    MD5,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::MD5 => write!(f, "md5"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::MD5),
            _ => Err(Error::Validation(ValidationError::invalid_parameter(
                "algorithm",
                &format!("Unknown hash algorithm: {s}"),
            ))),
        }
    }
}

/// Result of hash calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    pub hash: Digest,
    pub input_size: u64,
    /// Number of `update` calls used to feed the input
    pub chunk_count: u64,
    pub duration: Duration,
}

/// One-shot hash calculator over in-memory data
#[derive(Debug, Clone, Default)]
pub struct HashCalculator;

impl HashCalculator {
    /// Create a new hash calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculate hash for byte data with a single update
    pub fn calculate_bytes(&self, data: &[u8]) -> Result<HashResult> {
        let start_time = Instant::now();
        let mut engine = Md5Engine::new();
        engine.update(data)?;

        Ok(HashResult {
            algorithm: HashAlgorithm::MD5,
            hash: engine.digest(),
            input_size: data.len() as u64,
            chunk_count: 1,
            duration: start_time.elapsed(),
        })
    }

    /// Calculate hash for byte data, feeding the engine `chunk_size` bytes
    /// at a time
    pub fn calculate_chunked(&self, data: &[u8], chunk_size: usize) -> Result<HashResult> {
        if chunk_size == 0 {
            return Err(ValidationError::invalid_parameter(
                "chunk_size",
                "must be at least 1 byte",
            )
            .into());
        }

        let start_time = Instant::now();
        let mut engine = Md5Engine::new();
        let mut chunk_count = 0u64;
        for chunk in data.chunks(chunk_size) {
            engine.update(chunk)?;
            chunk_count += 1;
        }
        log::debug!(
            "Fed {} bytes to MD5 engine in {chunk_count} chunk(s) of up to {chunk_size} bytes",
            data.len()
        );

        Ok(HashResult {
            algorithm: HashAlgorithm::MD5,
            hash: engine.digest(),
            input_size: data.len() as u64,
            chunk_count,
            duration: start_time.elapsed(),
        })
    }
}
