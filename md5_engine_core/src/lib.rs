//! MD5 Engine Core Library
//!
//! A streaming implementation of the RFC 1321 MD5 message digest. Bytes are
//! fed into an [`Md5Engine`] across any number of `update` calls and a
//! 16-byte [`Digest`] is produced on finalization.
//!
//! MD5 is not collision resistant. This crate exists for interoperability
//! with legacy formats that mandate it, not for security.
//!
//! ```
//! use md5_engine_core::Md5Engine;
//!
//! let mut engine = Md5Engine::new();
//! engine.update(b"abcdefghijklm").unwrap();
//! engine.update(b"nopqrstuvwxyz").unwrap();
//! assert_eq!(engine.digest().to_hex(), "c3fcd3d76192e4007dfb496cca67e13b");
//! ```

pub mod error;
pub mod hashing;

// Re-export main types
pub use error::{Error, Result};
pub use hashing::{
    DIGEST_LENGTH, Digest, DigestEngine, DigestWriter, HashAlgorithm, HashCalculator, HashResult,
    Md5Engine, digest_to_hex, md5_digest,
};
