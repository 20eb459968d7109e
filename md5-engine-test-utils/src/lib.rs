//! Test utilities for the MD5 engine
//!
//! This crate provides published test vectors and deterministic input
//! builders shared by the engine and CLI test suites.

pub mod builders;
pub mod vectors;

// Re-export commonly used types
pub use builders::{ChunkPlan, DataPattern, TestDataBuilder};
pub use vectors::{DigestVector, EXTRA_VECTORS, RFC1321_VECTORS, all_vectors};
