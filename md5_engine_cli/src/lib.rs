//! Library side of the `md5digest` command line tool
//!
//! Exposes configuration, output formatting and the digest command so they
//! can be exercised from integration tests.

pub mod config;
pub mod digest_command;
pub mod output;
