//! The default `md5digest` action: hash one input and print the digest

use crate::config::AppConfig;
use crate::output::{OutputFormat, format_result};
use anyhow::{Context, Result};
use md5_engine_core::{Digest, HashCalculator, HashResult};
use std::io::Read;

/// Where the bytes to hash come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// UTF-8 bytes of a command line argument
    Text(String),
    /// Everything readable from standard input
    Stdin,
    /// `input.default_text` from the configuration
    Default,
}

impl InputSource {
    pub fn from_args(text: Option<String>, use_stdin: bool) -> Self {
        match (text, use_stdin) {
            (_, true) => InputSource::Stdin,
            (Some(text), false) => InputSource::Text(text),
            (None, false) => InputSource::Default,
        }
    }

    /// Collect the input bytes. `stdin` is only read for [`InputSource::Stdin`].
    pub fn read_bytes<R: Read>(self, config: &AppConfig, mut stdin: R) -> Result<Vec<u8>> {
        match self {
            InputSource::Text(text) => Ok(text.into_bytes()),
            InputSource::Default => Ok(config.input.default_text.clone().into_bytes()),
            InputSource::Stdin => {
                let mut buffer = Vec::new();
                stdin
                    .read_to_end(&mut buffer)
                    .context("Failed to read standard input")?;
                log::debug!("Read {} bytes from standard input", buffer.len());
                Ok(buffer)
            }
        }
    }
}

/// Everything needed to produce one line (or JSON document) of output
#[derive(Debug, Clone)]
pub struct DigestRequest {
    pub input: Vec<u8>,
    pub chunk_size: usize,
    pub format: OutputFormat,
    pub uppercase: bool,
    /// Expected digest in hex, from `--check`
    pub expected: Option<String>,
}

impl DigestRequest {
    /// Build a request from the effective configuration
    pub fn from_config(
        input: Vec<u8>,
        config: &AppConfig,
        expected: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            input,
            chunk_size: config.input.chunk_size,
            format: config.output_format()?,
            uppercase: config.output.uppercase,
            expected,
        })
    }
}

/// Hash the request input and render it.
///
/// Fails when `expected` is set and does not match the computed digest.
pub fn execute(request: &DigestRequest) -> Result<String> {
    let result = hash_request(request)?;

    if let Some(expected) = &request.expected {
        verify(&result, expected)?;
    }

    format_result(&result, request.format, request.uppercase)
}

fn hash_request(request: &DigestRequest) -> Result<HashResult> {
    let result = HashCalculator::new()
        .calculate_chunked(&request.input, request.chunk_size)
        .context("Failed to compute MD5 digest")?;

    log::debug!(
        "Hashed {} bytes in {:?} ({} update(s))",
        result.input_size,
        result.duration,
        result.chunk_count
    );
    Ok(result)
}

fn verify(result: &HashResult, expected: &str) -> Result<()> {
    let expected: Digest = expected
        .trim()
        .parse()
        .context("Invalid value for --check")?;

    if !result.hash.ct_eq(&expected) {
        anyhow::bail!(
            "Digest mismatch: expected {}, computed {}",
            expected,
            result.hash
        );
    }
    log::debug!("Digest matches expected value {expected}");
    Ok(())
}
