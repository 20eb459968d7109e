//! Output formatting for digest results

use anyhow::Result;
use md5_engine_core::HashResult;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bare hex digest on one line
    Text,
    /// Pretty-printed JSON hash result
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// Render a hash result in the requested format.
///
/// `uppercase` only affects text output; JSON always carries the canonical
/// lowercase digest.
pub fn format_result(result: &HashResult, format: OutputFormat, uppercase: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(if uppercase {
            result.hash.to_hex_upper()
        } else {
            result.hash.to_hex()
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use md5_engine_core::HashCalculator;

    fn alphabet_result() -> HashResult {
        HashCalculator::new()
            .calculate_bytes(b"abcdefghijklmnopqrstuvwxyz")
            .unwrap()
    }

    #[test]
    fn test_from_string() {
        assert_eq!(OutputFormat::from_string("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_string("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_string("csv").is_err());
    }

    #[test]
    fn test_text_output() {
        let result = alphabet_result();
        assert_eq!(
            format_result(&result, OutputFormat::Text, false).unwrap(),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
        assert_eq!(
            format_result(&result, OutputFormat::Text, true).unwrap(),
            "C3FCD3D76192E4007DFB496CCA67E13B"
        );
    }

    #[test]
    fn test_json_output_ignores_uppercase() {
        let result = alphabet_result();
        let json = format_result(&result, OutputFormat::Json, true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hash"], "c3fcd3d76192e4007dfb496cca67e13b");
        assert_eq!(value["algorithm"], "MD5");
        assert_eq!(value["input_size"], 26);
    }
}
