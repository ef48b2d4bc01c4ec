//! Configuration types deserialized from `bfcrc.toml`.

use bfcrc_search::SearchParams;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The top-level configuration parsed from `bfcrc.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BruteforceConfig {
    /// The parameter space to search.
    #[serde(default)]
    pub search: SearchParams,
    /// Where test vectors come from and how each line is split.
    #[serde(default)]
    pub input: InputConfig,
    /// Execution and output settings.
    #[serde(default)]
    pub run: RunConfig,
}

/// How the message file is read.
///
/// Each non-comment line is a string of bits. The expected CRC is the
/// `width` bits starting at `offs_crc`; the message is bits `start..end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Path of the message file.
    pub file: Option<PathBuf>,
    /// Bit offset of the expected CRC on each line.
    pub offs_crc: Option<usize>,
    /// First message bit on each line.
    pub start: usize,
    /// One past the last message bit; defaults to `offs_crc`.
    pub end: Option<usize>,
}

/// How the search runs and where results are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Worker thread count; defaults to the available parallelism.
    pub threads: Option<usize>,
    /// File to write matches to; matches are only printed when unset.
    pub output: Option<PathBuf>,
    /// Format of the output file.
    pub format: OutputFormat,
    /// Try the catalogue of published models before sweeping.
    pub known_first: bool,
}

/// Serialization format for match results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// A JSON array of models.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected csv or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
