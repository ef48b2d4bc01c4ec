//! bruteforce-crc: recover CRC parameters from sample messages.
//!
//! Provides `bruteforce-crc search` for the exhaustive parameter search,
//! `bruteforce-crc known` for matching against published CRC models, and
//! `bruteforce-crc generate` for producing test data with a random model.

#![warn(missing_docs)]

mod generate;
mod input;
mod known;
mod output;
mod report;
mod search;
mod settings;

use std::path::PathBuf;
use std::process;

use bfcrc_config::OutputFormat;
use bfcrc_engine::FeedOrder;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Find the CRC model behind a set of messages.
#[derive(Parser, Debug)]
#[command(name = "bruteforce-crc", version, about = "CRC parameter brute-forcer")]
pub struct Cli {
    /// Suppress all output except results and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report every match as it is found and every worker partition.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `bfcrc.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the CRC parameter space for models matching every message.
    Search(SearchArgs),
    /// Check the messages against the catalogue of published CRC models.
    Known(KnownArgs),
    /// Generate random messages with a CRC from a random model.
    Generate(GenerateArgs),
}

/// Options describing the message file and how each line is split.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// File containing one message per line as `0`/`1` characters.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// CRC width in bits.
    #[arg(short, long)]
    pub width: Option<u8>,

    /// Bit offset of the CRC on each line (default: the last `width` bits).
    #[arg(long)]
    pub offs_crc: Option<usize>,

    /// First message bit on each line.
    #[arg(long)]
    pub start: Option<usize>,

    /// One past the last message bit (default: the CRC offset).
    #[arg(long)]
    pub end: Option<usize>,
}

/// Arguments for the `bruteforce-crc search` subcommand.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Message file options.
    #[command(flatten)]
    pub input: InputArgs,

    /// Truncated polynomial; omit to search all polynomials.
    #[arg(long, value_parser = parse_number)]
    pub poly: Option<u32>,

    /// First polynomial to search.
    #[arg(long, value_parser = parse_number)]
    pub poly_start: Option<u32>,

    /// Last polynomial to search (inclusive).
    #[arg(long, value_parser = parse_number)]
    pub poly_end: Option<u32>,

    /// Fixed initial value.
    #[arg(long, value_parser = parse_number)]
    pub initial: Option<u32>,

    /// Search every initial value.
    #[arg(long)]
    pub probe_initial: bool,

    /// Fixed final XOR value.
    #[arg(long, value_parser = parse_number)]
    pub final_xor: Option<u32>,

    /// Search every final XOR value.
    #[arg(long)]
    pub probe_final_xor: bool,

    /// Reflect input bits.
    #[arg(long)]
    pub reflect_in: Option<bool>,

    /// Reflect the remainder before the final XOR.
    #[arg(long)]
    pub reflect_out: Option<bool>,

    /// Try both input and output reflection.
    #[arg(long)]
    pub probe_reflections: bool,

    /// Order in which message bits are fed into the CRC.
    #[arg(long, value_enum)]
    pub feed_order: Option<FeedOrderArg>,

    /// Number of worker threads (default: available parallelism).
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Write matches to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of the output file: `csv` or `json`.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Check published models first and skip the sweep if one matches.
    #[arg(long)]
    pub known_first: bool,
}

/// Arguments for the `bruteforce-crc known` subcommand.
#[derive(Args, Debug, Default)]
pub struct KnownArgs {
    /// Message file options.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `bruteforce-crc generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// CRC width in bits (default: random in 5..=16).
    #[arg(short, long)]
    pub width: Option<u8>,

    /// Number of messages to generate.
    #[arg(short, long, default_value_t = 5)]
    pub messages: usize,

    /// Message length in bits (default: random in 30..=80).
    #[arg(long)]
    pub bits: Option<usize>,

    /// Final XOR value (default: random below width 12, else 0).
    #[arg(long, value_parser = parse_number)]
    pub final_xor: Option<u32>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Message feed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FeedOrderArg {
    /// Pick from the input reflection and the message length.
    Auto,
    /// Bits in message order.
    Forward,
    /// The whole message reversed.
    FullyReversed,
    /// Each byte reversed, bytes in message order.
    BytewiseReversed,
}

impl From<FeedOrderArg> for FeedOrder {
    fn from(arg: FeedOrderArg) -> Self {
        match arg {
            FeedOrderArg::Auto => FeedOrder::Auto,
            FeedOrderArg::Forward => FeedOrder::Forward,
            FeedOrderArg::FullyReversed => FeedOrder::FullyReversed,
            FeedOrderArg::BytewiseReversed => FeedOrder::BytewiseReversed,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-result output.
    pub quiet: bool,
    /// Whether to print per-match and per-worker detail.
    pub verbose: bool,
    /// Optional path to a config file.
    pub config: Option<PathBuf>,
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Search(ref args) => search::run(args, &global),
        Command::Known(ref args) => known::run(args, &global),
        Command::Generate(ref args) => generate::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
