//! Human-readable settings, hits and progress on the terminal.

use std::fmt::Write as _;

use bfcrc_engine::CrcModel;
use bfcrc_search::{
    format_count, Dimension, ProgressReporter, ProgressSnapshot, SearchConfig, SearchRange,
};

fn describe_u32(dim: &Dimension<u32>) -> String {
    match dim {
        Dimension::Fixed(v) => format!("{v:#x}"),
        Dimension::Probed(r) => format!("{:#x} .. {:#x}", r.start(), r.end()),
    }
}

fn describe_bool(dim: &Dimension<bool>) -> String {
    match dim {
        Dimension::Fixed(v) => v.to_string(),
        Dimension::Probed(_) => "probed".to_string(),
    }
}

/// Renders the search settings block printed before a search.
pub fn format_settings(config: &SearchConfig, threads: usize, vectors: usize) -> String {
    let mut out = String::new();
    let rows = [
        ("width", format!("{} bits", config.width)),
        ("truncated polynomial", describe_u32(&config.polynomial)),
        ("initial value", describe_u32(&config.initial)),
        ("final XOR", describe_u32(&config.final_xor)),
        ("reflected input", describe_bool(&config.reflected_input)),
        ("reflected output", describe_bool(&config.reflected_output)),
        ("feed order", config.feed_order.to_string()),
        ("candidates", format_count(config.crc_steps())),
        ("threads", threads.to_string()),
        ("test vectors", vectors.to_string()),
    ];
    for (key, value) in rows {
        let _ = writeln!(out, "   {key:<21}: {value}");
    }
    out
}

/// Renders one match as a MATCH block.
pub fn format_hit(model: &CrcModel) -> String {
    format!(
        "----------------------[ MATCH ]----------------------\n\
         truncated polynomial : {:#x} ({})\n\
         initial value        : {:#x} ({})\n\
         final XOR            : {:#x} ({})\n\
         reflected input      : {}\n\
         reflected output     : {}\n\
         feed order           : {}\n",
        model.polynomial,
        model.polynomial,
        model.initial,
        model.initial,
        model.final_xor,
        model.final_xor,
        model.reflected_input,
        model.reflected_output,
        model.feed_order,
    )
}

/// Prints search events to stderr, honoring `--quiet` and `--verbose`.
///
/// Progress is shown unless quiet; matches and worker partitions only when
/// verbose.
pub struct TerminalReporter {
    quiet: bool,
    verbose: bool,
}

impl TerminalReporter {
    /// Creates a reporter for the given verbosity flags.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose: verbose && !quiet,
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        if !self.quiet {
            eprintln!("   {snapshot}");
        }
    }

    fn on_match(&self, model: &CrcModel) {
        if self.verbose {
            eprint!("{}", format_hit(model));
        }
    }

    fn on_partition(&self, index: usize, range: &SearchRange) {
        if self.verbose {
            eprintln!(
                "   worker {index}: polynomials {:#x} .. {:#x}",
                range.start, range.end
            );
        }
    }
}
