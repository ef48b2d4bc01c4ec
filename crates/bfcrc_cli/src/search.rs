//! `bruteforce-crc search`: exhaustive CRC parameter search.
//!
//! 1. Load `bfcrc.toml` (if any) and overlay the command-line flags
//! 2. Build and validate the search space
//! 3. Read the test vectors from the message file
//! 4. Run the search on the worker threads
//! 5. Print the matches and optionally write them to a file

use std::time::Duration;

use bfcrc_search::{configure, MatchSet, SearchCoordinator};

use crate::input::read_vectors;
use crate::output::write_matches;
use crate::report::{format_settings, TerminalReporter};
use crate::settings::{load_settings, merge_search_params, resolve_input};
use crate::{GlobalArgs, SearchArgs};

const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Runs the `bruteforce-crc search` command.
///
/// Returns exit code 0 whether or not a model was found; failures to set up
/// or complete the search are returned as errors.
pub fn run(args: &SearchArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = load_settings(global)?;
    let params = merge_search_params(&settings.search, args);
    let config = configure(&params)?;

    let (path, options) = resolve_input(&settings.input, &args.input, config.width)?;
    let vectors = read_vectors(&path, &options)?;

    let threads = args
        .threads
        .or(settings.run.threads)
        .unwrap_or_else(default_threads);
    let known_first = args.known_first || settings.run.known_first;

    if !global.quiet {
        eprintln!("   Searching {} ({} messages)", path.display(), vectors.len());
        eprint!("{}", format_settings(&config, threads, vectors.len()));
    }

    let reporter = TerminalReporter::new(global.quiet, global.verbose);
    let matches = SearchCoordinator::new(&config)
        .threads(threads)
        .reporter(&reporter)
        .report_interval(REPORT_INTERVAL)
        .known_first(known_first)
        .run(&vectors)?;

    print!("{}", format_summary(&matches));

    if let Some(output) = args.output.as_ref().or(settings.run.output.as_ref()) {
        let format = args.format.unwrap_or(settings.run.format);
        write_matches(output, &matches, format)?;
        if !global.quiet {
            eprintln!("   Wrote {} model(s) to {}", matches.len(), output.display());
        }
    }

    Ok(0)
}

fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// The result listing printed to stdout.
fn format_summary(matches: &MatchSet) -> String {
    if matches.is_empty() {
        return "No model found.\n".to_string();
    }
    let mut out = format!("Found {} model(s):\n", matches.len());
    for model in matches {
        out.push_str(&format!("  {model}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputArgs;
    use bfcrc_config::OutputFormat;
    use bfcrc_engine::{BitCrcEngine, BitMessage, CrcModel, FeedOrder};

    fn ccitt_false() -> CrcModel {
        CrcModel {
            width: 16,
            polynomial: 0x1021,
            initial: 0xFFFF,
            final_xor: 0,
            reflected_input: false,
            reflected_output: false,
            feed_order: FeedOrder::Auto,
        }
    }

    /// Writes lines of `<message bits> <crc bits>` for `model`.
    fn message_file(model: &CrcModel, messages: &[&[u8]]) -> String {
        let mut engine = BitCrcEngine::for_model(model).unwrap();
        let mut text = String::from("# generated for tests\n");
        for bytes in messages {
            let message = BitMessage::from_bytes(bytes);
            let crc = engine.compute(model.initial, &message);
            text.push_str(&format!(
                "{message} {crc:0width$b}\n",
                width = model.width as usize
            ));
        }
        text
    }

    #[test]
    fn summary_without_matches() {
        assert_eq!(format_summary(&MatchSet::new()), "No model found.\n");
    }

    #[test]
    fn summary_lists_models() {
        let set: MatchSet = [ccitt_false()].into_iter().collect();
        let text = format_summary(&set);
        assert!(text.starts_with("Found 1 model(s):\n"));
        assert!(text.contains("poly=0x1021"));
    }

    #[test]
    fn end_to_end_search_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("bfcrc.toml");
        std::fs::write(&config_path, "").unwrap();
        let messages = dir.path().join("messages.txt");
        std::fs::write(
            &messages,
            message_file(&ccitt_false(), &[b"123456789", b"hello"]),
        )
        .unwrap();
        let output = dir.path().join("matches.json");

        let args = SearchArgs {
            input: InputArgs {
                file: Some(messages),
                width: Some(16),
                ..InputArgs::default()
            },
            poly: Some(0x1021),
            probe_initial: true,
            threads: Some(2),
            output: Some(output.clone()),
            format: Some(OutputFormat::Json),
            ..SearchArgs::default()
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(config_path),
        };

        assert_eq!(run(&args, &global).unwrap(), 0);
        let written: Vec<CrcModel> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, vec![ccitt_false()]);
    }

    #[test]
    fn missing_message_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("bfcrc.toml");
        std::fs::write(&config_path, "").unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(config_path),
        };
        assert!(run(&SearchArgs::default(), &global).is_err());
    }
}
