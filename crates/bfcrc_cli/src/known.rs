//! `bruteforce-crc known`: match messages against published CRC models.

use bfcrc_engine::{check_width, KnownModel};
use bfcrc_search::find_known_models;

use crate::input::read_vectors;
use crate::settings::{load_settings, resolve_input};
use crate::{GlobalArgs, KnownArgs};

/// Runs the `bruteforce-crc known` command.
///
/// Prints every catalogue model of the configured width that reproduces all
/// messages. Returns exit code 0 if at least one model matched, 1 otherwise.
pub fn run(args: &KnownArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = load_settings(global)?;
    let width = check_width(args.input.width.unwrap_or(settings.search.width) as u32)?;
    let (path, options) = resolve_input(&settings.input, &args.input, width)?;
    let vectors = read_vectors(&path, &options)?;

    if !global.quiet {
        eprintln!(
            "   Checking {} messages against published {width}-bit models",
            vectors.len()
        );
    }

    let found = find_known_models(width, &vectors);
    print!("{}", format_known(&found));
    Ok(if found.is_empty() { 1 } else { 0 })
}

fn format_known(found: &[&KnownModel]) -> String {
    if found.is_empty() {
        return "No model found.\n".to_string();
    }
    let mut out = String::new();
    for known in found {
        out.push_str(&format!("{:<22} {}\n", known.name, known.model()));
    }
    out
}
