//! Combining `bfcrc.toml` with command-line flags.
//!
//! The file supplies defaults; every flag given on the command line wins.

use std::path::PathBuf;

use bfcrc_config::{
    load_config, load_config_file, BruteforceConfig, ConfigError, InputConfig, CONFIG_FILE_NAME,
};
use bfcrc_search::SearchParams;

use crate::input::InputOptions;
use crate::{GlobalArgs, InputArgs, SearchArgs};

/// Loads `--config`, or `bfcrc.toml` from the current directory if present.
pub fn load_settings(global: &GlobalArgs) -> Result<BruteforceConfig, ConfigError> {
    if let Some(path) = &global.config {
        return load_config_file(path);
    }
    let dir = std::env::current_dir()?;
    if dir.join(CONFIG_FILE_NAME).is_file() {
        load_config(&dir)
    } else {
        Ok(BruteforceConfig::default())
    }
}

/// Overlays the search flags onto the file's `[search]` table.
pub fn merge_search_params(file: &SearchParams, args: &SearchArgs) -> SearchParams {
    let mut params = file.clone();
    if let Some(width) = args.input.width {
        params.width = width;
    }
    if let Some(poly) = args.poly {
        params.polynomial = poly;
    }
    if args.poly_start.is_some() {
        params.polynomial_start = args.poly_start;
    }
    if args.poly_end.is_some() {
        params.polynomial_end = args.poly_end;
    }
    if let Some(initial) = args.initial {
        params.initial = initial;
    }
    if let Some(final_xor) = args.final_xor {
        params.final_xor = final_xor;
    }
    if let Some(reflect_in) = args.reflect_in {
        params.reflected_input = reflect_in;
    }
    if let Some(reflect_out) = args.reflect_out {
        params.reflected_output = reflect_out;
    }
    params.probe_initial |= args.probe_initial;
    params.probe_final_xor |= args.probe_final_xor;
    if args.probe_reflections {
        params.probe_reflected_input = true;
        params.probe_reflected_output = true;
    }
    if let Some(order) = args.feed_order {
        params.feed_order = order.into();
    }
    params
}

/// Resolves the message file and line layout from flags and the `[input]` table.
pub fn resolve_input(
    file: &InputConfig,
    args: &InputArgs,
    width: u8,
) -> Result<(PathBuf, InputOptions), Box<dyn std::error::Error>> {
    let path = args
        .file
        .clone()
        .or_else(|| file.file.clone())
        .ok_or("no message file given (use --file or set input.file)")?;
    let options = InputOptions {
        width,
        offs_crc: args.offs_crc.or(file.offs_crc),
        start: args.start.unwrap_or(file.start),
        end: args.end.or(file.end),
    };
    Ok((path, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeedOrderArg;
    use bfcrc_config::load_config_from_str;
    use bfcrc_engine::FeedOrder;

    #[test]
    fn flags_override_file() {
        let file = load_config_from_str(
            "[search]\nwidth = 8\npolynomial = 0x07\ninitial = 0xFF\nprobe_final_xor = true\n",
        )
        .unwrap();
        let args = SearchArgs {
            input: InputArgs {
                width: Some(16),
                ..InputArgs::default()
            },
            poly: Some(0x1021),
            probe_reflections: true,
            feed_order: Some(FeedOrderArg::Forward),
            ..SearchArgs::default()
        };
        let params = merge_search_params(&file.search, &args);
        assert_eq!(params.width, 16);
        assert_eq!(params.polynomial, 0x1021);
        assert_eq!(params.initial, 0xFF);
        assert!(params.probe_final_xor);
        assert!(params.probe_reflected_input);
        assert!(params.probe_reflected_output);
        assert_eq!(params.feed_order, FeedOrder::Forward);
    }

    #[test]
    fn no_flags_keeps_file_values() {
        let file = load_config_from_str("[search]\nwidth = 5\nreflected_input = true\n").unwrap();
        let params = merge_search_params(&file.search, &SearchArgs::default());
        assert_eq!(params, file.search);
    }

    #[test]
    fn input_falls_back_to_file() {
        let file =
            load_config_from_str("[input]\nfile = \"frames.txt\"\noffs_crc = 40\nstart = 8\n")
                .unwrap();
        let (path, options) = resolve_input(&file.input, &InputArgs::default(), 16).unwrap();
        assert_eq!(path, PathBuf::from("frames.txt"));
        assert_eq!(options.offs_crc, Some(40));
        assert_eq!(options.start, 8);
        assert_eq!(options.end, None);
        assert_eq!(options.width, 16);
    }

    #[test]
    fn input_flags_win() {
        let file = load_config_from_str("[input]\nfile = \"a.txt\"\nstart = 8\n").unwrap();
        let args = InputArgs {
            file: Some(PathBuf::from("b.txt")),
            start: Some(0),
            end: Some(24),
            ..InputArgs::default()
        };
        let (path, options) = resolve_input(&file.input, &args, 8).unwrap();
        assert_eq!(path, PathBuf::from("b.txt"));
        assert_eq!(options.start, 0);
        assert_eq!(options.end, Some(24));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = resolve_input(&InputConfig::default(), &InputArgs::default(), 8);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[run]\nthreads = 3\n").unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(path),
        };
        let config = load_settings(&global).unwrap();
        assert_eq!(config.run.threads, Some(3));
    }
}
