//! Writing match results as CSV or JSON.

use std::path::Path;

use bfcrc_config::OutputFormat;
use bfcrc_engine::CrcModel;
use bfcrc_search::MatchSet;

const CSV_HEADER: &str = "polynomial,initial,final_xor,reflected_input,reflected_output";

/// Renders matches as CSV with a header row.
pub fn to_csv(matches: &MatchSet) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for model in matches {
        out.push_str(&csv_row(model));
        out.push('\n');
    }
    out
}

fn csv_row(model: &CrcModel) -> String {
    format!(
        "{:#x},{:#x},{:#x},{},{}",
        model.polynomial,
        model.initial,
        model.final_xor,
        model.reflected_input,
        model.reflected_output
    )
}

/// Renders matches as a pretty-printed JSON array.
pub fn to_json(matches: &MatchSet) -> Result<String, serde_json::Error> {
    let models: Vec<&CrcModel> = matches.iter().collect();
    serde_json::to_string_pretty(&models)
}

/// Writes matches to `path` in `format`.
pub fn write_matches(
    path: &Path,
    matches: &MatchSet,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = match format {
        OutputFormat::Csv => to_csv(matches),
        OutputFormat::Json => to_json(matches)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}
