use std::fs;
use std::path::Path;

use crate::classify::ClassifiedResult;
use crate::error::FinderError;

/// Output format selected with `-f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build the text rendering: wildcards then subdomains, one per line, with
/// section headings unless silent.
pub fn render_text_content(result: &ClassifiedResult, silent: bool) -> String {
    let mut content = String::new();

    if !silent {
        content.push_str("\n=== Wildcards Found ===\n");
    }
    for wildcard in &result.wildcards {
        content.push_str(wildcard);
        content.push('\n');
    }

    if !silent {
        content.push_str("\n=== Subdomains Found ===\n");
    }
    for subdomain in &result.subdomains {
        content.push_str(subdomain);
        content.push('\n');
    }

    content
}

/// Pretty-printed JSON rendering, two-space indent, `wildcards` before
/// `subdomains` per the struct field order.
pub fn render_json_content(result: &ClassifiedResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

fn write_file(path: &Path, content: &str) -> Result<(), FinderError> {
    fs::write(path, content).map_err(|source| FinderError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Text output goes to stdout always, and to the output file as well when a
/// path is given. A failed file write is logged and does not fail the run;
/// console output has already succeeded at that point.
pub fn render_text(result: &ClassifiedResult, output: Option<&Path>, silent: bool) {
    let content = render_text_content(result, silent);
    print!("{content}");

    if let Some(path) = output {
        if let Err(err) = write_file(path, &content) {
            tracing::error!("{err}");
            return;
        }
        if !silent {
            println!("\nResults saved to: {}", path.display());
        }
    }
}

/// JSON output goes to stdout when no path is given, otherwise only to the
/// file. Failures are logged and abort the rest of this call.
pub fn render_json(result: &ClassifiedResult, output: Option<&Path>) {
    let json = match render_json_content(result) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!("failed to serialize results: {err}");
            return;
        }
    };

    match output {
        None => println!("{json}"),
        Some(path) => {
            if let Err(err) = write_file(path, &json) {
                tracing::error!("{err}");
            }
        }
    }
}
