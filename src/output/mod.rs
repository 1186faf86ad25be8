//! Rendering of pack results: inline text for small outputs, a written file
//! for oversized ones, plus the per-construct lengths report that always
//! accompanies the result.

pub mod writer;

use crate::packer::char_len;
use crate::utils::error::TokpackError;
use crate::utils::formatting::char_count_label;
use console::style;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Joined output longer than this many characters is written to a file
/// instead of printed inline. Matches the transport limit the original
/// deployment worked against, with headroom.
pub const DEFAULT_FILE_THRESHOLD: usize = 4000;

/// Default filename for oversized results when the caller gave no path.
pub const DEFAULT_RESULT_FILENAME: &str = "tokpack_result.txt";

/// Options controlling how pack results are rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Inline/file cutoff for the joined construct text.
    pub file_threshold: usize,
    /// Explicit output path for file rendering.
    pub output_path: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            file_threshold: DEFAULT_FILE_THRESHOLD,
            output_path: None,
        }
    }
}

/// Where a rendered result ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Result was small enough to show inline.
    Inline(String),
    /// Result was written to this path.
    File(PathBuf),
}

/// Machine-readable shape of a pack result for `--json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub constructs: &'a [String],
    pub lengths: Vec<usize>,
    pub total_len: usize,
}

/// Join constructs and decide between inline and file output.
pub fn render_constructs(
    constructs: &[String],
    options: &RenderOptions,
) -> Result<Rendered, TokpackError> {
    let joined = constructs.join(", ");

    if char_len(&joined) > options.file_threshold {
        let path = options
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_FILENAME));
        let written = writer::write_result_file(&path, &joined)?;
        Ok(Rendered::File(written))
    } else {
        Ok(Rendered::Inline(joined))
    }
}

/// Per-construct lengths, one `#N: L chars` line each.
pub fn lengths_report(constructs: &[String]) -> String {
    constructs
        .iter()
        .enumerate()
        .map(|(i, c)| format!("#{}: {} chars", i + 1, char_len(c)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize constructs with their lengths as JSON.
pub fn to_json(constructs: &[String]) -> Result<String, TokpackError> {
    let lengths: Vec<usize> = constructs.iter().map(|c| char_len(c)).collect();
    let output = JsonOutput {
        constructs,
        lengths,
        // counts the ", " joiners the inline rendering would add
        total_len: joined_len(constructs),
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| TokpackError::Config(format!("Failed to serialize result: {e}")))
}

/// Length of the constructs joined with `", "`.
fn joined_len(constructs: &[String]) -> usize {
    let body: usize = constructs.iter().map(|c| char_len(c)).sum();
    let joiners = constructs.len().saturating_sub(1) * 2;
    body + joiners
}

/// Print a rendered result to the terminal.
///
/// Inline results print the constructs followed by the lengths report;
/// file results print the destination path. Quiet mode drops the report.
pub fn display_result(
    constructs: &[String],
    rendered: &Rendered,
    quiet: bool,
) -> Result<(), TokpackError> {
    let mut term = console::Term::stdout();

    match rendered {
        Rendered::Inline(text) => {
            writeln!(term, "{text}")?;
        }
        Rendered::File(path) => {
            writeln!(
                term,
                "{} Result is too long for inline display; written to {} ({})",
                style("\u{2713}").green().bold(),
                style(path.display()).bold(),
                char_count_label(joined_len(constructs))
            )?;
        }
    }

    if !quiet {
        writeln!(term)?;
        writeln!(term, "{}:", style("Construct lengths").bold())?;
        writeln!(term, "{}", lengths_report(constructs))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constructs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_small_result_renders_inline() {
        let c = constructs(&["(a)*(x)", "(a)*(y)"]);
        let rendered = render_constructs(&c, &RenderOptions::default()).unwrap();
        assert_eq!(rendered, Rendered::Inline("(a)*(x), (a)*(y)".to_string()));
    }

    #[test]
    fn test_lengths_report_lines() {
        let c = constructs(&["(a,b)*(x)", "(a,b)*(longer)"]);
        let report = lengths_report(&c);
        assert_eq!(report, "#1: 9 chars\n#2: 14 chars");
    }

    #[test]
    fn test_joined_len_counts_joiners() {
        let c = constructs(&["aaa", "bb"]);
        assert_eq!(joined_len(&c), 3 + 2 + 2);
        assert_eq!(joined_len(&c[..1]), 3);
    }

    #[test]
    fn test_json_output_shape() {
        let c = constructs(&["(a)*(x)"]);
        let json = to_json(&c).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["constructs"][0], "(a)*(x)");
        assert_eq!(value["lengths"][0], 7);
        assert_eq!(value["total_len"], 7);
    }
}
