//! Phrase formatting for search-style proximity queries.
//!
//! Takes a comma-separated list of free-form items and rewrites each one
//! under a single rule: multi-word items become quoted proximity phrases
//! (`"two words"~3`), single words pass through bare. Outer quotes, trailing
//! punctuation, and dash/underscore joiners are stripped along the way.

use crate::utils::error::TokpackError;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Compiled cleanup patterns, initialized once.
///
/// The patterns are known-valid literals validated by the tests in this
/// module, so the expect() calls cannot fire on user input.
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?;:\u{2026}]+$").expect("trailing punctuation pattern is invalid")
});
static JOINER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\u{2013}\u{2014}_]").expect("joiner pattern is invalid"));
static MULTISPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is invalid"));

/// Result of formatting a whole input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    /// The rewritten items joined with `", "`.
    pub result: String,
    /// Number of items that survived cleanup.
    pub total: usize,
    /// Items rewritten as quoted proximity phrases.
    pub phrases: usize,
    /// Items kept as bare single words.
    pub singles: usize,
}

/// Load input text from a UTF-8 file, trimmed.
pub fn load_text(path: &Path) -> Result<String, TokpackError> {
    if !path.is_file() {
        return Err(TokpackError::not_a_file(path));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(text.trim().to_string())
}

/// Clean one item and rewrite it under the phrase rule.
///
/// Returns `None` when nothing survives cleanup.
pub fn transform_item(item: &str, proximity: usize) -> Option<String> {
    let mut s = item.trim();

    // One layer of matching outer quotes comes off.
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s = s[1..s.len() - 1].trim();
    }

    let s = TRAILING_PUNCT_RE.replace(s, "");
    let s = JOINER_RE.replace_all(&s, " ");
    let s = MULTISPACE_RE.replace_all(&s, " ");
    let s = s.trim();

    if s.is_empty() {
        return None;
    }

    if s.contains(' ') {
        Some(format!("\"{s}\"~{proximity}"))
    } else {
        Some(s.to_string())
    }
}

/// Rewrite a whole comma-separated text and tally phrase vs single counts.
pub fn process_text(text: &str, proximity: usize) -> FormatReport {
    let mut items = Vec::new();
    let mut phrases = 0;
    let mut singles = 0;

    for raw in text.split(',') {
        let Some(transformed) = transform_item(raw, proximity) else {
            continue;
        };
        if transformed.starts_with('"') {
            phrases += 1;
        } else {
            singles += 1;
        }
        items.push(transformed);
    }

    let total = items.len();
    FormatReport {
        result: items.join(", "),
        total,
        phrases,
        singles,
    }
}

/// Save the formatted result next to the input file with a
/// `_formatted.txt` suffix; returns the output path.
pub fn save_text(input_path: &Path, text: &str) -> Result<PathBuf, TokpackError> {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out_path = input_path.with_file_name(format!("{stem}_formatted.txt"));
    std::fs::write(&out_path, text)?;
    tracing::info!("Wrote formatted text to {}", out_path.display());
    Ok(out_path)
}
