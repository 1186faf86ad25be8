//! Token normalization for raw user input.
//!
//! Raw input arrives as free-form lines where tokens are separated by commas,
//! semicolons, or line breaks in any mix. Normalization flattens that into an
//! ordered token list: split on all three delimiters, trim each piece, drop
//! the empties. Order of the surviving pieces is preserved across lines
//! because downstream grouping treats it as meaningful.

/// Split raw lines into an ordered list of trimmed, non-empty tokens.
///
/// Pure and infallible: empty or all-whitespace input yields an empty list.
pub fn normalize_tokens<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in lines {
        for piece in line.as_ref().split([',', ';', '\n']) {
            let piece = piece.trim();
            if !piece.is_empty() {
                tokens.push(piece.to_string());
            }
        }
    }
    tokens
}

/// Re-trim an already-tokenized list and drop entries that are empty after
/// trimming. Applied defensively to token lists handed to `pack` directly,
/// bypassing [`normalize_tokens`].
pub fn preprocess(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
