//! Presentation layer: argument parsing, configuration, separator
//! auto-wrapping, and interactive field collection.

pub mod args;
pub mod config;

use crate::packer::normalize_tokens;
use crate::utils::error::TokpackError;
use console::Term;
use dialoguer::Input;

/// Separator used when the user supplies nothing at all.
pub const DEFAULT_SEPARATOR: &str = ") * (";

/// Wrap a user-supplied separator in closing/opening parens when it carries
/// none of its own.
///
/// Blank input falls back to [`DEFAULT_SEPARATOR`]. A separator that already
/// contains any parenthesis character is taken verbatim, balanced or not;
/// the packer never validates separator syntax.
pub fn auto_wrap_separator(sep: &str) -> String {
    let s = sep.trim();
    if s.is_empty() {
        return DEFAULT_SEPARATOR.to_string();
    }
    if !s.contains('(') && !s.contains(')') {
        return format!("){s}(");
    }
    s.to_string()
}

fn prompt_err(e: dialoguer::Error) -> TokpackError {
    TokpackError::Prompt(e.to_string())
}

/// Prompt for a token list until at least one token survives normalization.
pub fn prompt_token_list(label: &str) -> Result<Vec<String>, TokpackError> {
    let term = Term::stderr();
    loop {
        let raw: String = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        let tokens = normalize_tokens(&[raw]);
        if !tokens.is_empty() {
            return Ok(tokens);
        }
        term.write_line("The list is empty. Enter at least one token:")
            .map_err(TokpackError::FileSystem)?;
    }
}

/// Prompt for a non-negative integer, re-asking until it parses.
pub fn prompt_usize(label: &str, default: usize) -> Result<usize, TokpackError> {
    let term = Term::stderr();
    loop {
        let raw: String = Input::new()
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_err)?;
        match raw.trim().parse::<usize>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                term.write_line(&format!("Not a number: '{}'. Try again:", raw.trim()))
                    .map_err(TokpackError::FileSystem)?;
            }
        }
    }
}

/// Prompt for the separator; empty input is allowed and auto-wrapped later.
pub fn prompt_separator(default: &str) -> Result<String, TokpackError> {
    Input::new()
        .with_prompt("Separator (e.g. ')*(' or ')/1(')")
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)
}
