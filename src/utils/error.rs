use std::fmt;
use thiserror::Error;

/// Which side of a pack request was empty after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Left,
    Right,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokpackError {
    #[error("min_len ({min_len}) is greater than max_len ({max_len})")]
    MinExceedsMax { min_len: usize, max_len: usize },

    #[error("{part} part is empty after normalization")]
    EmptyPart { part: Part },

    #[error(
        "token '{token}' is too long ({length} chars) to fit any construct with max_len={max_len}"
    )]
    TokenTooLong {
        token: String,
        length: usize,
        max_len: usize,
    },

    #[error("construct exceeds the {limit} char limit (got {actual})")]
    LimitExceeded { limit: usize, actual: usize },

    #[error("token '{token}' contains a comma, which is reserved as the group join character")]
    CommaInToken { token: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Invalid input: {message}\nSuggestion: {suggestion}")]
    InvalidInput { message: String, suggestion: String },
}

impl TokpackError {
    pub fn empty_left() -> Self {
        TokpackError::EmptyPart { part: Part::Left }
    }

    pub fn empty_right() -> Self {
        TokpackError::EmptyPart { part: Part::Right }
    }

    pub fn not_a_file(path: &std::path::Path) -> Self {
        TokpackError::InvalidInput {
            message: format!("Not a readable file: {}", path.display()),
            suggestion: "Pass a path to an existing UTF-8 text file".to_string(),
        }
    }

    pub fn invalid_number(field: &str, raw: &str) -> Self {
        TokpackError::InvalidInput {
            message: format!("Invalid {}: '{}'", field, raw),
            suggestion: "Enter a non-negative integer (for example 480)".to_string(),
        }
    }

    /// Whether retrying the same input could ever succeed.
    ///
    /// Every pack error is caused by the input itself; the caller must fix the
    /// input and resubmit. `LimitExceeded` signals an internal invariant
    /// violation rather than bad input, but it is equally non-retriable.
    pub fn is_retriable(&self) -> bool {
        false
    }
}

/// Format an error for terminal display.
///
/// Pack errors carry enough structure to tell the user exactly which
/// constraint failed; verbose mode adds the error chain for wrapped I/O
/// failures.
pub fn format_error(error: &TokpackError, verbose: bool) -> String {
    let mut out = format!("\u{26a0} Error: {}", error);

    if verbose {
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            out.push_str(&format!("\n\u{2514}\u{2500} {}", cause));
            source = std::error::Error::source(cause);
        }
    }

    out
}
