//! File writing for oversized pack results.

use crate::utils::error::TokpackError;
use std::path::{Path, PathBuf};

/// Write the joined result text to `path`, creating parent directories as
/// needed. Returns the path actually written.
pub fn write_result_file(path: &Path, text: &str) -> Result<PathBuf, TokpackError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TokpackError::Config(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    std::fs::write(path, text)?;
    tracing::info!("Wrote {} chars to {}", text.chars().count(), path.display());

    Ok(path.to_path_buf())
}
