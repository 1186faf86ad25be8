//! Configuration management using the `config` crate for hierarchical discovery and merging.
//!
//! ## Configuration Sources (in precedence order, highest to lowest):
//! 1. **CLI flags** - Highest precedence (merged in [`merge_pack`])
//! 2. **Environment variables** - Middle precedence (via `TOKPACK_*` prefix)
//! 3. **Config files** - Lowest precedence
//!
//! ## Config File Discovery (in merge order, later overrides earlier):
//! 1. `~/.config/tokpack/config.toml` (user config directory - lowest precedence)
//! 2. `tokpack.toml` in git repository root (walking up from current directory)
//! 3. `./tokpack.toml` in current directory
//! 4. Explicit `--config` path (if provided and exists - overrides all above)

use crate::cli::args::{Args, PackArgs};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pack: PackDefaults,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub phrases: PhrasesConfig,
}

/// Default bounds and separator for pack requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackDefaults {
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for PackDefaults {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            max_len: default_max_len(),
            separator: default_separator(),
        }
    }
}

/// Result rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_file_threshold")]
    pub file_threshold: usize,
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_threshold: default_file_threshold(),
            path: None,
        }
    }
}

/// Phrase formatter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasesConfig {
    #[serde(default = "default_proximity")]
    pub proximity: usize,
}

impl Default for PhrasesConfig {
    fn default() -> Self {
        Self {
            proximity: default_proximity(),
        }
    }
}

fn default_min_len() -> usize {
    480
}

fn default_max_len() -> usize {
    512
}

fn default_separator() -> String {
    ") * (".to_string()
}

fn default_file_threshold() -> usize {
    4000
}

fn default_proximity() -> usize {
    3
}

/// Pack settings after merging CLI flags over config values.
#[derive(Debug, Clone)]
pub struct PackSettings {
    pub min_len: usize,
    pub max_len: usize,
    pub separator: String,
    pub file_threshold: usize,
    pub output_path: Option<PathBuf>,
    pub json: bool,
}

/// Merge pack CLI flags over config-file values. CLI wins where present.
pub fn merge_pack(args: &PackArgs, config: &Config) -> PackSettings {
    PackSettings {
        min_len: args.min_len.unwrap_or(config.pack.min_len),
        max_len: args.max_len.unwrap_or(config.pack.max_len),
        separator: args
            .separator
            .clone()
            .unwrap_or_else(|| config.pack.separator.clone()),
        file_threshold: args.file_threshold.unwrap_or(config.output.file_threshold),
        output_path: args
            .output
            .clone()
            .or_else(|| config.output.path.as_ref().map(PathBuf::from)),
        json: args.json,
    }
}

fn discover_config_paths(explicit_path: &PathBuf) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User config (lowest precedence)
    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    // Git root config
    if let Some(git_root) = find_git_root() {
        let git_config = git_root.join("tokpack.toml");
        if git_config.exists() {
            paths.push(git_config);
        }
    }

    // Current directory config
    let current_dir_config = PathBuf::from("tokpack.toml");
    if current_dir_config.exists() {
        paths.push(current_dir_config);
    }

    // Explicit --config path (highest precedence)
    if explicit_path != &PathBuf::from("tokpack.toml") && explicit_path.exists() {
        paths.push(explicit_path.clone());
    }

    paths
}

fn find_git_root() -> Option<PathBuf> {
    git2::Repository::discover(".")
        .ok()
        .and_then(|repo| repo.workdir().map(|p| p.to_path_buf()))
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("tokpack").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
pub fn load(args: &Args) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in discover_config_paths(&args.config) {
        builder = builder.add_source(config::File::from(config_path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("TOKPACK")
            .separator("_")
            .try_parsing(true),
    );

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}
