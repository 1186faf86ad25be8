use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `TOKPACK_*` and are overridden by
/// CLI flags. Example: `TOKPACK_SEPARATOR=')*('` is overridden by
/// `--separator ')/1('`.
#[derive(Parser, Debug)]
#[command(name = "tokpack")]
#[command(about = "Pack fixed and floating token lists into length-bounded bracketed constructs")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(short, long, default_value = "tokpack.toml", env = "TOKPACK_CONFIG", global = true)]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Group floating tokens into bracketed constructs around a fixed list
    Pack(PackArgs),
    /// Rewrite comma-separated items as quoted proximity phrases
    Phrases(PhrasesArgs),
}

#[derive(clap::Args, Debug)]
pub struct PackArgs {
    /// Fixed token list (commas, semicolons, or newlines between tokens)
    #[arg(long, env = "TOKPACK_LEFT")]
    pub left: Option<String>,

    /// Floating token list (commas, semicolons, or newlines between tokens)
    #[arg(long, env = "TOKPACK_RIGHT")]
    pub right: Option<String>,

    /// Minimum construct length in characters
    #[arg(long, env = "TOKPACK_MIN_LEN")]
    pub min_len: Option<usize>,

    /// Maximum construct length in characters
    #[arg(long, env = "TOKPACK_MAX_LEN")]
    pub max_len: Option<usize>,

    /// Separator between the left and right segments; wrapped as `)SEP(` when
    /// it carries no parentheses of its own
    #[arg(long, env = "TOKPACK_SEPARATOR")]
    pub separator: Option<String>,

    /// Write the result to this path when it exceeds the file threshold
    #[arg(short, long, env = "TOKPACK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Inline/file cutoff for the joined result, in characters
    #[arg(long, env = "TOKPACK_FILE_THRESHOLD")]
    pub file_threshold: Option<usize>,

    /// Emit the result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Collect every field with interactive prompts
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct PhrasesArgs {
    /// Input file with comma-separated items
    pub input: Option<PathBuf>,

    /// Inline text instead of an input file
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Proximity value N for the `"..."~N` rewrite
    #[arg(short = 'n', long, env = "TOKPACK_PROXIMITY")]
    pub proximity: Option<usize>,

    /// Output path (default: input path with a `_formatted.txt` suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
