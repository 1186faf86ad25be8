//! # tokpack
//!
//! tokpack groups two lists of text tokens into bracketed constructs whose
//! serialized length falls inside a caller-chosen `[min_len, max_len]`
//! character window:
//!
//! - the **left (fixed)** token list is repeated unchanged in every construct;
//! - the **right (floating)** token list is partitioned, in order, into
//!   contiguous comma-joined groups, one group per construct;
//! - each construct serializes as `(LEFT<sep>RIGHT)` and never exceeds
//!   `max_len`; every group except possibly the last aims for `min_len`.
//!
//! ## Architecture
//!
//! - [`packer`] - normalization, the length model, and the greedy grouping walk
//! - [`formatter`] - the companion proximity-phrase rewriter
//! - [`cli`] - argument parsing, config discovery, interactive prompts
//! - [`output`] - inline/file rendering and the lengths report
//! - [`utils`] - error types and shared formatting
//!
//! Configuration follows hierarchical precedence:
//! 1. User config (~/.config/tokpack/config.toml)
//! 2. Git root (tokpack.toml)
//! 3. Current directory (tokpack.toml)
//! 4. Explicit --config path
//! 5. Environment variables (TOKPACK_*)
//! 6. CLI flags (highest precedence)

pub mod cli;
pub mod formatter;
pub mod output;
pub mod packer;
pub mod utils;

use anyhow::Result;
use cli::args::{Args, Command, PackArgs, PhrasesArgs};
use cli::config::{Config, merge_pack};
use console::style;
use std::io::Write;
use utils::error::{Part, TokpackError};

/// Initialize logging based on verbosity level.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

/// Dispatch the parsed command against the merged configuration.
pub fn run(args: Args, config: Config) -> Result<()> {
    tracing::info!("tokpack v{} starting", env!("CARGO_PKG_VERSION"));

    match &args.command {
        Command::Pack(pack_args) => run_pack(pack_args, &config, args.quiet),
        Command::Phrases(phrases_args) => run_phrases(phrases_args, &config, args.quiet),
    }
}

/// Resolve a token-list field from its flag, prompting when interactive.
fn collect_token_list(
    flag: Option<&str>,
    interactive: bool,
    label: &str,
    part: Part,
) -> Result<Vec<String>, TokpackError> {
    if let Some(raw) = flag {
        let tokens = packer::normalize_tokens(&[raw]);
        if tokens.is_empty() {
            return Err(TokpackError::EmptyPart { part });
        }
        return Ok(tokens);
    }
    if interactive {
        return cli::prompt_token_list(label);
    }
    Err(TokpackError::InvalidInput {
        message: format!("Missing {label}"),
        suggestion: "Pass --left and --right, or use --interactive".to_string(),
    })
}

fn run_pack(args: &PackArgs, config: &Config, quiet: bool) -> Result<()> {
    let settings = merge_pack(args, config);

    let left = collect_token_list(
        args.left.as_deref(),
        args.interactive,
        "Left (fixed) token list",
        Part::Left,
    )?;
    let right = collect_token_list(
        args.right.as_deref(),
        args.interactive,
        "Right (floating) token list",
        Part::Right,
    )?;

    let min_len = if args.interactive && args.min_len.is_none() {
        cli::prompt_usize("Minimum construct length", settings.min_len)?
    } else {
        settings.min_len
    };

    let mut max_len = if args.interactive && args.max_len.is_none() {
        cli::prompt_usize("Maximum construct length", settings.max_len)?
    } else {
        settings.max_len
    };
    // Interactive sessions re-ask for max_len instead of failing outright.
    while args.interactive && args.max_len.is_none() && min_len > max_len {
        max_len = cli::prompt_usize(
            "max_len cannot be below min_len; enter max_len again",
            settings.max_len.max(min_len),
        )?;
    }

    let raw_separator = if args.interactive && args.separator.is_none() {
        cli::prompt_separator(&settings.separator)?
    } else {
        settings.separator.clone()
    };
    let separator = cli::auto_wrap_separator(&raw_separator);

    tracing::debug!(
        "pack request: {} left tokens, {} right tokens, window [{}, {}], separator '{}'",
        left.len(),
        right.len(),
        min_len,
        max_len,
        separator
    );

    let constructs = packer::pack(&left, &right, min_len, max_len, &separator)?;

    if settings.json {
        let json = output::to_json(&constructs)?;
        let mut term = console::Term::stdout();
        writeln!(term, "{json}").map_err(TokpackError::FileSystem)?;
        return Ok(());
    }

    let render_options = output::RenderOptions {
        file_threshold: settings.file_threshold,
        output_path: settings.output_path.clone(),
    };
    let rendered = output::render_constructs(&constructs, &render_options)?;
    output::display_result(&constructs, &rendered, quiet)?;

    Ok(())
}

fn run_phrases(args: &PhrasesArgs, config: &Config, quiet: bool) -> Result<()> {
    let proximity = args.proximity.unwrap_or(config.phrases.proximity);

    let (text, source_path) = match (&args.text, &args.input) {
        (Some(inline), _) => (inline.trim().to_string(), None),
        (None, Some(path)) => (formatter::load_text(path)?, Some(path.clone())),
        (None, None) => {
            return Err(TokpackError::InvalidInput {
                message: "No input given".to_string(),
                suggestion: "Pass an input file path or --text".to_string(),
            }
            .into());
        }
    };

    let report = formatter::process_text(&text, proximity);
    tracing::debug!(
        "formatted {} items ({} phrases, {} singles)",
        report.total,
        report.phrases,
        report.singles
    );

    let mut term = console::Term::stdout();

    if let Some(out) = &args.output {
        std::fs::write(out, &report.result).map_err(TokpackError::FileSystem)?;
        writeln!(
            term,
            "{} Wrote formatted text to {}",
            style("\u{2713}").green().bold(),
            style(out.display()).bold()
        )
        .map_err(TokpackError::FileSystem)?;
    } else if let Some(path) = &source_path {
        let saved = formatter::save_text(path, &report.result)?;
        writeln!(
            term,
            "{} Wrote formatted text to {}",
            style("\u{2713}").green().bold(),
            style(saved.display()).bold()
        )
        .map_err(TokpackError::FileSystem)?;
    } else {
        writeln!(term, "{}", report.result).map_err(TokpackError::FileSystem)?;
    }

    if !quiet {
        writeln!(
            term,
            "{} items: {} phrases, {} singles",
            report.total, report.phrases, report.singles
        )
        .map_err(TokpackError::FileSystem)?;
    }

    Ok(())
}
