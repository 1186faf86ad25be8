use anyhow::Result;
use tokpack::utils::error::{TokpackError, format_error};
use tokpack::{cli, run};

fn main() {
    // Try to determine verbose mode early for better error formatting
    // Default to false for early errors (before config is parsed)
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "-vv" || arg == "-vvv");

    if let Err(e) = run_main() {
        display_error(&e, verbose);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `TokpackError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(tokpack_error) = error.downcast_ref::<TokpackError>() {
        eprintln!("{}", format_error(tokpack_error, verbose));
    } else {
        // Fall back to formatted anyhow display
        eprintln!("\n\u{26a0} Error: {}", error);

        let causes: Vec<_> = error.chain().skip(1).collect();
        if !causes.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in causes.iter().enumerate() {
                let prefix = if i == causes.len() - 1 {
                    "\u{2514}\u{2500}"
                } else {
                    "\u{251c}\u{2500}"
                };
                eprintln!("{} {}", prefix, cause);
            }
        }

        if verbose {
            let backtrace = error.backtrace();
            if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
                eprintln!("\nBacktrace:\n{}", backtrace);
            }
        }
    }
}

fn run_main() -> Result<()> {
    // Parse CLI arguments (includes env vars)
    let args = cli::args::parse();

    // Load config from files + env vars (already merged)
    let config = cli::config::load(&args)?;

    // Initialize logging based on verbosity
    tokpack::init_logging(args.verbose);

    // Run the selected command
    run(args, config)
}
