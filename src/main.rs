use anyhow::Result;
use covtrack::utils::error::{TrackerError, format_error};
use covtrack::{cli, run};

#[tokio::main]
async fn main() {
    // Try to determine verbose mode early for better error formatting
    // (before config is parsed).
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "-vv" || arg == "-vvv");

    if let Err(e) = run_main().await {
        display_error(&e, verbose);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `TrackerError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(tracker_error) = error.downcast_ref::<TrackerError>() {
        eprintln!("{}", format_error(tracker_error, verbose));
    } else {
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
    }
}

async fn run_main() -> Result<()> {
    let args = cli::args::parse();

    // Load config from files + env vars (already merged)
    let config = cli::config::load(&args)?;

    // CLI flags take precedence over anything the files or env provided
    let merged_config = cli::config::merge_config(&args, config)?;

    run(merged_config).await
}
