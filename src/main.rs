//! dlpmenu - interactive front-end for yt-dlp
//!
//! Builds yt-dlp command lines from a saved configuration and a few menu
//! choices, then runs them or exports them as shell scripts.

use anyhow::Result;
use clap::Parser;
use dlpmenu::command::PROGRAM;
use dlpmenu::extractor::{ToolRunner, YtDlpRunner};
use dlpmenu::menu::{Session, TerminalConsole};
use dlpmenu::utils::{ConfigStore, DlpError};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Build yt-dlp commands interactively, then run or export them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file [default: ~/.yt-dlp-gui-config.json]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep previous output instead of clearing the screen on the main menu
    #[arg(long)]
    no_clear: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_tracing(args.verbose);

    let runner = check_ytdlp_installed();
    let store = match args.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::at_default_path(),
    };

    let mut session = Session::open(store, TerminalConsole::new(!args.no_clear), runner);
    if let Err(error) = session.run().await {
        eprintln!("Error: {:#}", error);
        let code = error
            .downcast_ref::<DlpError>()
            .map(DlpError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dlpmenu={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_ytdlp_installed() -> Arc<dyn ToolRunner> {
    match YtDlpRunner::new() {
        Ok(runner) => Arc::new(runner),
        Err(_) => {
            // yt-dlp not found - warn but don't exit, exporting scripts still works
            eprintln!("WARNING: yt-dlp not found in PATH or common locations");
            eprintln!("Commands can be exported, but running them will fail.");
            eprintln!("Please install yt-dlp:");
            eprintln!("  pip install yt-dlp");
            eprintln!("  or visit: https://github.com/yt-dlp/yt-dlp");
            Arc::new(YtDlpRunner::with_path(PROGRAM))
        }
    }
}
