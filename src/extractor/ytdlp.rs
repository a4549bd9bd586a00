//! yt-dlp process runner and format listing
//!
//! Commands always name the tool `yt-dlp`; the runner swaps in the resolved
//! binary path when spawning. The format listing is a scrape of yt-dlp's
//! human-readable table and breaks silently if that table changes.

use crate::command::{self, ToolCommand};
use crate::extractor::models::{CapturedOutput, FormatEntry, FormatListing, RunOutcome};
use crate::extractor::traits::ToolRunner;
use crate::utils::error::DlpError;
use crate::utils::platform::is_executable;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info};

/// Marker of the streams the listing keeps
pub const VIDEO_ONLY_MARKER: &str = "video only";

/// Container marker of the streams the listing keeps
pub const CONTAINER_MARKER: &str = "mp4";

/// Runs yt-dlp as a child process
#[derive(Debug, Clone)]
pub struct YtDlpRunner {
    ytdlp_path: PathBuf,
}

impl YtDlpRunner {
    /// Initialize runner and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. System PATH
    /// 2. Common installation paths (Homebrew, pip user install, etc.)
    pub fn new() -> Result<Self> {
        match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self { ytdlp_path: path })
            }
            None => Err(DlpError::YtDlpNotFound.into()),
        }
    }

    /// Runner for an explicit binary path or bare program name
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: path.into(),
        }
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }

    fn command_for(&self, command: &ToolCommand) -> AsyncCommand {
        let mut cmd = AsyncCommand::new(&self.ytdlp_path);
        cmd.args(command.args());
        cmd
    }
}

#[async_trait]
impl ToolRunner for YtDlpRunner {
    fn id(&self) -> &'static str {
        "ytdlp-system"
    }

    async fn run(&self, command: &ToolCommand) -> Result<RunOutcome> {
        debug!("Running: {}", command);

        let status = self
            .command_for(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("Failed to start {}", self.ytdlp_path.display()))?;

        Ok(RunOutcome {
            code: status.code(),
        })
    }

    async fn capture(&self, command: &ToolCommand) -> Result<CapturedOutput> {
        debug!("Capturing: {}", command);

        let output = self
            .command_for(command)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to start {}", self.ytdlp_path.display()))?;

        Ok(CapturedOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// List the video-only mp4 streams available for a URL
///
/// Uses: yt-dlp --list-formats --no-playlist
pub async fn list_formats(runner: &dyn ToolRunner, url: &str) -> FormatListing {
    debug!("Listing formats for URL: {}", url);

    let command = command::listing_command(url);
    match runner.capture(&command).await {
        Ok(output) if output.success() => FormatListing {
            formats: parse_formats(&output.stdout),
            error: None,
        },
        Ok(output) => {
            error!("yt-dlp format listing failed: {}", output.stderr.trim());
            FormatListing {
                formats: Vec::new(),
                error: Some(output.stderr),
            }
        }
        Err(e) => {
            error!("yt-dlp format listing could not run: {:#}", e);
            FormatListing {
                formats: Vec::new(),
                error: Some(format!("{:#}", e)),
            }
        }
    }
}

/// Parse the table printed by `yt-dlp --list-formats`
///
/// Keeps lines mentioning both "video only" and "mp4". Fields are read by
/// position: 0 is the id, 2 the resolution, 3 the frame rate, and the last
/// field the codec. Lines too short for that are skipped.
pub fn parse_formats(text: &str) -> Vec<FormatEntry> {
    text.lines()
        .filter(|line| line.contains(VIDEO_ONLY_MARKER) && line.contains(CONTAINER_MARKER))
        .filter_map(parse_format_line)
        .collect()
}

fn parse_format_line(line: &str) -> Option<FormatEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        debug!("Skipping short format line: {:?}", line);
        return None;
    }

    Some(FormatEntry {
        id: parts[0].to_string(),
        resolution: parts[2].to_string(),
        fps: parts[3].to_string(),
        codec: parts[parts.len() - 1].to_string(),
    })
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        info!("✓ Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("✓ Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    debug!("yt-dlp not found in PATH or common locations");
    None
}

/// Find yt-dlp in system PATH using `which`
fn find_in_path() -> Option<PathBuf> {
    which::which(command::PROGRAM)
        .ok()
        .filter(|path| path.exists())
}

/// Find yt-dlp in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
        // User local
        "~/.local/bin/yt-dlp",
    ];

    common_paths
        .iter()
        .map(|path_str| match path_str.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(path_str)),
            None => PathBuf::from(path_str),
        })
        .find(|path| is_executable(path))
}

// ============================================================
// Tests
// ============================================================
