//! Data structures for yt-dlp output

use std::fmt;

/// One video-only stream scraped from `yt-dlp --list-formats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatEntry {
    pub id: String,
    pub resolution: String,
    pub fps: String,
    pub codec: String,
}

impl fmt::Display for FormatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<12} {:>4} fps  {}",
            self.id, self.resolution, self.fps, self.codec
        )
    }
}

/// Result of listing formats for a URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatListing {
    pub formats: Vec<FormatEntry>,
    /// Error text reported by yt-dlp when the listing failed
    pub error: Option<String>,
}

/// Exit of a child process that inherited the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Exit and output of a child process with captured streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
