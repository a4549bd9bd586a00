//! Error handling for dlpmenu

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dlpmenu
#[derive(Debug, Error)]
pub enum DlpError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Configuration file is corrupt: {0}")]
    ConfigCorrupt(String),

    #[error("Could not start yt-dlp: {0}")]
    LaunchFailed(String),

    #[error("yt-dlp exited with status {}", exit_code_label(.code))]
    ExecutionFailed { code: Option<i32> },

    #[error("Failed to export script to {}: {source}", .path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DlpError {
    /// Process exit code to use when this error ends the program
    pub fn exit_code(&self) -> i32 {
        match self {
            DlpError::ExecutionFailed { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_failure_keeps_child_code() {
        let err = DlpError::ExecutionFailed { code: Some(2) };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "yt-dlp exited with status 2");
    }

    #[test]
    fn test_signal_termination_maps_to_one() {
        let err = DlpError::ExecutionFailed { code: None };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_launch_failure_maps_to_one() {
        let err = DlpError::LaunchFailed("No such file or directory".to_string());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Could not start yt-dlp: No such file or directory"
        );
    }
}
