//! Run-or-export decision for a built command

use crate::command::ToolCommand;
use crate::extractor::traits::ToolRunner;
use crate::utils::error::DlpError;
use anyhow::Result;
use tracing::{debug, info, warn};

/// The three ways a built command can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchChoice {
    Execute,
    Export,
    Cancel,
}

impl DispatchChoice {
    /// "1" executes, "2" exports, anything else cancels
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "1" => DispatchChoice::Execute,
            "2" => DispatchChoice::Export,
            _ => DispatchChoice::Cancel,
        }
    }
}

/// Run the command in the foreground and wait for it
///
/// A child that never started becomes [`DlpError::LaunchFailed`]; a non-zero
/// exit becomes [`DlpError::ExecutionFailed`].
pub async fn execute(runner: &dyn ToolRunner, command: &ToolCommand) -> Result<()> {
    debug!("Executing via {}: {}", runner.id(), command);

    let outcome = runner.run(command).await.map_err(|e| {
        warn!("Could not start yt-dlp: {:#}", e);
        DlpError::LaunchFailed(format!("{:#}", e))
    })?;
    if !outcome.success() {
        warn!("yt-dlp failed with code {:?}", outcome.code);
        return Err(DlpError::ExecutionFailed { code: outcome.code }.into());
    }

    info!("yt-dlp finished successfully");
    Ok(())
}
