use crate::command::ToolCommand;
use crate::extractor::models::{CapturedOutput, RunOutcome};
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for launching the external download tool
///
/// This trait isolates the menu from real process spawning, so the whole
/// loop can be driven in tests with a scripted runner.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Returns a unique identifier for this runner (e.g., "ytdlp-system")
    fn id(&self) -> &'static str;

    /// Runs the command with the terminal attached and waits for it to exit
    async fn run(&self, command: &ToolCommand) -> Result<RunOutcome>;

    /// Runs the command with stdout and stderr captured
    async fn capture(&self, command: &ToolCommand) -> Result<CapturedOutput>;
}
