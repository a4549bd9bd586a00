//! dlpmenu library

pub mod command;
pub mod dispatch;
pub mod extractor;
pub mod menu;
pub mod utils;

// Re-export main types for easier use
pub use command::{build_command, DownloadMode, ToolCommand};
pub use extractor::{FormatEntry, ToolRunner, YtDlpRunner};
pub use menu::{Console, MenuState, Session};
pub use utils::{ConfigStore, DlpConfig, DlpError, LoadStatus};
