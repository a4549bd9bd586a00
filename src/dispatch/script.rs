//! Shell script export

use crate::command::ToolCommand;
use crate::utils::error::DlpError;
use crate::utils::platform::make_executable;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::Path;
use tracing::info;

pub const SHEBANG: &str = "#!/bin/bash";

/// Default script name, e.g. `yt-dlp_20240131_235959.sh`
pub fn default_script_name<Tz>(now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("yt-dlp_{}.sh", now.format("%Y%m%d_%H%M%S"))
}

/// Script body: shebang, a comment naming the URL, then the command line
pub fn render_script(command: &ToolCommand, url: &str) -> String {
    format!(
        "{}\n# Command generated for: {}\n{}\n",
        SHEBANG,
        url,
        command.command_line()
    )
}

/// Write the script to `path` and mark it executable
pub fn export_script(path: &Path, command: &ToolCommand, url: &str) -> Result<(), DlpError> {
    let failed = |source| DlpError::ExportFailed {
        path: path.to_path_buf(),
        source,
    };

    std::fs::write(path, render_script(command, url)).map_err(failed)?;
    make_executable(path).map_err(failed)?;

    info!("Exported script to {:?}", path);
    Ok(())
}
