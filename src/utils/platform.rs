//! Platform-specific utilities for dlpmenu
//!
//! This module provides cross-platform abstractions for:
//! - The configuration file location
//! - The default download directory
//! - Marking generated scripts as executable

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the persisted configuration, stored in the home directory
pub const CONFIG_FILE_NAME: &str = ".yt-dlp-gui-config.json";

/// Returns the home directory, falling back to the current directory
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("Could not determine home directory, using current directory");
        PathBuf::from(".")
    })
}

/// Returns the configuration file path
/// - All platforms: ~/.yt-dlp-gui-config.json
pub fn config_file_path() -> PathBuf {
    let path = home_dir().join(CONFIG_FILE_NAME);
    debug!("Config file path: {:?}", path);
    path
}

/// Returns the default download directory
/// - All platforms: ~/Videos/yt-dlp
pub fn default_download_dir() -> PathBuf {
    home_dir().join("Videos").join("yt-dlp")
}

/// Set the permission bits of a generated script to rwxr-xr-x
pub fn make_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
    }

    #[cfg(not(unix))]
    {
        // Windows has no executable bit
        let _ = path;
        Ok(())
    }
}

/// Check if a file is executable
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.is_file() && metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
