//! Utility modules for error handling, configuration and platform paths

pub mod config;
pub mod error;
pub mod platform;

// Re-export for convenience
pub use config::{ConfigField, ConfigStore, DlpConfig, LoadStatus};
pub use error::DlpError;
pub use platform::{config_file_path, default_download_dir, make_executable};
