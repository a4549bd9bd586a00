//! Application configuration

use crate::utils::error::DlpError;
use crate::utils::platform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Input that clears an optional setting in the settings menu
pub const CLEAR_TOKEN: &str = "-";

/// Persisted user preferences
///
/// Keys missing from a valid file keep their built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DlpConfig {
    /// Directory downloads are written to
    pub download_path: PathBuf,

    /// yt-dlp output template for the file name
    pub filename: String,

    /// Container used when merging or remuxing streams
    pub format: String,

    /// Preferred video codec, matched against the stream's vcodec
    pub codec: String,

    /// Proxy URL passed to yt-dlp
    pub proxy: Option<String>,

    /// User-Agent header passed to yt-dlp
    pub user_agent: Option<String>,

    /// Download rate limit, in yt-dlp notation (e.g. "5M")
    pub speed_limit: Option<String>,

    /// Subtitle languages, in priority order
    pub default_subtitles: Vec<String>,
}

impl Default for DlpConfig {
    fn default() -> Self {
        Self {
            download_path: platform::default_download_dir(),
            filename: "%(title)s.%(ext)s".to_string(),
            format: "mkv".to_string(),
            codec: "avc1".to_string(),
            proxy: None,
            user_agent: None,
            speed_limit: None,
            default_subtitles: vec!["en".to_string(), "es".to_string()],
        }
    }
}

/// One editable key of [`DlpConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    DownloadPath,
    Filename,
    Format,
    Codec,
    Proxy,
    UserAgent,
    SpeedLimit,
    DefaultSubtitles,
}

impl ConfigField {
    /// All fields, in settings-menu order
    pub const ALL: [ConfigField; 8] = [
        ConfigField::DownloadPath,
        ConfigField::Filename,
        ConfigField::Format,
        ConfigField::Codec,
        ConfigField::Proxy,
        ConfigField::UserAgent,
        ConfigField::SpeedLimit,
        ConfigField::DefaultSubtitles,
    ];

    /// Field for a 1-based settings-menu option
    pub fn from_menu_option(option: &str) -> Option<Self> {
        let index: usize = option.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// JSON key in the configuration file
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::DownloadPath => "download_path",
            ConfigField::Filename => "filename",
            ConfigField::Format => "format",
            ConfigField::Codec => "codec",
            ConfigField::Proxy => "proxy",
            ConfigField::UserAgent => "user_agent",
            ConfigField::SpeedLimit => "speed_limit",
            ConfigField::DefaultSubtitles => "default_subtitles",
        }
    }

    /// Label for display
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::DownloadPath => "Download directory",
            ConfigField::Filename => "Filename template",
            ConfigField::Format => "Container format",
            ConfigField::Codec => "Video codec",
            ConfigField::Proxy => "Proxy",
            ConfigField::UserAgent => "User agent",
            ConfigField::SpeedLimit => "Speed limit",
            ConfigField::DefaultSubtitles => "Subtitle languages",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            ConfigField::Proxy | ConfigField::UserAgent | ConfigField::SpeedLimit
        )
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DlpConfig {
    /// Current value of a field, formatted for the settings menu
    pub fn display_value(&self, field: ConfigField) -> String {
        fn optional(value: &Option<String>) -> String {
            value.clone().unwrap_or_else(|| "(not set)".to_string())
        }

        match field {
            ConfigField::DownloadPath => self.download_path.display().to_string(),
            ConfigField::Filename => self.filename.clone(),
            ConfigField::Format => self.format.clone(),
            ConfigField::Codec => self.codec.clone(),
            ConfigField::Proxy => optional(&self.proxy),
            ConfigField::UserAgent => optional(&self.user_agent),
            ConfigField::SpeedLimit => optional(&self.speed_limit),
            ConfigField::DefaultSubtitles => self.default_subtitles.join(","),
        }
    }

    /// Set a field from user input
    ///
    /// Blank input leaves the field untouched. [`CLEAR_TOKEN`] unsets an
    /// optional field. Subtitle languages are read as a comma-separated list.
    pub fn apply(&mut self, field: ConfigField, raw: &str) -> Result<(), DlpError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(());
        }

        if value == CLEAR_TOKEN {
            match field {
                ConfigField::Proxy => self.proxy = None,
                ConfigField::UserAgent => self.user_agent = None,
                ConfigField::SpeedLimit => self.speed_limit = None,
                _ => {
                    return Err(DlpError::InvalidSetting(format!(
                        "{} cannot be cleared",
                        field.label()
                    )))
                }
            }
            debug!("Setting {} cleared", field.key());
            return Ok(());
        }

        match field {
            ConfigField::DownloadPath => self.download_path = PathBuf::from(value),
            ConfigField::Filename => self.filename = value.to_string(),
            ConfigField::Format => self.format = value.to_string(),
            ConfigField::Codec => self.codec = value.to_string(),
            ConfigField::Proxy => self.proxy = Some(value.to_string()),
            ConfigField::UserAgent => self.user_agent = Some(value.to_string()),
            ConfigField::SpeedLimit => self.speed_limit = Some(value.to_string()),
            ConfigField::DefaultSubtitles => {
                let languages: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|lang| !lang.is_empty())
                    .map(str::to_string)
                    .collect();
                if languages.is_empty() {
                    return Err(DlpError::InvalidSetting(
                        "at least one subtitle language is required".to_string(),
                    ));
                }
                self.default_subtitles = languages;
            }
        }

        debug!("Setting {} updated", field.key());
        Ok(())
    }
}

/// Outcome of reading the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File read and applied
    Loaded,
    /// No file yet, defaults in use
    Missing,
    /// File is not valid JSON for this record, defaults in use
    Corrupt(String),
    /// File exists but could not be read, defaults in use
    Unreadable(String),
}

impl LoadStatus {
    /// One-line message for the user
    pub fn message(&self) -> String {
        match self {
            LoadStatus::Loaded => "✓ Configuration loaded".to_string(),
            LoadStatus::Missing => "⚠ No saved configuration found, using defaults".to_string(),
            LoadStatus::Corrupt(reason) => {
                format!("✗ Error: configuration file is corrupt ({}), using defaults", reason)
            }
            LoadStatus::Unreadable(reason) => {
                format!("✗ Error: could not read configuration ({}), using defaults", reason)
            }
        }
    }
}

/// Loads and saves [`DlpConfig`] at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.yt-dlp-gui-config.json`
    pub fn at_default_path() -> Self {
        Self::new(platform::config_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults on any problem
    ///
    /// A corrupt file is never partially applied.
    pub fn load(&self) -> (DlpConfig, LoadStatus) {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No configuration at {:?}", self.path);
                return (DlpConfig::default(), LoadStatus::Missing);
            }
            Err(e) => {
                warn!("Failed to read configuration {:?}: {}", self.path, e);
                return (DlpConfig::default(), LoadStatus::Unreadable(e.to_string()));
            }
        };

        match parse_config(&content) {
            Ok(config) => {
                debug!("Loaded configuration from {:?}", self.path);
                (config, LoadStatus::Loaded)
            }
            Err(e) => {
                warn!("{}", e);
                let reason = match e {
                    DlpError::ConfigCorrupt(reason) => reason,
                    other => other.to_string(),
                };
                (DlpConfig::default(), LoadStatus::Corrupt(reason))
            }
        }
    }

    /// Write the configuration as JSON with 4-space indentation
    pub fn save(&self, config: &DlpConfig) -> Result<(), DlpError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, to_pretty_json(config)?)?;
        info!("Saved configuration to {:?}", self.path);
        Ok(())
    }
}

fn parse_config(content: &str) -> Result<DlpConfig, DlpError> {
    serde_json::from_str(content).map_err(|e| DlpError::ConfigCorrupt(e.to_string()))
}

fn to_pretty_json(config: &DlpConfig) -> Result<Vec<u8>, DlpError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    Ok(buf)
}
