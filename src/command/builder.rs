//! Argument vectors for yt-dlp
//!
//! Everything here is a pure function of the configuration, the URL and the
//! selected mode.

use crate::utils::config::DlpConfig;
use std::fmt;

/// Name of the external tool as written in commands and scripts
pub const PROGRAM: &str = "yt-dlp";

/// Subtitle format embedded subtitles are converted to
const SUBTITLE_FORMAT: &str = "srt";

/// What the user asked to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadMode {
    /// Best video with the preferred codec plus best audio
    Standard,
    /// Standard, with configured subtitles embedded as srt
    WithSubtitles,
    /// Best video with the preferred codec, no audio
    VideoOnly,
    /// Best audio, extracted
    AudioOnly,
    /// A format id picked from the listing, plus best audio
    ChosenFormat(String),
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Standard => f.write_str("standard"),
            DownloadMode::WithSubtitles => f.write_str("with subtitles"),
            DownloadMode::VideoOnly => f.write_str("video only"),
            DownloadMode::AudioOnly => f.write_str("audio only"),
            DownloadMode::ChosenFormat(id) => write!(f, "format {}", id),
        }
    }
}

/// An external process invocation, program name first
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    tokens: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = vec![program.to_string()];
        tokens.extend(args.into_iter().map(Into::into));
        Self { tokens }
    }

    /// All tokens, program name included
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Tokens joined by single spaces, without quoting
    pub fn command_line(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Build the download command for `url`
pub fn build_command(config: &DlpConfig, url: &str, mode: &DownloadMode) -> ToolCommand {
    let mut args: Vec<String> = vec!["-f".into(), format_selector(config, mode)];

    match mode {
        DownloadMode::WithSubtitles => {
            args.push("--embed-subs".into());
            args.push("--sub-langs".into());
            args.push(subtitle_languages(config));
            args.push("--convert-subs".into());
            args.push(SUBTITLE_FORMAT.into());
        }
        DownloadMode::AudioOnly => args.push("-x".into()),
        _ => {}
    }

    match mode {
        DownloadMode::Standard | DownloadMode::WithSubtitles | DownloadMode::ChosenFormat(_) => {
            push_option(&mut args, "--merge-output-format", Some(&config.format));
        }
        DownloadMode::VideoOnly => {
            push_option(&mut args, "--remux-video", Some(&config.format));
        }
        DownloadMode::AudioOnly => {}
    }

    push_option(&mut args, "--proxy", config.proxy.as_ref());
    push_option(&mut args, "--user-agent", config.user_agent.as_ref());
    push_option(&mut args, "--limit-rate", config.speed_limit.as_ref());

    args.push("-o".into());
    args.push(output_template(config));
    args.push(url.to_string());

    ToolCommand::new(PROGRAM, args)
}

/// Command that prints the format table for `url`
pub fn listing_command(url: &str) -> ToolCommand {
    ToolCommand::new(PROGRAM, ["--list-formats", "--no-playlist", url])
}

/// Format selector expression for a mode
pub fn format_selector(config: &DlpConfig, mode: &DownloadMode) -> String {
    let best_video = format!("bv*[vcodec~='{}']", config.codec);
    match mode {
        DownloadMode::Standard | DownloadMode::WithSubtitles => format!("{}+ba", best_video),
        DownloadMode::VideoOnly => best_video,
        DownloadMode::AudioOnly => "ba".to_string(),
        DownloadMode::ChosenFormat(id) => format!("{}+ba", id),
    }
}

/// Configured subtitle languages, comma-joined in configured order
pub fn subtitle_languages(config: &DlpConfig) -> String {
    config.default_subtitles.join(",")
}

/// Download directory and filename template joined with a literal `/`
///
/// The filename is always placed under the directory, even when it starts
/// with `/` itself.
pub fn output_template(config: &DlpConfig) -> String {
    format!(
        "{}/{}",
        config.download_path.to_string_lossy(),
        config.filename
    )
}

fn push_option(args: &mut Vec<String>, flag: &str, value: Option<&String>) {
    if let Some(value) = value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}
