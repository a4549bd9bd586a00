//! Menu states and the transition table
//!
//! `step` is pure: given the current state, one line of input, the
//! configuration and the current time it returns the next state and the side
//! effect the session has to perform. Invalid input never has an effect.

use crate::command::{build_command, DownloadMode, ToolCommand};
use crate::dispatch::{default_script_name, DispatchChoice};
use crate::extractor::models::FormatEntry;
use crate::utils::config::{ConfigField, DlpConfig};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Which flow a URL prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTarget {
    FullVideo,
    VideoOnly,
    AudioOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Main,
    AwaitUrl(UrlTarget),
    FullVideo {
        url: String,
    },
    ChooseFormat {
        url: String,
        formats: Vec<FormatEntry>,
    },
    Dispatch {
        command: ToolCommand,
        url: String,
    },
    ExportName {
        command: ToolCommand,
        url: String,
        default_name: String,
    },
    Settings,
    EditSetting(ConfigField),
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// List formats for the URL; the session moves to `ChooseFormat` if any are found
    ListFormats { url: String },
    Execute { command: ToolCommand },
    Export {
        command: ToolCommand,
        url: String,
        path: PathBuf,
    },
    Cancelled,
    ApplySetting { field: ConfigField, value: String },
    Save,
    SaveAndQuit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: MenuState,
    pub effect: Effect,
}

impl Transition {
    fn to(next: MenuState) -> Self {
        Self {
            next,
            effect: Effect::None,
        }
    }

    fn with(next: MenuState, effect: Effect) -> Self {
        Self { next, effect }
    }
}

/// Apply one line of input to `state`
pub fn step(
    state: &MenuState,
    input: &str,
    config: &DlpConfig,
    now: DateTime<Local>,
) -> Transition {
    let input = input.trim();

    match state {
        MenuState::Main => match input {
            "1" => Transition::to(MenuState::AwaitUrl(UrlTarget::FullVideo)),
            "2" => Transition::to(MenuState::AwaitUrl(UrlTarget::VideoOnly)),
            "3" => Transition::to(MenuState::AwaitUrl(UrlTarget::AudioOnly)),
            "4" => Transition::to(MenuState::Settings),
            "5" => Transition::with(MenuState::Main, Effect::SaveAndQuit),
            _ => Transition::to(MenuState::Main),
        },

        MenuState::AwaitUrl(_) if input.is_empty() => Transition::to(MenuState::Main),
        MenuState::AwaitUrl(target) => {
            let url = input.to_string();
            match target {
                UrlTarget::FullVideo => Transition::to(MenuState::FullVideo { url }),
                UrlTarget::VideoOnly => dispatch(config, url, DownloadMode::VideoOnly),
                UrlTarget::AudioOnly => dispatch(config, url, DownloadMode::AudioOnly),
            }
        }

        MenuState::FullVideo { url } => match input {
            "1" => dispatch(config, url.clone(), DownloadMode::Standard),
            "2" => dispatch(config, url.clone(), DownloadMode::WithSubtitles),
            "3" => Transition::with(MenuState::Main, Effect::ListFormats { url: url.clone() }),
            _ => Transition::to(MenuState::Main),
        },

        MenuState::ChooseFormat { url, formats } => {
            match formats.iter().find(|format| format.id == input) {
                Some(format) => dispatch(
                    config,
                    url.clone(),
                    DownloadMode::ChosenFormat(format.id.clone()),
                ),
                None => Transition::to(MenuState::Main),
            }
        }

        MenuState::Dispatch { command, url } => match DispatchChoice::from_input(input) {
            DispatchChoice::Execute => Transition::with(
                MenuState::Main,
                Effect::Execute {
                    command: command.clone(),
                },
            ),
            DispatchChoice::Export => Transition::to(MenuState::ExportName {
                command: command.clone(),
                url: url.clone(),
                default_name: default_script_name(now),
            }),
            DispatchChoice::Cancel => Transition::with(MenuState::Main, Effect::Cancelled),
        },

        MenuState::ExportName {
            command,
            url,
            default_name,
        } => {
            let name = if input.is_empty() { default_name.as_str() } else { input };
            Transition::with(
                MenuState::Main,
                Effect::Export {
                    command: command.clone(),
                    url: url.clone(),
                    path: PathBuf::from(name),
                },
            )
        }

        MenuState::Settings => match input {
            "9" => Transition::with(MenuState::Settings, Effect::Save),
            other => match ConfigField::from_menu_option(other) {
                Some(field) => Transition::to(MenuState::EditSetting(field)),
                None => Transition::to(MenuState::Main),
            },
        },

        MenuState::EditSetting(field) => Transition::with(
            MenuState::Settings,
            Effect::ApplySetting {
                field: *field,
                value: input.to_string(),
            },
        ),
    }
}

fn dispatch(config: &DlpConfig, url: String, mode: DownloadMode) -> Transition {
    let command = build_command(config, &url, &mode);
    Transition::to(MenuState::Dispatch { command, url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap()
    }

    fn step_from(state: &MenuState, input: &str) -> Transition {
        step(state, input, &DlpConfig::default(), now())
    }

    fn dispatch_state() -> MenuState {
        let url = "https://example/v".to_string();
        MenuState::Dispatch {
            command: build_command(&DlpConfig::default(), &url, &DownloadMode::Standard),
            url,
        }
    }

    #[test]
    fn test_main_menu_options() {
        assert_eq!(
            step_from(&MenuState::Main, "1").next,
            MenuState::AwaitUrl(UrlTarget::FullVideo)
        );
        assert_eq!(
            step_from(&MenuState::Main, "2").next,
            MenuState::AwaitUrl(UrlTarget::VideoOnly)
        );
        assert_eq!(
            step_from(&MenuState::Main, "3").next,
            MenuState::AwaitUrl(UrlTarget::AudioOnly)
        );
        assert_eq!(step_from(&MenuState::Main, "4").next, MenuState::Settings);
        assert_eq!(step_from(&MenuState::Main, "5").effect, Effect::SaveAndQuit);
    }

    #[test]
    fn test_invalid_input_has_no_effect() {
        for input in ["", "0", "6", "quit", "11"] {
            assert_eq!(step_from(&MenuState::Main, input), Transition::to(MenuState::Main));
        }

        let full = MenuState::FullVideo {
            url: "u".to_string(),
        };
        assert_eq!(step_from(&full, "9"), Transition::to(MenuState::Main));
        assert_eq!(step_from(&full, "4"), Transition::to(MenuState::Main));
    }

    #[test]
    fn test_url_prompt_trims_input() {
        let t = step_from(&MenuState::AwaitUrl(UrlTarget::FullVideo), "  https://example/v \n");
        assert_eq!(
            t.next,
            MenuState::FullVideo {
                url: "https://example/v".to_string()
            }
        );
    }

    #[test]
    fn test_empty_url_returns_to_main() {
        let t = step_from(&MenuState::AwaitUrl(UrlTarget::AudioOnly), "   ");
        assert_eq!(t, Transition::to(MenuState::Main));
    }

    #[test]
    fn test_full_video_builds_commands() {
        let full = MenuState::FullVideo {
            url: "https://example/v".to_string(),
        };

        match step_from(&full, "2").next {
            MenuState::Dispatch { command, url } => {
                assert_eq!(url, "https://example/v");
                assert!(command.tokens().contains(&"--embed-subs".to_string()));
            }
            other => panic!("expected Dispatch, got {:?}", other),
        }

        assert_eq!(
            step_from(&full, "3").effect,
            Effect::ListFormats {
                url: "https://example/v".to_string()
            }
        );
    }

    #[test]
    fn test_audio_only_goes_straight_to_dispatch() {
        match step_from(&MenuState::AwaitUrl(UrlTarget::AudioOnly), "u").next {
            MenuState::Dispatch { command, .. } => {
                assert!(command.tokens().contains(&"-x".to_string()))
            }
            other => panic!("expected Dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_choose_format_accepts_only_listed_ids() {
        let state = MenuState::ChooseFormat {
            url: "u".to_string(),
            formats: vec![FormatEntry {
                id: "137".to_string(),
                resolution: "1920x1080".to_string(),
                fps: "30".to_string(),
                codec: "avc1.640028".to_string(),
            }],
        };

        match step_from(&state, "137").next {
            MenuState::Dispatch { command, .. } => {
                assert!(command.tokens().contains(&"137+ba".to_string()))
            }
            other => panic!("expected Dispatch, got {:?}", other),
        }
        assert_eq!(step_from(&state, "22"), Transition::to(MenuState::Main));
    }

    #[test]
    fn test_dispatch_has_exactly_three_outcomes() {
        let state = dispatch_state();

        assert!(matches!(step_from(&state, "1").effect, Effect::Execute { .. }));
        assert_eq!(step_from(&state, "3").effect, Effect::Cancelled);
        assert_eq!(step_from(&state, "x").effect, Effect::Cancelled);

        match step_from(&state, "2") {
            Transition {
                next: MenuState::ExportName { default_name, .. },
                effect: Effect::None,
            } => assert_eq!(default_name, "yt-dlp_20240115_123045.sh"),
            other => panic!("expected ExportName, got {:?}", other),
        }
    }

    #[test]
    fn test_export_name_default_and_custom() {
        let MenuState::Dispatch { command, url } = dispatch_state() else {
            unreachable!()
        };
        let state = MenuState::ExportName {
            command,
            url,
            default_name: "yt-dlp_20240115_123045.sh".to_string(),
        };

        match step_from(&state, "").effect {
            Effect::Export { path, .. } => assert_eq!(path, PathBuf::from("yt-dlp_20240115_123045.sh")),
            other => panic!("expected Export, got {:?}", other),
        }
        match step_from(&state, "grab.sh").effect {
            Effect::Export { path, .. } => assert_eq!(path, PathBuf::from("grab.sh")),
            other => panic!("expected Export, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_menu() {
        assert_eq!(
            step_from(&MenuState::Settings, "4").next,
            MenuState::EditSetting(ConfigField::Codec)
        );
        assert_eq!(
            step_from(&MenuState::Settings, "9"),
            Transition::with(MenuState::Settings, Effect::Save)
        );
        assert_eq!(step_from(&MenuState::Settings, "0"), Transition::to(MenuState::Main));

        assert_eq!(
            step_from(&MenuState::EditSetting(ConfigField::Codec), " vp9 "),
            Transition::with(
                MenuState::Settings,
                Effect::ApplySetting {
                    field: ConfigField::Codec,
                    value: "vp9".to_string()
                }
            )
        );
    }
}
