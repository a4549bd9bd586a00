//! Text shown for each menu state

use crate::menu::state::{MenuState, UrlTarget};
use crate::utils::config::{ConfigField, DlpConfig, CLEAR_TOKEN};

/// What the console shows before reading a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub body: String,
    pub prompt: String,
}

pub fn render(state: &MenuState, config: &DlpConfig) -> Screen {
    match state {
        MenuState::Main => Screen {
            body: [
                "=== YT-DLP MENU ===",
                "1. Full video",
                "2. Video only",
                "3. Audio only",
                "4. Settings",
                "5. Quit",
            ]
            .join("\n"),
            prompt: "Option (1-5): ".to_string(),
        },

        MenuState::AwaitUrl(target) => Screen {
            body: match target {
                UrlTarget::FullVideo => "=== Full video ===",
                UrlTarget::VideoOnly => "=== Video only ===",
                UrlTarget::AudioOnly => "=== Audio only ===",
            }
            .to_string(),
            prompt: "Video URL: ".to_string(),
        },

        MenuState::FullVideo { url } => Screen {
            body: format!(
                "URL: {}\n\n1. Standard download\n2. With subtitles\n3. Choose quality\n4. Back",
                url
            ),
            prompt: "Option (1-4): ".to_string(),
        },

        MenuState::ChooseFormat { formats, .. } => {
            let mut body = String::from("Available video-only formats:\n");
            for format in formats {
                body.push_str(&format!("  {}\n", format));
            }
            Screen {
                body,
                prompt: "Format ID (Enter to go back): ".to_string(),
            }
        }

        MenuState::Dispatch { command, .. } => Screen {
            body: format!(
                "[Command]: {}\n\nOptions:\n1. Run now\n2. Export to .sh script\n3. Cancel",
                command
            ),
            prompt: "Choose an option (1-3): ".to_string(),
        },

        MenuState::ExportName { default_name, .. } => Screen {
            body: String::new(),
            prompt: format!("File name [{}]: ", default_name),
        },

        MenuState::Settings => {
            let mut lines = vec!["=== Settings ===".to_string()];
            for (i, field) in ConfigField::ALL.iter().enumerate() {
                lines.push(format!(
                    "{}. {}: {}",
                    i + 1,
                    field.label(),
                    config.display_value(*field)
                ));
            }
            lines.push("9. Save now".to_string());
            lines.push("0. Back".to_string());
            Screen {
                body: lines.join("\n"),
                prompt: "Option: ".to_string(),
            }
        }

        MenuState::EditSetting(field) => {
            let hint = if field.is_optional() {
                format!("(Enter keeps the current value, '{}' clears it)", CLEAR_TOKEN)
            } else if *field == ConfigField::DefaultSubtitles {
                "(comma-separated, e.g. en,es; Enter keeps the current value)".to_string()
            } else {
                "(Enter keeps the current value)".to_string()
            };
            Screen {
                body: format!(
                    "Current {}: {}\n{}",
                    field.label(),
                    config.display_value(*field),
                    hint
                ),
                prompt: "New value: ".to_string(),
            }
        }
    }
}
