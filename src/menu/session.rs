//! The interactive loop
//!
//! A `Session` owns the in-memory configuration for the whole run. It renders
//! the current state, reads one line, asks `step` for the transition, and
//! performs the requested effect.

use crate::dispatch;
use crate::extractor::traits::ToolRunner;
use crate::extractor::ytdlp::list_formats;
use crate::menu::console::Console;
use crate::menu::render::render;
use crate::menu::state::{step, Effect, MenuState};
use crate::utils::config::{ConfigStore, DlpConfig, LoadStatus};
use crate::utils::error::DlpError;
use anyhow::Result;
use chrono::Local;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

enum Flow {
    Continue,
    Quit,
}

pub struct Session<C: Console> {
    config: DlpConfig,
    store: ConfigStore,
    console: C,
    runner: Arc<dyn ToolRunner>,
    state: MenuState,
    /// Set when the last effect printed something the user should still see
    keep_screen: bool,
}

impl<C: Console> Session<C> {
    pub fn new(
        config: DlpConfig,
        store: ConfigStore,
        console: C,
        runner: Arc<dyn ToolRunner>,
    ) -> Self {
        Self {
            config,
            store,
            console,
            runner,
            state: MenuState::Main,
            keep_screen: false,
        }
    }

    /// Load the configuration from `store`, report how that went, and build a session
    pub fn open(store: ConfigStore, mut console: C, runner: Arc<dyn ToolRunner>) -> Self {
        let (config, status) = store.load();
        console.println(&status.message());

        let mut session = Self::new(config, store, console, runner);
        session.keep_screen = status != LoadStatus::Loaded;
        session
    }

    pub fn config(&self) -> &DlpConfig {
        &self.config
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Run until the user quits or input ends
    ///
    /// A yt-dlp run that exits non-zero ends the loop with its error, without
    /// saving. A run that cannot start is reported and the menu carries on.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let screen = render(&self.state, &self.config);
            if self.state == MenuState::Main && !self.keep_screen {
                self.console.clear();
            }
            self.keep_screen = false;

            if !screen.body.is_empty() {
                self.console.println(&screen.body);
            }

            let input = match self.console.read_line(&screen.prompt).await? {
                Some(line) => line,
                None => {
                    debug!("End of input, quitting");
                    self.save_config();
                    return Ok(());
                }
            };

            let transition = step(&self.state, &input, &self.config, Local::now());
            debug!("{:?} + {:?} -> {:?}", self.state, input.trim(), transition.next);
            self.state = transition.next;

            if let Flow::Quit = self.apply(transition.effect).await? {
                return Ok(());
            }
        }
    }

    async fn apply(&mut self, effect: Effect) -> Result<Flow> {
        match effect {
            Effect::None => {}

            Effect::ListFormats { url } => {
                self.console.println("Fetching formats...");
                let listing = list_formats(self.runner.as_ref(), &url).await;
                if let Some(error) = &listing.error {
                    self.console
                        .println(&format!("✗ Error fetching formats: {}", error.trim()));
                }
                if listing.formats.is_empty() {
                    self.console.println("No video-only mp4 formats found");
                    self.keep_screen = true;
                } else {
                    self.state = MenuState::ChooseFormat {
                        url,
                        formats: listing.formats,
                    };
                }
            }

            Effect::Execute { command } => {
                match dispatch::execute(self.runner.as_ref(), &command).await {
                    Ok(()) => self.console.println("✓ Download finished"),
                    Err(e) => match e.downcast_ref::<DlpError>() {
                        Some(DlpError::LaunchFailed(reason)) => self
                            .console
                            .println(&format!("✗ Could not start yt-dlp: {}", reason)),
                        _ => return Err(e),
                    },
                }
                self.keep_screen = true;
            }

            Effect::Export { command, url, path } => {
                match dispatch::export_script(&path, &command, &url) {
                    Ok(()) => {
                        self.console
                            .println(&format!("✓ Script saved as '{}'", path.display()));
                        self.console
                            .println(&format!("Run with: {}", run_hint(&path)));
                    }
                    Err(e) => self.console.println(&format!("✗ Export failed: {}", e)),
                }
                self.keep_screen = true;
            }

            Effect::Cancelled => {
                self.console.println("Cancelled");
                self.keep_screen = true;
            }

            Effect::ApplySetting { field, value } => {
                if let Err(e) = self.config.apply(field, &value) {
                    self.console.println(&format!("✗ {}", e));
                }
            }

            Effect::Save => self.save_config(),

            Effect::SaveAndQuit => {
                self.save_config();
                info!("Quit requested");
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Save failures are reported and otherwise ignored
    fn save_config(&mut self) {
        match self.store.save(&self.config) {
            Ok(()) => self.console.println("✓ Configuration saved"),
            Err(e) => self.console.println(&format!("✗ Error saving configuration: {}", e)),
        }
    }
}

fn run_hint(path: &Path) -> String {
    if path.is_relative() {
        format!("./{}", path.display())
    } else {
        path.display().to_string()
    }
}
