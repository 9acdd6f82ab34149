//! Application state and event loop.

mod runner;

pub use runner::{LogLevel, RunMessage, start_run};

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::info;

use shoebox_archive::ArchiveProgress;
use shoebox_core::RunConfig;

use crate::event::KeyAction;
use crate::theme::Theme;
use crate::ui;

/// Result type for the TUI.
pub type AppResult<T> = color_eyre::Result<T>;

/// Channel buffer for run messages.
pub(crate) const RUN_CHANNEL_SIZE: usize = 100;

/// How often the UI wakes up to drain background messages.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Input,
    Output,
}

/// One line in the on-screen log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: LogLevel,
    pub text: String,
}

/// Application state for the archive form.
pub struct App {
    /// Current color theme.
    pub theme: Theme,
    /// Focused form field.
    pub focus: Field,
    /// Source directory field contents.
    pub input_value: String,
    /// Destination directory field contents.
    pub output_value: String,
    /// Whether a run is active; the start control is disabled while set.
    pub running: bool,
    /// On-screen log lines.
    pub log: Vec<LogLine>,
    /// Log scroll offset, counted in lines from the bottom (0 follows).
    pub log_scroll: usize,
    /// Latest progress snapshot of the active or last run.
    pub progress: Option<ArchiveProgress>,
    /// Receiver for the active run's messages.
    rx: Option<mpsc::Receiver<RunMessage>>,
    should_quit: bool,
}

impl App {
    /// Create the form with platform defaults: the pictures directory as
    /// the source suggestion and the working directory as destination.
    pub fn new() -> Self {
        let input_default = dirs::picture_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .display()
            .to_string();
        let output_default = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .display()
            .to_string();

        Self {
            theme: Theme::dark(),
            focus: Field::default(),
            input_value: input_default,
            output_value: output_default,
            running: false,
            log: Vec::new(),
            log_scroll: 0,
            progress: None,
            rx: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw, handle keys, drain run messages.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        while !self.should_quit {
            self.drain_messages();

            terminal.draw(|frame| ui::render(frame, &self))?;

            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(KeyAction::from_key_event(key));
                        }
                    }
                }
                _ = tick.tick() => {}
            }
        }

        Ok(())
    }

    /// Pull everything the background run has produced since last time.
    fn drain_messages(&mut self) {
        loop {
            let Some(rx) = self.rx.as_mut() else {
                return;
            };

            match rx.try_recv() {
                Ok(message) => self.handle_message(message),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Worker gone without a terminal message.
                    if self.running {
                        self.running = false;
                        self.push_log(LogLevel::Error, "Run ended unexpectedly".to_string());
                    }
                    self.rx = None;
                    break;
                }
            }
        }
    }

    fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::ForceQuit => self.should_quit = true,
            KeyAction::Quit => {
                // No cancellation support: the form only closes while idle.
                if !self.running {
                    self.should_quit = true;
                }
            }
            KeyAction::ToggleTheme => self.theme.toggle(),
            KeyAction::ScrollUp => {
                self.log_scroll = (self.log_scroll + 1).min(self.log.len());
            }
            KeyAction::ScrollDown => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            // The form is locked while a run is active.
            _ if self.running => {}
            KeyAction::NextField | KeyAction::PrevField => {
                self.focus = match self.focus {
                    Field::Input => Field::Output,
                    Field::Output => Field::Input,
                };
            }
            KeyAction::Insert(c) => self.focused_value_mut().push(c),
            KeyAction::DeleteBack => {
                self.focused_value_mut().pop();
            }
            KeyAction::ClearField => self.focused_value_mut().clear(),
            KeyAction::Start => self.submit(),
            KeyAction::None => {}
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Input => &mut self.input_value,
            Field::Output => &mut self.output_value,
        }
    }

    /// Validate the form and kick off a background run.
    fn submit(&mut self) {
        let input = PathBuf::from(self.input_value.trim());
        let output = PathBuf::from(self.output_value.trim());

        if !input.is_dir() {
            self.push_log(
                LogLevel::Error,
                format!("Input is not a directory: {}", input.display()),
            );
            return;
        }
        if !output.is_dir() {
            self.push_log(
                LogLevel::Error,
                format!("Output is not a directory: {}", output.display()),
            );
            return;
        }

        let config = match RunConfig::builder().input_dir(input).output_dir(output).build() {
            Ok(config) => config,
            Err(e) => {
                self.push_log(LogLevel::Error, e.to_string());
                return;
            }
        };

        info!(
            input = %config.input_dir.display(),
            output = %config.output_dir.display(),
            "starting archive run"
        );
        self.push_log(
            LogLevel::Info,
            format!(
                "Archiving {} into {}",
                config.input_dir.display(),
                config.output_dir.display()
            ),
        );
        self.progress = None;
        self.running = true;
        self.rx = Some(start_run(config));
    }

    fn handle_message(&mut self, message: RunMessage) {
        match message {
            RunMessage::Log(level, text) => self.push_log(level, text),
            RunMessage::Progress(progress) => {
                if let (Some(source), Some(archive)) =
                    (&progress.current_source, &progress.current_archive)
                {
                    let name = source
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| source.display().to_string());
                    self.push_log(
                        LogLevel::Info,
                        format!("{} -> {}", name, archive.display()),
                    );
                }
                self.progress = Some(progress);
            }
            RunMessage::Finished(complete) => {
                for failure in &complete.failures {
                    self.push_log(LogLevel::Warn, failure.to_string());
                }
                let level = if complete.is_success() {
                    LogLevel::Info
                } else {
                    LogLevel::Warn
                };
                self.push_log(
                    level,
                    format!(
                        "{} ({})",
                        complete.summary(),
                        humansize::format_size(complete.bytes_archived, humansize::BINARY)
                    ),
                );
                self.running = false;
                self.rx = None;
            }
            RunMessage::Failed(message) => {
                self.push_log(LogLevel::Error, message);
                self.running = false;
                self.rx = None;
            }
        }
    }

    fn push_log(&mut self, level: LogLevel, text: String) {
        self.log.push(LogLine { level, text });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
