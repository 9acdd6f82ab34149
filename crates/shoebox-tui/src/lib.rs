//! Terminal user interface for shoebox.
//!
//! A small form for choosing the source and destination directories,
//! starting an archive run, and watching its progress — built with
//! ratatui.
//!
//! # Keyboard
//!
//! - `Tab`/`Shift-Tab` - Switch field
//! - `Enter` - Start the run (disabled while one is active)
//! - `Ctrl-u` - Clear the focused field
//! - `Up`/`Down` - Scroll the log
//! - `Ctrl-t` - Toggle dark/light theme
//! - `Esc` - Quit (`Ctrl-c` to force)

pub mod app;
mod event;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use theme::Theme;

/// Run the TUI application.
pub fn run() -> AppResult<()> {
    // Create tokio runtime for the background run and event stream
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new().run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately to drop any background task
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
