//! Color theme for the TUI.
//!
//! A trimmed semantic palette with dark and light variants, based on
//! Tailwind CSS slate colors.

use ratatui::style::{Color, Modifier, Style};

use crate::app::LogLevel;

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub label: Style,
    pub input: Style,
    pub input_focused: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Progress
    pub progress_bar: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_900 = Color::Rgb(15, 23, 42);
        let sky_400 = Color::Rgb(56, 189, 248);
        let emerald_400 = Color::Rgb(52, 211, 153);
        let amber_400 = Color::Rgb(251, 191, 36);
        let red_400 = Color::Rgb(248, 113, 113);

        Self {
            variant: ThemeVariant::Dark,
            background: slate_900,
            foreground: slate_100,
            muted: slate_500,
            success: emerald_400,
            warning: amber_400,
            error: red_400,
            info: sky_400,
            border: Style::default().fg(slate_700),
            border_focused: Style::default().fg(sky_400),
            title: Style::default()
                .fg(slate_100)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(slate_400),
            input: Style::default().fg(slate_100),
            input_focused: Style::default()
                .fg(slate_100)
                .add_modifier(Modifier::BOLD),
            help_key: Style::default()
                .fg(sky_400)
                .add_modifier(Modifier::BOLD),
            help_desc: Style::default().fg(slate_400),
            progress_bar: Style::default().fg(emerald_400).bg(slate_700),
            header: Style::default()
                .fg(slate_100)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().fg(slate_400),
        }
    }

    /// Light theme using the same palette inverted.
    pub fn light() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_900 = Color::Rgb(15, 23, 42);
        let sky_600 = Color::Rgb(2, 132, 199);
        let emerald_600 = Color::Rgb(5, 150, 105);
        let amber_600 = Color::Rgb(217, 119, 6);
        let red_600 = Color::Rgb(220, 38, 38);

        Self {
            variant: ThemeVariant::Light,
            background: slate_50,
            foreground: slate_900,
            muted: slate_500,
            success: emerald_600,
            warning: amber_600,
            error: red_600,
            info: sky_600,
            border: Style::default().fg(slate_300),
            border_focused: Style::default().fg(sky_600),
            title: Style::default()
                .fg(slate_900)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(slate_500),
            input: Style::default().fg(slate_900),
            input_focused: Style::default()
                .fg(slate_900)
                .add_modifier(Modifier::BOLD),
            help_key: Style::default()
                .fg(sky_600)
                .add_modifier(Modifier::BOLD),
            help_desc: Style::default().fg(slate_500),
            progress_bar: Style::default().fg(emerald_600).bg(slate_300),
            header: Style::default()
                .fg(slate_900)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().fg(slate_500),
        }
    }

    /// Swap between the dark and light variants.
    pub fn toggle(&mut self) {
        *self = match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        };
    }

    /// Color for a log line of the given severity.
    pub fn level_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Info => self.foreground,
            LogLevel::Warn => self.warning,
            LogLevel::Error => self.error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
