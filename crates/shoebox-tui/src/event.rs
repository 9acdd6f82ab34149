//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Focus
    NextField,
    PrevField,

    // Editing
    /// Append a character to the focused field.
    Insert(char),
    /// Delete the character before the end of the focused field.
    DeleteBack,
    /// Clear the focused field.
    ClearField,

    // Run control
    /// Start the archive run.
    Start,

    // Log
    ScrollUp,
    ScrollDown,

    // UI toggles
    ToggleTheme,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Quit,

            // Field focus
            (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::NextField,
            (KeyCode::BackTab, _) => KeyAction::PrevField,

            // Start control
            (KeyCode::Enter, _) => KeyAction::Start,

            // Editing
            (KeyCode::Backspace, _) => KeyAction::DeleteBack,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearField,

            // Log scrolling
            (KeyCode::Up, _) => KeyAction::ScrollUp,
            (KeyCode::Down, _) => KeyAction::ScrollDown,
            (KeyCode::PageUp, _) => KeyAction::ScrollUp,
            (KeyCode::PageDown, _) => KeyAction::ScrollDown,

            // Theme
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => KeyAction::ToggleTheme,

            // Everything printable edits the focused field
            (KeyCode::Char(c), KeyModifiers::NONE) => KeyAction::Insert(c),
            (KeyCode::Char(c), KeyModifiers::SHIFT) => KeyAction::Insert(c),

            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_chars_edit() {
        let action = KeyAction::from_key_event(KeyEvent::new(
            KeyCode::Char('/'),
            KeyModifiers::NONE,
        ));
        assert_eq!(action, KeyAction::Insert('/'));
    }

    #[test]
    fn test_enter_starts() {
        let action =
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(action, KeyAction::Start);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let action =
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, KeyAction::ForceQuit);
    }
}
