//! Key mapping from terminal events to input actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for, before it is resolved against the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Direct cell selection (0..=8).
    Cell(usize),
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Play the cell under the board cursor.
    Activate,
    StepBack,
    StepForward,
    FirstStep,
    LastStep,
    ToggleSort,
    Restart,
}

/// Map keyboard input to input actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        // Direct cell selection, row-major
        KeyCode::Char(c @ '1'..='9') => Some(KeyAction::Cell(c as usize - '1' as usize)),

        // Board cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(KeyAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(KeyAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(KeyAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(KeyAction::CursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Activate),

        // History navigation
        KeyCode::Char('[') | KeyCode::PageUp => Some(KeyAction::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(KeyAction::StepForward),
        KeyCode::Home => Some(KeyAction::FirstStep),
        KeyCode::End => Some(KeyAction::LastStep),

        // Actions
        KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyAction::ToggleSort),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(KeyAction::Cell(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(KeyAction::Cell(4))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(KeyAction::Cell(8))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(KeyAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(KeyAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(KeyAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(KeyAction::CursorDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(KeyAction::Activate)
        );
    }

    #[test]
    fn test_history_and_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(KeyAction::StepBack)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::PageDown)),
            Some(KeyAction::StepForward)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Home)),
            Some(KeyAction::FirstStep)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(KeyAction::ToggleSort)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(KeyAction::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
