//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AppState;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_help {
        return handle_help_popup(state, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('m') | KeyCode::Char('M') => {
            state.toggle_label_mode();
            KeyAction::None
        }
        KeyCode::Char('h') | KeyCode::Char('?') => {
            state.show_help = true;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::Char('?') => {
            state.show_help = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::LabelMode;

    fn state() -> AppState {
        AppState::new(vec![], vec![], LabelMode::Month, "Last 3 Months".to_string())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyAction::Quit
        );
    }

    #[test]
    fn m_toggles_label_mode() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('m'))), KeyAction::None);
        assert_eq!(state.label_mode, LabelMode::Date);
    }

    #[test]
    fn help_popup_swallows_quit_key() {
        let mut state = state();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert!(state.show_help);

        // `q` closes the popup instead of quitting while it is open
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert!(!state.show_help);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut state = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('x'))), KeyAction::None);
    }
}
