//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, Pane};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Fetch a new snapshot and rebuild the tables.
    Refresh,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_help {
        return handle_help_popup(state, key);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Manual refresh
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => KeyAction::Refresh,

        // Auto-refresh toggle
        KeyCode::Char('a') | KeyCode::Char('A') => {
            state.auto_refresh = !state.auto_refresh;
            KeyAction::None
        }

        // Pane focus
        KeyCode::Tab => {
            state.focus = state.focus.next();
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.focus = Pane::CurrentStatus;
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.focus = Pane::StatusHistory;
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.focus = Pane::Transmissions;
            KeyAction::None
        }

        // Scrolling within the focused pane
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down(1);
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.scroll_up(10);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.scroll_down(10);
            KeyAction::None
        }
        KeyCode::Home => {
            state.scroll_top();
            KeyAction::None
        }
        KeyCode::End => {
            state.scroll_bottom();
            KeyAction::None
        }

        // Help popup
        KeyCode::Char('h') | KeyCode::Char('?') => {
            state.show_help = true;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

fn handle_help_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.show_help = false;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(state: &mut AppState, code: KeyCode) -> KeyAction {
        handle_key(state, KeyEvent::from(code))
    }

    fn fresh() -> AppState {
        AppState::new("mock".to_string(), false)
    }

    #[test]
    fn test_quit_and_refresh_keys() {
        let mut state = fresh();
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(&mut state, KeyCode::Char('r')), KeyAction::Refresh);
        assert_eq!(press(&mut state, KeyCode::F(5)), KeyAction::Refresh);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_pane_focus_keys() {
        let mut state = fresh();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Pane::StatusHistory);
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.focus, Pane::Transmissions);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, Pane::StatusHistory);
    }

    #[test]
    fn test_auto_refresh_toggle() {
        let mut state = fresh();
        press(&mut state, KeyCode::Char('a'));
        assert!(state.auto_refresh);
        press(&mut state, KeyCode::Char('a'));
        assert!(!state.auto_refresh);
    }

    #[test]
    fn test_help_popup_swallows_quit() {
        let mut state = fresh();
        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);
        // q closes the popup instead of quitting.
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::None);
        assert!(!state.show_help);
    }
}
