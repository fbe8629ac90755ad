use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Prev,
    Reset,
    /// One-based frame number, from the digit keys
    JumpToFrame(usize),
    LastFrame,
    ToggleMode,
    Help,
    ExitMode,
    None,
}

/// Map a key press to an action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help; Ctrl+C still quits
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    if let Some(action) = keymap.lookup(&key) {
        return action.clone();
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToFrame(c as usize - '0' as usize)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use carousel_core::{AppConfig, Deck};

    use super::*;
    use crate::theme::Theme;

    fn app() -> App {
        App::new(Deck::generate(6), Arc::new(AppConfig::default()), Theme::default()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('l')), &app, &keymap), Action::Next);
        assert_eq!(handle_key_event(press(KeyCode::Char('0')), &app, &keymap), Action::Reset);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('4')), &app, &keymap),
            Action::JumpToFrame(4)
        );
        assert_eq!(handle_key_event(press(KeyCode::Char('z')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('l')), &app, &keymap), Action::ExitMode);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &app, &keymap), Action::Quit);
    }
}
