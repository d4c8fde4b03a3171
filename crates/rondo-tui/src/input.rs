use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    Toggle,
    BeginAdd,
    Delete,
    /// A tap on the carousel at absolute terminal coordinates
    Tap {
        column: u16,
        row: u16,
    },
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match app.mode {
        Mode::Edit => handle_edit_mode(key),
        Mode::Normal => handle_normal_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation around the ring
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::MoveDown,

        // Task actions
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Toggle,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::BeginAdd,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::Delete,
        (KeyCode::Backspace, KeyModifiers::NONE) => Action::Delete,

        _ => Action::None,
    }
}

/// Key events while a title is being typed
fn handle_edit_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if !c.is_control() => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Handle a mouse event; only left-button presses become taps
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Tap {
            column: mouse.column,
            row: mouse.row,
        },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rondo_core::AppConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn normal_mode_navigation_keys() {
        let app = App::new(AppConfig::default(), crate::theme::Theme::default());
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::MoveDown);
        assert_eq!(handle_key_event(key(KeyCode::Up), &app), Action::MoveUp);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Toggle);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Quit);
    }

    #[test]
    fn edit_mode_captures_characters() {
        let mut app = App::new(AppConfig::default(), crate::theme::Theme::default());
        app.mode = Mode::Edit;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app),
            Action::InputChar('j')
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Cancel);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Confirm);
    }
}
