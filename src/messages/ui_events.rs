//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::Control;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Activate a control directly (set its target)
    Activate(Control),
    /// Activate whichever control has focus
    ActivateFocused,
    FocusNext,
    FocusPrev,
    /// Set the target to the absent marker
    ClearTarget,

    ToggleHelp,
    CloseHelp,

    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => Some(UiEvent::CloseHelp),
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('j') => Some(UiEvent::Activate(Control::Jack)),
        KeyCode::Char('s') => Some(UiEvent::Activate(Control::Sally)),
        KeyCode::Char('c') => Some(UiEvent::ClearTarget),
        KeyCode::Tab | KeyCode::Right => Some(UiEvent::FocusNext),
        KeyCode::BackTab | KeyCode::Left => Some(UiEvent::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::ActivateFocused),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('j')), false),
            Some(UiEvent::Activate(Control::Jack))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('s')), false),
            Some(UiEvent::Activate(Control::Sally))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), false),
            Some(UiEvent::ActivateFocused)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(key, true), Some(UiEvent::Quit));
        // Plain 'c' clears instead
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('c')), false),
            Some(UiEvent::ClearTarget)
        );
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('j')), true),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('j'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }
}
