use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    NextButton,
    Select,
    Reload,
    ToggleScene,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, popup_open: bool) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if popup_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => Action::ClosePopup,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Tab | KeyCode::BackTab => Action::NextButton,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char('s') => Action::ToggleScene,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Action::Quit);
        assert_eq!(map_key(ctrl_c, true), Action::Quit);
    }

    #[test]
    fn popup_swallows_navigation() {
        assert_eq!(map_key(key(KeyCode::Char('j')), true), Action::None);
        assert_eq!(map_key(key(KeyCode::Char('r')), true), Action::None);
        assert_eq!(map_key(key(KeyCode::Esc), true), Action::ClosePopup);
    }

    #[test]
    fn main_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('r')), false), Action::Reload);
        assert_eq!(map_key(key(KeyCode::Down), false), Action::ScrollDown);
        assert_eq!(map_key(key(KeyCode::Tab), false), Action::NextButton);
        assert_eq!(map_key(key(KeyCode::Char('s')), false), Action::ToggleScene);
    }
}
