use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use streamify_engine::ControlEvent;
use streamify_types::SortField;

use crate::presentation::view_models::InputMode;

/// What a key press asks the dashboard to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiAction {
    Quit,
    EnterSearch,
    LeaveSearch,
    Control(ControlEvent),
}

/// Translate a key press into an action for the current input mode
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<TuiAction> {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(TuiAction::Quit);
    }

    match mode {
        InputMode::Normal => map_normal(key.code),
        InputMode::Search => map_search(key.code, ctrl),
    }
}

fn map_normal(code: KeyCode) -> Option<TuiAction> {
    let event = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(TuiAction::Quit),
        KeyCode::Char('/') => return Some(TuiAction::EnterSearch),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            ControlEvent::SortToggled(SortField::ALL[index])
        }
        KeyCode::Char('0') => ControlEvent::SortCleared,
        KeyCode::Left | KeyCode::Char('h') => ControlEvent::PreviousPage,
        KeyCode::Right | KeyCode::Char('l') => ControlEvent::NextPage,
        KeyCode::Home | KeyCode::Char('g') => ControlEvent::FirstPage,
        KeyCode::End | KeyCode::Char('G') => ControlEvent::LastPage,
        KeyCode::Char('s') => ControlEvent::PageSizeCycled,
        KeyCode::Char('x') => ControlEvent::SearchCleared,
        _ => return None,
    };
    Some(TuiAction::Control(event))
}

fn map_search(code: KeyCode, ctrl: bool) -> Option<TuiAction> {
    let event = match code {
        KeyCode::Enter | KeyCode::Esc => return Some(TuiAction::LeaveSearch),
        KeyCode::Char('u') if ctrl => ControlEvent::SearchCleared,
        KeyCode::Backspace => ControlEvent::SearchBackspace,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => ControlEvent::SearchInput(c),
        _ => return None,
    };
    Some(TuiAction::Control(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_keys() {
        let normal = |code| map_key(press(code), InputMode::Normal);

        assert_eq!(normal(KeyCode::Char('q')), Some(TuiAction::Quit));
        assert_eq!(normal(KeyCode::Char('/')), Some(TuiAction::EnterSearch));
        assert_eq!(
            normal(KeyCode::Char('4')),
            Some(TuiAction::Control(ControlEvent::SortToggled(
                SortField::StreamCount
            )))
        );
        assert_eq!(
            normal(KeyCode::Right),
            Some(TuiAction::Control(ControlEvent::NextPage))
        );
        assert_eq!(
            normal(KeyCode::Char('G')),
            Some(TuiAction::Control(ControlEvent::LastPage))
        );
        assert_eq!(normal(KeyCode::Char('9')), None);
    }

    #[test]
    fn test_search_mode_types_letters_that_are_shortcuts_elsewhere() {
        let search = |code| map_key(press(code), InputMode::Search);

        assert_eq!(
            search(KeyCode::Char('q')),
            Some(TuiAction::Control(ControlEvent::SearchInput('q')))
        );
        assert_eq!(
            search(KeyCode::Char('1')),
            Some(TuiAction::Control(ControlEvent::SearchInput('1')))
        );
        assert_eq!(search(KeyCode::Esc), Some(TuiAction::LeaveSearch));
        assert_eq!(
            search(KeyCode::Backspace),
            Some(TuiAction::Control(ControlEvent::SearchBackspace))
        );
        assert_eq!(
            map_key(ctrl('u'), InputMode::Search),
            Some(TuiAction::Control(ControlEvent::SearchCleared))
        );
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        assert_eq!(map_key(ctrl('c'), InputMode::Normal), Some(TuiAction::Quit));
        assert_eq!(map_key(ctrl('c'), InputMode::Search), Some(TuiAction::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, InputMode::Normal), None);
    }
}
