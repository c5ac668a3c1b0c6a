//! Key bindings for the terminal UI

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{state::SessionType, view::Command};

/// What a key press asks the front-end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Switch to whichever session is not active
    SwitchOther,
    Quit,
}

/// Map a key event onto an input, ignoring releases and unbound keys
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Input::Quit),
            _ => None,
        };
    }

    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Input::Command(Command::ToggleRun),
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Command(Command::Reset),
        KeyCode::Char('s') | KeyCode::Char('S') => Input::Command(Command::ToggleSound),
        KeyCode::Char('1') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Input::Command(Command::SwitchSession(SessionType::Work))
        }
        KeyCode::Char('2') | KeyCode::Char('b') | KeyCode::Char('B') => {
            Input::Command(Command::SwitchSession(SessionType::Break))
        }
        KeyCode::Tab | KeyCode::BackTab => Input::SwitchOther,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

/// Resolve an input against the session currently shown
pub fn resolve(input: Input, current: SessionType) -> Option<Command> {
    match input {
        Input::Command(command) => Some(command),
        Input::SwitchOther => Some(Command::SwitchSession(current.other())),
        Input::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn maps_control_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            Some(Input::Command(Command::ToggleRun))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('r'))),
            Some(Input::Command(Command::Reset))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('s'))),
            Some(Input::Command(Command::ToggleSound))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('2'))),
            Some(Input::Command(Command::SwitchSession(SessionType::Break)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('w'))),
            Some(Input::Command(Command::SwitchSession(SessionType::Work)))
        );
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Input::Quit));
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_r), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn tab_switches_to_the_other_session() {
        let input = map_key(press(KeyCode::Tab)).unwrap();
        assert_eq!(
            resolve(input, SessionType::Work),
            Some(Command::SwitchSession(SessionType::Break))
        );
        assert_eq!(
            resolve(input, SessionType::Break),
            Some(Command::SwitchSession(SessionType::Work))
        );
        assert_eq!(resolve(Input::Quit, SessionType::Work), None);
    }
}
