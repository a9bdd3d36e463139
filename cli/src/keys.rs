//! Key mapping from terminal events to game actions.

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty_48::{Action, ActionSource, Result};

/// Map a key press to an action. `None` for keys the game does not use.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Exit),
        (KeyCode::Up, _) => Some(Action::Up),
        (KeyCode::Left, _) => Some(Action::Left),
        (KeyCode::Down, _) => Some(Action::Down),
        (KeyCode::Right, _) => Some(Action::Right),
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            match c.to_ascii_lowercase() {
                'w' => Some(Action::Up),
                'a' => Some(Action::Left),
                's' => Some(Action::Down),
                'd' => Some(Action::Right),
                'r' => Some(Action::Restart),
                'q' => Some(Action::Exit),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Blocks on the terminal until a mapped key arrives.
pub struct Keyboard;

impl ActionSource for Keyboard {
    fn next_action(&mut self) -> Result<Action> {
        loop {
            match read()? {
                Event::Key(k) => match action_for(k) {
                    Some(action) => return Ok(action),
                    None => log::trace!("ignored {:?}", k),
                },
                ev => log::trace!("ignored {:?}", ev),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use twenty_48::Action;

    use super::action_for;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn wasd_and_arrows() {
        for (keys, action) in [
            (['w', 'W'], Action::Up),
            (['a', 'A'], Action::Left),
            (['s', 'S'], Action::Down),
            (['d', 'D'], Action::Right),
            (['r', 'R'], Action::Restart),
            (['q', 'Q'], Action::Exit),
        ] {
            for k in keys {
                assert_eq!(action_for(press(KeyCode::Char(k))), Some(action), "{k}");
            }
        }
        assert_eq!(action_for(press(KeyCode::Up)), Some(Action::Up));
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::Left));
        assert_eq!(action_for(press(KeyCode::Down)), Some(Action::Down));
        assert_eq!(action_for(press(KeyCode::Right)), Some(Action::Right));
    }

    #[test]
    fn ctrl_c_exits() {
        let k = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(k), Some(Action::Exit));
        let k = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(action_for(k), None);
    }

    #[test]
    fn ignores_other_keys_and_releases() {
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
        assert_eq!(action_for(press(KeyCode::Enter)), None);

        let release = KeyEvent {
            code: KeyCode::Char('w'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for(release), None);
    }
}
