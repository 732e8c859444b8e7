//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command.
///
/// Letters match in either case. Release events (reported by terminals with
/// the kitty keyboard protocol) map to nothing.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MOVE_LEFT),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MOVE_RIGHT),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::SoftDrop),
        KeyCode::Char(' ') => Some(Command::HardDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(Command::ROTATE_CW)
        }
        KeyCode::Char('z') | KeyCode::Char('y') => Some(Command::ROTATE_CCW),

        KeyCode::Char('p') => Some(Command::TogglePause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('A')] {
            assert_eq!(map_key(press(code)), Some(Command::MOVE_LEFT), "{:?}", code);
        }
        for code in [KeyCode::Right, KeyCode::Char('L'), KeyCode::Char('d')] {
            assert_eq!(map_key(press(code)), Some(Command::MOVE_RIGHT), "{:?}", code);
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('S')] {
            assert_eq!(map_key(press(code)), Some(Command::SoftDrop), "{:?}", code);
        }
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Command::HardDrop));
    }

    #[test]
    fn test_rotation_keys() {
        for code in [KeyCode::Up, KeyCode::Char('x'), KeyCode::Char('K'), KeyCode::Char('w')] {
            assert_eq!(map_key(press(code)), Some(Command::ROTATE_CW), "{:?}", code);
        }
        for code in [KeyCode::Char('z'), KeyCode::Char('Y')] {
            assert_eq!(map_key(press(code)), Some(Command::ROTATE_CCW), "{:?}", code);
        }
    }

    #[test]
    fn test_pause_and_unmapped_keys() {
        assert_eq!(map_key(press(KeyCode::Char('P'))), Some(Command::TogglePause));
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(press(KeyCode::Char('r'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Char('x'))));
    }
}
