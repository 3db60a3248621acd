use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Polls the terminal for at most one game input, waiting up to `timeout`.
///
/// Returns `Ok(None)` when no event arrives in time or the event maps to
/// nothing (unknown key, resize, key release).
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Maps one key press to a game input. Keys outside the arrow/confirm/quit
/// set are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Right));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ];

        for (code, direction) in cases {
            assert_eq!(
                map_key(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(GameInput::Direction(direction))
            );
        }
    }

    #[test]
    fn control_keys_map_to_confirm_and_quit() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(GameInput::Confirm)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(GameInput::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(GameInput::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            None
        );
    }
}
