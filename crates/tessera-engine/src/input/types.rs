use std::fmt;

use crate::coords::{Direction, Point, Vector};

/// Keyboard key identifier.
///
/// Only the arrow keys are recognised. Platform hosts translate their own
/// key codes into names accepted by [`Key::from_name`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Arrow(Direction),
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Arrow(direction) => Some(direction),
        }
    }

    pub fn offset(self) -> Option<Vector> {
        self.direction().map(Direction::offset)
    }

    /// Parses names such as `"ArrowUp"`, as produced by `Display`.
    pub fn from_name(name: &str) -> Option<Key> {
        let direction = match name {
            "ArrowUp" => Direction::Up,
            "ArrowLeft" => Direction::Left,
            "ArrowDown" => Direction::Down,
            "ArrowRight" => Direction::Right,
            _ => return None,
        };
        Some(Key::Arrow(direction))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Arrow(direction) => write!(f, "Arrow{direction:?}"),
        }
    }
}

/// Platform-agnostic input events delivered to a program.
///
/// Touch points are in canvas pixel coordinates. Keys are identified by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TouchBegan(Point),
    TouchMoved(Point),
    TouchEnded(Point),
    TouchCancelled(Point),

    KeyPressed(String),
    KeyReleased(String),

    /// Directional input such as a swipe or a d-pad press.
    Move(Direction),
}

impl Event {
    pub fn key_pressed(key: Key) -> Self {
        Event::KeyPressed(key.to_string())
    }

    pub fn key_released(key: Key) -> Self {
        Event::KeyReleased(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_round_trip() {
        for direction in Direction::ALL {
            let key = Key::Arrow(direction);
            assert_eq!(Key::from_name(&key.to_string()), Some(key));
        }
        assert_eq!(Key::Arrow(Direction::Left).to_string(), "ArrowLeft");
        assert_eq!(Key::from_name("Escape"), None);
    }

    #[test]
    fn arrow_offsets() {
        assert_eq!(Key::Arrow(Direction::Down).offset(), Some(Vector::DOWN));
        assert_eq!(Key::Arrow(Direction::Up).direction(), Some(Direction::Up));
    }

    #[test]
    fn key_events_carry_names() {
        assert_eq!(Event::key_pressed(Key::Arrow(Direction::Right)), Event::KeyPressed("ArrowRight".to_string()));
    }
}
