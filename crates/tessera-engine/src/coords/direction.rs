use rand::Rng;

use super::{IntVector, Vector};

/// One of the four screen directions (+Y is down).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    pub fn offset(self) -> Vector {
        match self {
            Direction::Up => Vector::UP,
            Direction::Left => Vector::LEFT,
            Direction::Down => Vector::DOWN,
            Direction::Right => Vector::RIGHT,
        }
    }

    pub fn int_offset(self) -> IntVector {
        match self {
            Direction::Up => IntVector::UP,
            Direction::Left => IntVector::LEFT,
            Direction::Down => IntVector::DOWN,
            Direction::Right => IntVector::RIGHT,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_offsets_cancel() {
        for d in Direction::ALL {
            assert_eq!(d.int_offset() + d.opposite().int_offset(), IntVector::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn up_is_negative_y() {
        assert_eq!(Direction::Up.offset(), Vector::new(0.0, -1.0));
    }
}
