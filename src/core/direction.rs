//! Compass directions.
//!
//! Directions double as tile orientations: a tile "facing" East has been
//! rotated one clockwise step from its canonical North-facing shape.

use serde::{Deserialize, Serialize};

/// One of the four compass directions, in clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Number of clockwise 90° steps from North.
    #[must_use]
    pub const fn steps(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Direction `steps` clockwise steps from North (taken modulo 4).
    #[must_use]
    pub const fn from_steps(steps: u8) -> Self {
        match steps % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// Rotate clockwise by `steps` quarter turns.
    #[must_use]
    pub const fn rotated(self, steps: u8) -> Self {
        Self::from_steps(self.steps() + steps % 4)
    }

    /// One clockwise quarter turn, W wraps to N.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        self.rotated(1)
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Grid offset of one step in this direction. North is toward y = 0.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Direction::North.clockwise(), Direction::East);
        assert_eq!(Direction::East.clockwise(), Direction::South);
        assert_eq!(Direction::South.clockwise(), Direction::West);
        assert_eq!(Direction::West.clockwise(), Direction::North);
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_steps_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_steps(dir.steps()), dir);
        }
        assert_eq!(Direction::from_steps(6), Direction::South);
    }
}
