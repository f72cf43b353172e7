//! Grid coordinates over the 7×7 board frame.

use serde::{Deserialize, Serialize};

use super::Direction;

/// A cell of the board frame.
///
/// `x` grows eastward and `y` grows southward. Collected goals are parked at
/// [`Coord::OFF_BOARD`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Sentinel for pieces that have left the game.
    pub const OFF_BOARD: Coord = Coord { x: -1, y: -1 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. May leave the frame.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[must_use]
    pub fn is_off_board(self) -> bool {
        self == Self::OFF_BOARD
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let c = Coord::new(3, 3);
        assert_eq!(c.step(Direction::North), Coord::new(3, 2));
        assert_eq!(c.step(Direction::East), Coord::new(4, 3));
        assert_eq!(c.step(Direction::South), Coord::new(3, 4));
        assert_eq!(c.step(Direction::West), Coord::new(2, 3));
    }

    #[test]
    fn test_display_and_sentinel() {
        assert_eq!(Coord::new(2, 5).to_string(), "2,5");
        assert!(Coord::OFF_BOARD.is_off_board());
        assert!(!Coord::new(0, 0).is_off_board());
    }
}
