//! Maze tiles: shape, orientation and the passages they open.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Direction, EntityId};

/// Tile shape.
///
/// Each shape has a fixed exit pattern when facing North; other orientations
/// rotate that pattern clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Corridor: N, S.
    Straight,
    /// Corner: N, E.
    Elbow,
    /// Junction: N, E, W.
    Tee,
}

impl Shape {
    /// Exits when facing North.
    #[must_use]
    pub const fn canonical_exits(self) -> &'static [Direction] {
        match self {
            Shape::Straight => &[Direction::North, Direction::South],
            Shape::Elbow => &[Direction::North, Direction::East],
            Shape::Tee => &[Direction::North, Direction::East, Direction::West],
        }
    }
}

/// Open exits of a tile. Never more than three.
pub type Exits = SmallVec<[Direction; 3]>;

/// A maze segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: EntityId,
    pub pos: Coord,
    pub shape: Shape,
    pub orientation: Direction,
}

impl Tile {
    #[must_use]
    pub fn new(id: EntityId, pos: Coord, shape: Shape, orientation: Direction) -> Self {
        Self {
            id,
            pos,
            shape,
            orientation,
        }
    }

    /// Open exits for the current orientation, in canonical order.
    ///
    /// ```
    /// use rust_labyrinth::board::{Shape, Tile};
    /// use rust_labyrinth::core::{Coord, Direction, EntityId};
    ///
    /// let tile = Tile::new(EntityId(9), Coord::new(1, 1), Shape::Elbow, Direction::East);
    /// assert_eq!(tile.exits().as_slice(), &[Direction::East, Direction::South]);
    /// ```
    #[must_use]
    pub fn exits(&self) -> Exits {
        let steps = self.orientation.steps();
        self.shape
            .canonical_exits()
            .iter()
            .map(|d| d.rotated(steps))
            .collect()
    }

    #[must_use]
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exits().contains(&direction)
    }

    /// Whether a walker travelling in `direction` can step onto this tile.
    ///
    /// The tile must open back toward the cell the walker came from.
    #[must_use]
    pub fn can_enter_from(&self, direction: Direction) -> bool {
        self.has_exit(direction.opposite())
    }

    /// Turn one quarter clockwise.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.clockwise();
    }
}
