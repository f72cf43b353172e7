//! Shift descriptors: which line moves, and which way.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::pieces::Positioned;
use crate::board::state::BoardState;
use crate::board::topology::{
    insertion_index, is_insertable_index, is_insertion_point, MAX_PLAYABLE, MIN_PLAYABLE,
};
use crate::core::{Coord, Direction, EntityId};
use crate::error::PlacementError;

/// Whether a shift slides a row or a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// A row slides East or West.
    Horizontal,
    /// A column slides North or South.
    Vertical,
}

/// What happens to a piece pushed past the last playable cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRule {
    /// The piece lands on the border. Used for tiles: exactly one is evicted.
    Evict,
    /// The piece re-enters on the opposite edge. Used for tokens and goals.
    Wrap,
}

/// One piece's movement during a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displacement {
    pub id: EntityId,
    pub from: Coord,
    pub to: Coord,
}

/// Pieces moved by one application of a descriptor, in collection order.
pub type Displacements = SmallVec<[Displacement; 8]>;

/// A fully-determined shift of one row or column by one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftDescriptor {
    pub axis: Axis,
    /// Direction every piece on the line moves.
    pub direction: Direction,
    /// Row (horizontal) or column (vertical) index.
    pub line: i32,
}

impl ShiftDescriptor {
    /// Descriptor for pushing the floating tile in at `at`, if legal on `board`.
    #[must_use]
    pub fn try_build(board: &BoardState, at: Coord) -> Option<Self> {
        Self::build(board.forbidden_origin(), at).ok()
    }

    /// Same as [`try_build`](Self::try_build) with the reason for rejection.
    ///
    /// A left/top staging cell pushes toward the high index, a right/bottom
    /// one toward the low index.
    pub fn build(forbidden_origin: Option<i32>, at: Coord) -> Result<Self, PlacementError> {
        if !is_insertion_point(at.x, at.y) {
            return Err(PlacementError::NotMovable(at));
        }
        if forbidden_origin == Some(insertion_index(at)) {
            return Err(PlacementError::ForbiddenOrigin(at));
        }

        let descriptor = if at.x < MIN_PLAYABLE || at.x > MAX_PLAYABLE {
            debug_assert!(is_insertable_index(at.y));
            Self {
                axis: Axis::Horizontal,
                direction: if at.x < MIN_PLAYABLE {
                    Direction::East
                } else {
                    Direction::West
                },
                line: at.y,
            }
        } else {
            debug_assert!(is_insertable_index(at.x));
            Self {
                axis: Axis::Vertical,
                direction: if at.y < MIN_PLAYABLE {
                    Direction::South
                } else {
                    Direction::North
                },
                line: at.x,
            }
        };
        Ok(descriptor)
    }

    /// The same line pushed the other way.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            direction: self.direction.opposite(),
            ..*self
        }
    }

    /// True when `pos` lies on the shifted line.
    #[must_use]
    pub fn contains(&self, pos: Coord) -> bool {
        match self.axis {
            Axis::Horizontal => pos.y == self.line,
            Axis::Vertical => pos.x == self.line,
        }
    }

    /// Indices of the active pieces on the shifted line, in collection order.
    pub fn select<T: Positioned>(&self, items: &[T]) -> SmallVec<[usize; 8]> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_active() && self.contains(item.pos()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Move every selected piece one cell along the line.
    pub fn apply<T: Positioned>(&self, items: &mut [T], edge: EdgeRule) -> Displacements {
        let mut moved = Displacements::new();
        for i in self.select(items) {
            let item = &mut items[i];
            let from = item.pos();
            let mut to = from.step(self.direction);
            if edge == EdgeRule::Wrap {
                to = wrap(to);
            }
            item.set_pos(to);
            moved.push(Displacement {
                id: item.id(),
                from,
                to,
            });
        }
        moved
    }
}

fn wrap_axis(v: i32) -> i32 {
    if v < MIN_PLAYABLE {
        MAX_PLAYABLE
    } else if v > MAX_PLAYABLE {
        MIN_PLAYABLE
    } else {
        v
    }
}

fn wrap(pos: Coord) -> Coord {
    Coord::new(wrap_axis(pos.x), wrap_axis(pos.y))
}
