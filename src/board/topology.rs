//! Coordinate classification for the fixed 7×7 frame.
//!
//! ```text
//!   x: 0 1 2 3 4 5 6
//! y 0  . . v . v . .     . border (staging only)
//!   1  . F # F # F .     F fixed tile
//!   2  > # # # # # <     # movable tile
//!   3  . F # F # F .     > v < ^ insertion points and push direction
//!   4  > # # # # # <
//!   5  . F # F # F .
//!   6  . . ^ . ^ . .
//! ```
//!
//! Everything here is pure. Out-of-frame coordinates are never an error,
//! they just fail every test.

use crate::core::Coord;

/// Width and height of the whole frame, border included.
pub const FRAME_SIZE: i32 = 7;

/// Lowest playable row/column index.
pub const MIN_PLAYABLE: i32 = 1;

/// Highest playable row/column index.
pub const MAX_PLAYABLE: i32 = 5;

/// Number of playable cells.
pub const PLAYABLE_CELLS: usize = 25;

const BORDER_LOW: i32 = 0;
const BORDER_HIGH: i32 = FRAME_SIZE - 1;

fn in_frame(v: i32) -> bool {
    (BORDER_LOW..=BORDER_HIGH).contains(&v)
}

fn is_border_line(v: i32) -> bool {
    v == BORDER_LOW || v == BORDER_HIGH
}

#[must_use]
pub fn is_playable(x: i32, y: i32) -> bool {
    (MIN_PLAYABLE..=MAX_PLAYABLE).contains(&x) && (MIN_PLAYABLE..=MAX_PLAYABLE).contains(&y)
}

/// True for the ring of staging cells around the playable grid.
#[must_use]
pub fn is_border(x: i32, y: i32) -> bool {
    in_frame(x) && in_frame(y) && (is_border_line(x) || is_border_line(y))
}

/// Rows and columns 2 and 4 slide; 1, 3 and 5 hold the fixed tiles.
#[must_use]
pub fn is_insertable_index(i: i32) -> bool {
    i == 2 || i == 4
}

/// A border cell lined up with a movable row or column.
#[must_use]
pub fn is_insertion_point(x: i32, y: i32) -> bool {
    (is_border_line(x) && is_insertable_index(y)) || (is_border_line(y) && is_insertable_index(x))
}

/// Linear index identifying an insertion position.
///
/// Only meaningful for equality against the forbidden origin; distinct
/// insertion points always have distinct indices.
#[must_use]
pub fn insertion_index(at: Coord) -> i32 {
    at.x + at.y * 5
}

/// True for cells whose tile never moves.
#[must_use]
pub fn is_fixed_cell(x: i32, y: i32) -> bool {
    is_playable(x, y) && x % 2 == 1 && y % 2 == 1
}

/// All eight insertion points, row-major (y outer, x inner).
pub fn insertion_points() -> impl Iterator<Item = Coord> {
    (BORDER_LOW..=BORDER_HIGH)
        .flat_map(|y| (BORDER_LOW..=BORDER_HIGH).map(move |x| Coord::new(x, y)))
        .filter(|c| is_insertion_point(c.x, c.y))
}

/// All 25 playable cells, row-major.
pub fn playable_cells() -> impl Iterator<Item = Coord> {
    (MIN_PLAYABLE..=MAX_PLAYABLE)
        .flat_map(|y| (MIN_PLAYABLE..=MAX_PLAYABLE).map(move |x| Coord::new(x, y)))
}
