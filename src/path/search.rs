//! Depth-first route search through open passages.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::tile::Tile;
use crate::board::topology::{is_playable, FRAME_SIZE};
use crate::core::Coord;

/// A walkable sequence of cells, from the start cell to the destination.
///
/// Not necessarily the shortest one: the search stops at the first route it
/// finds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    cells: Vec<Coord>,
}

impl Route {
    /// Cell the route starts from.
    #[must_use]
    pub fn first(&self) -> Coord {
        self.cells[0]
    }

    /// Destination cell.
    #[must_use]
    pub fn last(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, both ends included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Routes always hold at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.cells.iter()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Tile index by cell, rebuilt for every query since the layout shifts.
struct TileGrid<'a> {
    tiles: &'a [Tile],
    cells: [[Option<usize>; FRAME_SIZE as usize]; FRAME_SIZE as usize],
}

impl<'a> TileGrid<'a> {
    fn new(tiles: &'a [Tile]) -> Self {
        let mut cells = [[None; FRAME_SIZE as usize]; FRAME_SIZE as usize];
        for (i, tile) in tiles.iter().enumerate() {
            if is_playable(tile.pos.x, tile.pos.y) {
                cells[tile.pos.y as usize][tile.pos.x as usize] = Some(i);
            }
        }
        Self { tiles, cells }
    }

    fn at(&self, pos: Coord) -> Option<&'a Tile> {
        if !is_playable(pos.x, pos.y) {
            return None;
        }
        self.cells[pos.y as usize][pos.x as usize].map(|i| &self.tiles[i])
    }
}

/// Find a route from `start` to `goal` through matching exits.
///
/// A step from one tile to its neighbour needs the tile to open toward the
/// neighbour and the neighbour to open back. Returns `None` when the cells
/// are not connected, which is an ordinary outcome.
#[must_use]
pub fn find_path(tiles: &[Tile], start: Coord, goal: Coord) -> Option<Route> {
    let grid = TileGrid::new(tiles);
    let mut visited = FxHashSet::default();
    let mut cells = explore(&grid, start, goal, &mut visited)?;
    cells.reverse();
    Some(Route { cells })
}

/// Recursive step. The returned cells run from `goal` back to `at`.
fn explore(
    grid: &TileGrid<'_>,
    at: Coord,
    goal: Coord,
    visited: &mut FxHashSet<Coord>,
) -> Option<Vec<Coord>> {
    if !is_playable(at.x, at.y) || !visited.insert(at) {
        return None;
    }
    if at == goal {
        return Some(vec![at]);
    }

    let tile = grid.at(at)?;
    for exit in tile.exits() {
        let next = at.step(exit);
        let enterable = grid.at(next).is_some_and(|t| t.can_enter_from(exit));
        if !enterable {
            continue;
        }
        if let Some(mut cells) = explore(grid, next, goal, visited) {
            cells.push(at);
            return Some(cells);
        }
    }
    None
}
