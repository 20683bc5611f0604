use log::debug;

use crate::cell::{Cell, CellState};
use crate::maze::Maze;
use crate::parents::ParentMap;

/// A route from source to destination. `length` counts both endpoints, so a route that
/// starts and ends on the same cell still has length 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
    length: usize,
}

impl Path {
    pub(crate) fn new(cells: Vec<Cell>, length: usize) -> Path {
        Path { cells, length }
    }

    /// The path of a maze whose source is its destination.
    pub fn trivial(source: Cell) -> Path {
        Path {
            cells: vec![source],
            length: 2,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Checks that consecutive cells are orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .windows(2)
            .all(|w| w[0].manhattan_distance(&w[1]) == 1)
    }
}

/// Walks the parent links back from `destination` to the root of `parents`, marking every
/// cell on the way as [CellState::OnPath]. The length starts at 2 for the two endpoints and
/// grows by one for each cell in between.
///
/// Panics if the chain from `destination` does not end at the root.
pub fn reconstruct(maze: &mut Maze, parents: &ParentMap, destination: Cell) -> Path {
    let mut cells = parents.trace(destination);
    let source = parents.root();
    assert_eq!(
        cells.last(),
        Some(&source),
        "parent chain from {destination} does not reach the source"
    );
    for &cell in &cells {
        maze.mark(cell, CellState::OnPath);
    }
    cells.reverse();
    let length = cells.len().max(2);
    debug!("Reconstructed path of length {length} ending at {destination}");
    Path::new(cells, length)
}
