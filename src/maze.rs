use core::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, CellState, NEIGHBOR_OFFSETS};
use crate::error::{MazeError, Result};

/// Square maze of [CellState]s stored row-major. The source is the top-left cell and the
/// destination the bottom-right one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub(crate) dimension: usize,
    pub(crate) cells: Vec<CellState>,
}

impl Maze {
    /// A fully open maze.
    pub fn new(dimension: usize) -> Result<Maze> {
        if dimension == 0 {
            return Err(MazeError::InvalidDimension(dimension));
        }
        Ok(Maze {
            dimension,
            cells: vec![CellState::Open; dimension * dimension],
        })
    }

    /// Builds a maze from integer-coded rows (`0` open, `1` wall, `-1` closed, `-2` frontier).
    pub fn from_codes<R: AsRef<[i8]>>(rows: &[R]) -> Result<Maze> {
        let mut maze = Maze::new(rows.len())?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != maze.dimension {
                return Err(MazeError::Parse(format!(
                    "row {row} has {} cells, expected {}",
                    values.len(),
                    maze.dimension
                )));
            }
            for (col, &code) in values.iter().enumerate() {
                maze.set(Cell::new(row, col), CellState::try_from(code)?);
            }
        }
        Ok(maze)
    }

    pub fn to_codes(&self) -> Vec<Vec<i8>> {
        self.cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn source(&self) -> Cell {
        Cell::new(0, 0)
    }

    pub fn destination(&self) -> Cell {
        Cell::new(self.dimension - 1, self.dimension - 1)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.dimension && cell.col < self.dimension
    }

    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row * self.dimension + cell.col
    }

    /// Panics if the cell lies outside the maze.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, state: CellState) {
        let ix = self.index(cell);
        self.cells[ix] = state;
    }

    /// Marks a non-wall cell during search.
    pub(crate) fn mark(&mut self, cell: Cell, state: CellState) {
        debug_assert!(self.get(cell) != CellState::Wall, "search entered wall {cell}");
        self.set(cell, state);
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|s| **s == state).count()
    }

    /// Iterates over the rows of the maze, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.dimension)
    }

    /// The 4-connected neighbours of `cell` that are inside the maze and neither a wall nor
    /// closed, in the order given by [NEIGHBOR_OFFSETS].
    pub fn traversable_neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|&n| self.in_bounds(n) && self.get(n).is_traversable())
            .collect()
    }

    /// Links every non-wall cell to its non-wall right and lower neighbours.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                let cell = Cell::new(row, col);
                if self.get(cell) == CellState::Wall {
                    continue;
                }
                [cell.offset(0, 1), cell.offset(1, 0)]
                    .into_iter()
                    .flatten()
                    .filter(|&n| self.in_bounds(n) && self.get(n) != CellState::Wall)
                    .for_each(|n| {
                        components.union(self.index(cell), self.index(n));
                    });
            }
        }
        components
    }

    /// Checks if `start` and `goal` are on the same connected component of non-wall cells.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return false;
        }
        if self.get(start) == CellState::Wall || self.get(goal) == CellState::Wall {
            return false;
        }
        let components = self.generate_components();
        let equiv = components.equiv(self.index(start), self.index(goal));
        debug!("{start} and {goal} connected: {equiv}");
        equiv
    }

    /// Checks if the destination can be reached from the source at all.
    pub fn solvable(&self) -> bool {
        self.reachable(self.source(), self.destination())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|s| s.symbol()).join(""))?;
        }
        Ok(())
    }
}

/// Parses the text form written by [Display](fmt::Display): one line per row using
/// `.` open, `#` wall, `x` closed, `o` frontier and `*` path.
impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Maze> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let mut maze = Maze::new(lines.len()).map_err(|_| MazeError::Parse("empty maze".into()))?;
        for (row, line) in lines.iter().enumerate() {
            let states = line
                .chars()
                .map(|c| {
                    CellState::from_symbol(c).ok_or_else(|| {
                        MazeError::Parse(format!("unknown symbol '{c}' in row {row}"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if states.len() != maze.dimension {
                return Err(MazeError::Parse(format!(
                    "row {row} has {} cells, expected {}",
                    states.len(),
                    maze.dimension
                )));
            }
            for (col, state) in states.into_iter().enumerate() {
                maze.set(Cell::new(row, col), state);
            }
        }
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_edge_interior_neighbor_counts() {
        let maze = Maze::new(3).unwrap();
        assert_eq!(maze.traversable_neighbors(Cell::new(0, 0)).len(), 2);
        assert_eq!(maze.traversable_neighbors(Cell::new(2, 2)).len(), 2);
        assert_eq!(maze.traversable_neighbors(Cell::new(0, 1)).len(), 3);
        assert_eq!(maze.traversable_neighbors(Cell::new(1, 1)).len(), 4);
    }

    #[test]
    fn neighbor_order_is_right_left_down_up() {
        let maze = Maze::new(3).unwrap();
        let neighbors = maze.traversable_neighbors(Cell::new(1, 1));
        assert_eq!(
            neighbors.as_slice(),
            &[
                Cell::new(1, 2),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(0, 1)
            ]
        );
    }

    #[test]
    fn walls_and_closed_cells_are_skipped() {
        // |.#.|
        // |x.o|
        // |...|
        let maze: Maze = ".#.\nx.o\n...".parse().unwrap();
        let neighbors = maze.traversable_neighbors(Cell::new(1, 1));
        assert_eq!(neighbors.as_slice(), &[Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn neighbor_query_does_not_mutate() {
        let maze: Maze = "..#\n...\n#..".parse().unwrap();
        let before = maze.clone();
        let _ = maze.traversable_neighbors(Cell::new(1, 1));
        assert_eq!(maze, before);
    }

    #[test]
    fn text_form_round_trips() {
        let text = ".#x\no*.\n#..\n";
        let maze: Maze = text.parse().unwrap();
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn rejects_non_square_text() {
        assert!("..\n...".parse::<Maze>().is_err());
        assert!("".parse::<Maze>().is_err());
        assert!(".?\n..".parse::<Maze>().is_err());
    }

    #[test]
    fn integer_codes() {
        let maze = Maze::from_codes(&[vec![0, 1], vec![-1, 0]]).unwrap();
        assert_eq!(maze.get(Cell::new(0, 1)), CellState::Wall);
        assert_eq!(maze.get(Cell::new(1, 0)), CellState::Closed);
        assert_eq!(maze.to_codes(), vec![vec![0, 1], vec![-1, 0]]);
        assert!(Maze::from_codes(&[vec![0, 1], vec![0]]).is_err());
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        // |.#.|
        let maze: Maze = ".#.\n.#.\n.#.".parse().unwrap();
        let components = maze.generate_components();
        let ix = |r, c| maze.index(Cell::new(r, c));
        assert!(components.equiv(ix(0, 0), ix(2, 0)));
        assert!(components.equiv(ix(0, 2), ix(2, 2)));
        assert!(!components.equiv(ix(0, 0), ix(2, 2)));
        assert!(!maze.solvable());
    }

    /// Diagonal contact does not connect cells on a 4-grid.
    #[test]
    fn diagonal_is_not_reachable() {
        // |.#|
        // |#.|
        let maze: Maze = ".#\n#.".parse().unwrap();
        assert!(!maze.reachable(Cell::new(0, 0), Cell::new(1, 1)));
        let open = Maze::new(2).unwrap();
        assert!(open.solvable());
    }
}
