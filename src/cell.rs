use core::fmt;

use crate::error::MazeError;

/// Offsets in (row, col) order: right, left, down, up. The order is fixed since it decides
/// tie-breaking in depth-first and A* search.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A position in the maze addressed by row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// Shifts the cell by the given offset. Returns [None] if either coordinate would become
    /// negative; the upper bound is checked by the maze.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let d_row = self.row.abs_diff(other.row) as f64;
        let d_col = self.col.abs_diff(other.col) as f64;
        d_row.hypot(d_col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single maze cell. Walls are fixed at generation time; the other states are
/// written by a search on its private copy of the maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Open,
    Wall,
    /// Fully processed by the running search, never entered again.
    Closed,
    /// Currently being expanded.
    Frontier,
    /// Part of the reported path.
    OnPath,
}

impl CellState {
    /// Integer code of the classic array representation. [CellState::Frontier] and
    /// [CellState::OnPath] share `-2` there.
    pub fn code(self) -> i8 {
        match self {
            CellState::Open => 0,
            CellState::Wall => 1,
            CellState::Closed => -1,
            CellState::Frontier | CellState::OnPath => -2,
        }
    }

    pub fn is_traversable(self) -> bool {
        !matches!(self, CellState::Wall | CellState::Closed)
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            CellState::Open => '.',
            CellState::Wall => '#',
            CellState::Closed => 'x',
            CellState::Frontier => 'o',
            CellState::OnPath => '*',
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol {
            '.' => Some(CellState::Open),
            '#' => Some(CellState::Wall),
            'x' => Some(CellState::Closed),
            'o' => Some(CellState::Frontier),
            '*' => Some(CellState::OnPath),
            _ => None,
        }
    }
}

impl TryFrom<i8> for CellState {
    type Error = MazeError;

    /// `-2` decodes as [CellState::Frontier].
    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellState::Open),
            1 => Ok(CellState::Wall),
            -1 => Ok(CellState::Closed),
            -2 => Ok(CellState::Frontier),
            other => Err(MazeError::Parse(format!("unknown cell code {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_zero() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(1, 0), Some(Cell::new(1, 0)));
    }

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn codes_round_trip_except_path() {
        for state in [
            CellState::Open,
            CellState::Wall,
            CellState::Closed,
            CellState::Frontier,
        ] {
            assert_eq!(CellState::try_from(state.code()).unwrap(), state);
        }
        assert_eq!(CellState::OnPath.code(), -2);
        assert!(CellState::try_from(5).is_err());
    }

    #[test]
    fn walls_and_closed_block_movement() {
        assert!(CellState::Open.is_traversable());
        assert!(CellState::Frontier.is_traversable());
        assert!(!CellState::Wall.is_traversable());
        assert!(!CellState::Closed.is_traversable());
    }
}
