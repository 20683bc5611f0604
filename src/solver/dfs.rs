use log::debug;

use crate::cell::{Cell, CellState};
use crate::maze::Maze;
use crate::path::Path;
use crate::solver::{Algorithm, MazeSolver, Outcome};

/// Depth-first search over a LIFO stack. Instead of a parent map it keeps the list of cells
/// visited so far, dropping a cell again when it turns out to be a dead end; that list plus
/// the destination is the reported path. Neighbours are pushed without a visited check, so a
/// cell may sit on the stack more than once.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl MazeSolver for DepthFirstSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search(&self, maze: &mut Maze) -> (Outcome, usize) {
        let (source, destination) = (maze.source(), maze.destination());
        if source == destination {
            maze.mark(source, CellState::OnPath);
            return (Outcome::PathFound(Path::trivial(source)), 0);
        }

        let mut stack = vec![source];
        let mut visited: Vec<Cell> = Vec::new();
        maze.mark(source, CellState::Closed);
        let mut expanded = 0;

        while let Some(current) = stack.pop() {
            expanded += 1;
            visited.push(current);
            maze.mark(current, CellState::Frontier);
            let neighbors = maze.traversable_neighbors(current);
            if neighbors.is_empty() {
                visited.pop();
            }
            for neighbor in neighbors {
                if neighbor == destination {
                    debug!("dfs: reached {destination} from {current}");
                    visited.push(destination);
                    for &cell in &visited {
                        maze.mark(cell, CellState::OnPath);
                    }
                    let length = visited.len();
                    return (Outcome::PathFound(Path::new(visited, length)), expanded);
                }
                stack.push(neighbor);
            }
            maze.mark(current, CellState::Closed);
        }
        (Outcome::NoPathFound, expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// On an open grid the right-first ordering makes the search dive down the left column
    /// before turning right along the bottom row.
    #[test]
    fn open_grid_follows_neighbor_order() {
        let maze = Maze::new(3).unwrap();
        let solution = DepthFirstSolver.solve(&maze);
        let path = solution.path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(
            path.cells(),
            &[
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
    }

    /// Only the dead-end leaf is dropped; the cell leading into the dead end stays in the
    /// reported path, which therefore need not be contiguous.
    #[test]
    fn dead_ends_are_dropped_from_the_path() {
        // |...|
        // |.#.|
        // |.#.|
        let maze: Maze = "...\n.#.\n.#.".parse().unwrap();
        let solution = DepthFirstSolver.solve(&maze);
        let path = solution.path().unwrap();
        assert_eq!(path.len(), 6);
        assert!(!path.cells().contains(&Cell::new(2, 0)));
        assert!(path.cells().contains(&Cell::new(1, 0)));
        assert!(!path.is_contiguous());
        assert_eq!(solution.maze.get(Cell::new(2, 0)), CellState::Closed);
    }

    #[test]
    fn walled_off_destination() {
        // |...|
        // |..#|
        // |.#.|
        let maze: Maze = "...\n..#\n.#.".parse().unwrap();
        let solution = DepthFirstSolver.solve(&maze);
        assert_eq!(solution.outcome, Outcome::NoPathFound);
        assert_eq!(solution.maze.count(CellState::OnPath), 0);
        assert_eq!(solution.maze.count(CellState::Open), 1);
    }
}
