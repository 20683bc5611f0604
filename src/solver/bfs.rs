use std::collections::VecDeque;

use log::debug;

use crate::cell::CellState;
use crate::maze::Maze;
use crate::parents::ParentMap;
use crate::path::{reconstruct, Path};
use crate::solver::{Algorithm, MazeSolver, Outcome};

/// Breadth-first search over a FIFO queue. Stops as soon as the destination shows up among
/// the neighbours of the cell being expanded, without waiting for it to be dequeued.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl MazeSolver for BreadthFirstSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(&self, maze: &mut Maze) -> (Outcome, usize) {
        let (source, destination) = (maze.source(), maze.destination());
        if source == destination {
            maze.mark(source, CellState::OnPath);
            return (Outcome::PathFound(Path::trivial(source)), 0);
        }

        let mut parents = ParentMap::new(maze.dimension(), source);
        let mut queue = VecDeque::from([source]);
        maze.mark(source, CellState::Closed);
        let mut expanded = 0;

        while let Some(current) = queue.pop_front() {
            expanded += 1;
            maze.mark(current, CellState::Frontier);
            for neighbor in maze.traversable_neighbors(current) {
                if neighbor == destination {
                    parents.record(destination, current);
                    debug!("bfs: reached {destination} from {current}");
                    let path = reconstruct(maze, &parents, destination);
                    return (Outcome::PathFound(path), expanded);
                }
                if parents.record(neighbor, current) {
                    queue.push_back(neighbor);
                }
            }
            maze.mark(current, CellState::Closed);
        }
        (Outcome::NoPathFound, expanded)
    }
}
