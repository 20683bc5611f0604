use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::cell::{Cell, CellState};
use crate::maze::Maze;
use crate::parents::ParentMap;
use crate::path::{reconstruct, Path};
use crate::solver::heuristic::{Heuristic, HeuristicGrid};
use crate::solver::{Algorithm, MazeSolver, Outcome};

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: usize,
    /// Insertion counter, breaks ties between equal estimates.
    index: usize,
    cell: Cell,
    parent: Option<Cell>,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: lowest estimate first, then earliest insertion
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// A* search ordered by `h(cell) + g(cell)`, where `g` counts steps from the source and `h`
/// is precomputed for the whole maze. The search stops when the destination is popped.
///
/// A cell receives its parent when it is first popped; later heap entries for the same cell
/// are stale and skipped. With a consistent heuristic the first pop carries the smallest
/// step count, so the reported path is as short as the one found by breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }
}

impl MazeSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(&self, maze: &mut Maze) -> (Outcome, usize) {
        let (source, destination) = (maze.source(), maze.destination());
        if source == destination {
            maze.mark(source, CellState::OnPath);
            return (Outcome::PathFound(Path::trivial(source)), 0);
        }

        let heuristic = HeuristicGrid::new(self.heuristic, maze.dimension(), destination);
        let mut parents = ParentMap::new(maze.dimension(), source);
        let mut to_see = BinaryHeap::new();
        let mut index = 0;
        to_see.push(SmallestCostHolder {
            estimated_cost: heuristic.get(source),
            cost: 0,
            index,
            cell: source,
            parent: None,
        });
        maze.mark(source, CellState::Closed);
        let mut expanded = 0;

        while let Some(SmallestCostHolder {
            cost, cell, parent, ..
        }) = to_see.pop()
        {
            if let Some(parent) = parent {
                if !parents.record(cell, parent) {
                    continue;
                }
            }
            expanded += 1;
            maze.mark(cell, CellState::Frontier);
            if cell == destination {
                debug!("a-star ({}): reached {destination} at cost {cost}", self.heuristic);
                let path = reconstruct(maze, &parents, destination);
                return (Outcome::PathFound(path), expanded);
            }
            for neighbor in maze.traversable_neighbors(cell) {
                if parents.is_assigned(neighbor) {
                    continue;
                }
                index += 1;
                to_see.push(SmallestCostHolder {
                    estimated_cost: heuristic.get(neighbor) + (cost + 1) as f64,
                    cost: cost + 1,
                    index,
                    cell: neighbor,
                    parent: Some(cell),
                });
            }
            maze.mark(cell, CellState::Closed);
        }
        (Outcome::NoPathFound, expanded)
    }
}
