//! The three search strategies. Every solver works on a private copy of the maze it is
//! given, searches from [Maze::source] to [Maze::destination] and returns the annotated copy
//! together with the [Outcome].
use core::fmt;
use std::str::FromStr;

use log::{info, warn};

use crate::error::MazeError;
use crate::maze::Maze;
use crate::path::Path;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod heuristic;

use astar::AstarSolver;
use bfs::BreadthFirstSolver;
use dfs::DepthFirstSolver;
use heuristic::Heuristic;

/// Terminal result of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    PathFound(Path),
    NoPathFound,
}

/// Everything a search leaves behind: the outcome, the maze with explored and path cells
/// marked, and the number of cells that were expanded.
#[derive(Clone, Debug)]
pub struct Solution {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub maze: Maze,
    pub expanded: usize,
}

impl Solution {
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            Outcome::PathFound(path) => Some(path),
            Outcome::NoPathFound => None,
        }
    }

    pub fn path_length(&self) -> Option<usize> {
        self.path().map(Path::len)
    }

    pub fn is_found(&self) -> bool {
        self.path().is_some()
    }

    /// The classic return code: 1 if a path was found, 0 otherwise.
    pub fn code(&self) -> u8 {
        self.is_found() as u8
    }
}

pub trait MazeSolver {
    fn algorithm(&self) -> Algorithm;

    /// Searches `maze` on a copy; the argument is never modified.
    fn solve(&self, maze: &Maze) -> Solution {
        let mut working = maze.clone();
        let (outcome, expanded) = self.search(&mut working);
        match &outcome {
            Outcome::PathFound(path) => {
                info!("{}: path found, length {}", self.algorithm(), path.len())
            }
            Outcome::NoPathFound => warn!("{}: no path found", self.algorithm()),
        }
        info!("{}: expanded {expanded} cells", self.algorithm());
        Solution {
            algorithm: self.algorithm(),
            outcome,
            maze: working,
            expanded,
        }
    }

    /// Runs the search directly on `maze`, returning the outcome and the number of expanded
    /// cells.
    fn search(&self, maze: &mut Maze) -> (Outcome, usize);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar => "a-star",
        }
    }

    /// The solver for this algorithm. `heuristic` is only used by A*.
    pub fn solver(self, heuristic: Heuristic) -> Box<dyn MazeSolver> {
        match self {
            Algorithm::Bfs => Box::new(BreadthFirstSolver),
            Algorithm::Dfs => Box::new(DepthFirstSolver),
            Algorithm::AStar => Box::new(AstarSolver::new(heuristic)),
        }
    }

    pub fn solve(self, maze: &Maze, heuristic: Heuristic) -> Solution {
        self.solver(heuristic).solve(maze)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| MazeError::InvalidAlgorithm(s.to_owned()))
    }
}
