//! # maze_search
//!
//! Generates random square mazes and solves them from the top-left to the bottom-right cell
//! with [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Euclidean or Manhattan
//! heuristic. Movement is 4-connected with uniform cost. Each search runs on its own copy of
//! the maze and marks the cells it explored, which can then be drawn with [render::Renderer].
//!
//! ```
//! use maze_search::{Algorithm, Heuristic, MazeGenerator};
//!
//! let maze = MazeGenerator::new(20, 0.3).unwrap().generate_seeded(Some(7));
//! let bfs = Algorithm::Bfs.solve(&maze, Heuristic::default());
//! let astar = Algorithm::AStar.solve(&maze, Heuristic::Manhattan);
//! assert_eq!(bfs.path_length(), astar.path_length());
//! ```
pub mod cell;
pub mod error;
pub mod generator;
pub mod maze;
pub mod parents;
pub mod path;
pub mod render;
pub mod solver;

pub use cell::{Cell, CellState};
pub use error::{MazeError, Result};
pub use generator::MazeGenerator;
pub use maze::Maze;
pub use path::Path;
pub use solver::heuristic::Heuristic;
pub use solver::{Algorithm, MazeSolver, Outcome, Solution};

/// Side length of generated mazes when none is given.
pub const DEFAULT_DIMENSION: usize = 100;
/// Probability of a cell being a wall when none is given.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;
