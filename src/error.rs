//! Error types for maze generation, algorithm selection and rendering.
//!
//! Failing to find a path is not an error: it is reported as
//! [Outcome::NoPathFound](crate::solver::Outcome::NoPathFound).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("invalid search algorithm '{0}', choose between 'bfs', 'dfs', or 'a-star'")]
    InvalidAlgorithm(String),

    #[error("invalid heuristic '{0}', choose between 'euclid' or 'manhattan'")]
    InvalidHeuristic(String),

    #[error("maze dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    #[error("wall probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("could not parse maze: {0}")]
    Parse(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "image of a {dimension}x{dimension} maze with {cell_size} px cells and a margin of \
         {margin} cells is too large"
    )]
    ImageTooLarge {
        dimension: usize,
        cell_size: u32,
        margin: u32,
    },

    #[error("could not encode image: {0}")]
    Png(#[from] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, MazeError>;
