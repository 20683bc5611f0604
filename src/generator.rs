use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellState;
use crate::error::{MazeError, Result};
use crate::maze::Maze;

/// Generates square mazes in which every cell is independently a wall with probability
/// `probability`. Source and destination are always open; connectivity is not checked, so
/// the result may be unsolvable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeGenerator {
    dimension: usize,
    probability: f64,
}

impl MazeGenerator {
    pub fn new(dimension: usize, probability: f64) -> Result<MazeGenerator> {
        if dimension == 0 {
            return Err(MazeError::InvalidDimension(dimension));
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(MazeError::InvalidProbability(probability));
        }
        Ok(MazeGenerator {
            dimension,
            probability,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Maze {
        let mut maze = Maze {
            dimension: self.dimension,
            cells: (0..self.dimension * self.dimension)
                .map(|_| {
                    if rng.gen_bool(self.probability) {
                        CellState::Wall
                    } else {
                        CellState::Open
                    }
                })
                .collect(),
        };
        let (source, destination) = (maze.source(), maze.destination());
        maze.set(source, CellState::Open);
        maze.set(destination, CellState::Open);
        maze
    }

    /// Generates from a [StdRng] seeded with `seed`, or from entropy if no seed is given.
    pub fn generate_seeded(&self, seed: Option<u64>) -> Maze {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let maze = self.generate(&mut rng);
        info!(
            "Generated {0}x{0} maze with {1} walls (p = {2}, seed = {3:?})",
            self.dimension,
            maze.count(CellState::Wall),
            self.probability,
            seed
        );
        maze
    }
}
