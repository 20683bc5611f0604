use core::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::MazeError;

/// Distance-to-goal estimate used to order the A* frontier. Both variants are admissible and
/// consistent on a 4-connected unit-cost grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
}

impl Heuristic {
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Euclidean => "euclid",
            Heuristic::Manhattan => "manhattan",
        }
    }

    pub fn distance(self, from: &Cell, goal: &Cell) -> f64 {
        match self {
            Heuristic::Euclidean => from.euclidean_distance(goal),
            Heuristic::Manhattan => from.manhattan_distance(goal) as f64,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclid" | "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            other => Err(MazeError::InvalidHeuristic(other.to_owned())),
        }
    }
}

/// Heuristic values for every cell of a maze, computed once before a search starts.
#[derive(Clone, Debug)]
pub struct HeuristicGrid {
    dimension: usize,
    values: Vec<f64>,
}

impl HeuristicGrid {
    pub fn new(heuristic: Heuristic, dimension: usize, goal: Cell) -> HeuristicGrid {
        let values = (0..dimension)
            .flat_map(|row| (0..dimension).map(move |col| Cell::new(row, col)))
            .map(|cell| heuristic.distance(&cell, &goal))
            .collect();
        HeuristicGrid { dimension, values }
    }

    pub fn get(&self, cell: Cell) -> f64 {
        self.values[cell.row * self.dimension + cell.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_has_zero_estimate() {
        let goal = Cell::new(4, 4);
        for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
            let grid = HeuristicGrid::new(heuristic, 5, goal);
            assert_eq!(grid.get(goal), 0.0);
        }
    }

    #[test]
    fn precomputed_values() {
        let goal = Cell::new(4, 4);
        let manhattan = HeuristicGrid::new(Heuristic::Manhattan, 5, goal);
        let euclid = HeuristicGrid::new(Heuristic::Euclidean, 5, goal);
        assert_eq!(manhattan.get(Cell::new(0, 0)), 8.0);
        assert_eq!(manhattan.get(Cell::new(4, 1)), 3.0);
        assert!((euclid.get(Cell::new(0, 0)) - 32f64.sqrt()).abs() < 1e-12);
        assert!((euclid.get(Cell::new(1, 0)) - 5.0).abs() < 1e-12);
    }

    /// Neighbouring estimates never differ by more than the unit step cost.
    #[test]
    fn consistent_on_unit_grid() {
        let goal = Cell::new(7, 7);
        for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
            let grid = HeuristicGrid::new(heuristic, 8, goal);
            for row in 0..8 {
                for col in 0..7 {
                    let a = grid.get(Cell::new(row, col));
                    let b = grid.get(Cell::new(row, col + 1));
                    let c = grid.get(Cell::new(col, row));
                    let d = grid.get(Cell::new(col + 1, row));
                    assert!((a - b).abs() <= 1.0 + 1e-9);
                    assert!((c - d).abs() <= 1.0 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("euclid".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
        assert_eq!("manhattan".parse::<Heuristic>().unwrap(), Heuristic::Manhattan);
        assert!("chebyshev".parse::<Heuristic>().is_err());
    }
}
