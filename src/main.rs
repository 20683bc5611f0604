//! Generates a random maze, solves it with the selected algorithm and draws the result.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use maze_search::render::{RenderConfig, Renderer};
use maze_search::{
    Algorithm, Heuristic, MazeGenerator, Outcome, DEFAULT_DIMENSION, DEFAULT_WALL_PROBABILITY,
};

/// Random maze solver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Search algorithm: bfs, dfs or a-star
    algorithm: String,

    /// Side length of the maze
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,

    /// Probability of each cell being a wall
    #[arg(short, long, default_value_t = DEFAULT_WALL_PROBABILITY)]
    probability: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// A* heuristic: euclid or manhattan
    #[arg(long, default_value = "euclid")]
    heuristic: String,

    /// Directory the image is written to
    #[arg(short, long, default_value = "figures")]
    output_dir: PathBuf,

    /// Side length of one cell in pixels
    #[arg(long, default_value_t = 8)]
    cell_size: u32,

    /// Skip writing the image
    #[arg(long)]
    no_display: bool,

    /// Print the solved maze as text
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let algorithm: Algorithm = args.algorithm.parse()?;
    let heuristic: Heuristic = args.heuristic.parse()?;

    let maze = MazeGenerator::new(args.dimension, args.probability)?.generate_seeded(args.seed);
    if maze.solvable() {
        info!("Destination is reachable from the source");
    } else {
        warn!("Destination is not reachable from the source");
    }

    let solution = algorithm.solve(&maze, heuristic);
    match &solution.outcome {
        Outcome::PathFound(path) => println!("Path length : {}", path.len()),
        Outcome::NoPathFound => println!("No path found :("),
    }
    if args.print {
        print!("{}", solution.maze);
    }
    if !args.no_display {
        let renderer = Renderer::new(RenderConfig {
            output_dir: args.output_dir,
            cell_size: args.cell_size,
            ..RenderConfig::default()
        });
        renderer.render(&solution.maze, algorithm.name(), solution.path_length())?;
    }
    Ok(())
}
