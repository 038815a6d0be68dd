//! CLI for maze generation

use clap::Parser;
use maze_shift::{render, MazeGenerator};

/// Generate a complete maze with randomized depth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze width in cells
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Generated maze height in cells
    #[arg(long, default_value_t = 30)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.width, args.height, args.seed)?;
    gen.generate();
    println!("{}", render::maze(gen.grid(), None));
    Ok(())
}
