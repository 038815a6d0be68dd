//! CLI for stepping through maze generation

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use clap::Parser;
use maze_shift::{render, DisplayConfig, Orchestrator, StepOutcome};

/// Grow a maze one step at a time while shifting the root of a spanning tree
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Display width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Display height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Cell size in pixels
    #[arg(long, default_value_t = 20)]
    cell_size: usize,

    /// Number of grid columns, instead of fitting the display
    #[arg(long)]
    columns: Option<usize>,

    /// Number of grid rows, instead of fitting the display
    #[arg(long)]
    rows: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many steps
    #[arg(long)]
    steps: Option<usize>,

    /// Display every step on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Step on every Enter press; `m` switches to playback, `q` quits
    #[arg(short, long, conflicts_with = "playback")]
    interactive: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 100)]
    frame_length: u64,
}

/// One line of interactive input
#[derive(PartialEq, Debug)]
enum Command {
    Step,
    AutoIterate,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" => Some(Command::Step),
            "m" | "M" => Some(Command::AutoIterate),
            "q" | "Q" => Some(Command::Quit),
            _ => None,
        }
    }
}

fn draw(orchestrator: &Orchestrator) -> String {
    render::side_by_side(
        &render::tree(orchestrator.tree()),
        &render::maze(orchestrator.maze(), orchestrator.cursor()),
    )
}

fn show(orchestrator: &Orchestrator) {
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", draw(orchestrator));
}

/// Step the generation, print the tree and the maze
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = DisplayConfig {
        width: args.width,
        height: args.height,
        cell_size: args.cell_size,
    };
    let (columns, rows) = match (args.columns, args.rows) {
        (Some(columns), Some(rows)) => (columns, rows),
        (columns, rows) => {
            let (fit_columns, fit_rows) = config.grid_dimensions()?;
            (columns.unwrap_or(fit_columns), rows.unwrap_or(fit_rows))
        }
    };
    let mut orchestrator = Orchestrator::new(columns, rows, args.seed)?;

    let stdin = io::stdin();
    let mut auto_iterate = args.playback;
    if args.interactive {
        show(&orchestrator);
    }

    while args.steps.map_or(true, |limit| orchestrator.steps_taken() < limit) {
        if args.interactive && !auto_iterate {
            println!("[Enter] step, [m] auto-iterate, [q] quit");
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            match Command::parse(&line) {
                Some(Command::Step) => (),
                Some(Command::AutoIterate) => auto_iterate = true,
                Some(Command::Quit) => break,
                None => continue,
            }
        }
        if let StepOutcome::Complete = orchestrator.step() {
            println!("Maze generation complete");
            break;
        }
        if args.interactive || auto_iterate {
            show(&orchestrator);
        }
        if auto_iterate {
            thread::sleep(Duration::from_millis(args.frame_length));
        }
    }

    if !args.playback && !args.interactive {
        println!("{}", draw(&orchestrator));
    }
    println!(
        "Took {} steps, cursor at {}, root at {}.",
        orchestrator.steps_taken(),
        orchestrator
            .cursor()
            .map_or_else(|| "start".to_string(), |p| p.to_string()),
        orchestrator.root()
    );
    Ok(())
}
