//! Replaying maze cursor moves on the spanning tree

use anyhow::bail;
use log::debug;
use rand::{rngs::StdRng, Rng};

use crate::grid::Grid;
use crate::maze_generator::{MazeGenerator, Step};
use crate::spanning_tree::SpanningTree;
use crate::{DisplayConfig, Point};

/// Result of [Orchestrator::step]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StepOutcome {
    /// Maze generator took `step`; `cursor` is the maze cursor after it and
    /// `root` the tree root after the matching shift.
    Advanced {
        step: Step,
        cursor: Point,
        root: Point,
    },
    /// Maze generation is complete, nothing was changed
    Complete,
}

/// Drives a [MazeGenerator] and feeds every move into a [SpanningTree].
///
/// The two grids stay separate; only the direction of each move crosses
/// over.
pub struct Orchestrator<R = StdRng> {
    generator: MazeGenerator<R>,
    tree: SpanningTree,
    /// Latest maze cursor reported by the generator
    cursor: Option<Point>,
    steps: usize,
}

impl Orchestrator<StdRng> {
    /// Maze and tree of `width` x `height` cells each
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> anyhow::Result<Self> {
        Self::with_parts(
            MazeGenerator::new(width, height, seed)?,
            SpanningTree::new(width, height)?,
        )
    }

    /// Maze and tree sized to fit the display
    pub fn from_config(config: &DisplayConfig, seed: Option<u64>) -> anyhow::Result<Self> {
        let (width, height) = config.grid_dimensions()?;
        Self::new(width, height, seed)
    }
}

impl<R: Rng> Orchestrator<R> {
    /// Drive `generator` and `tree`, which must be of the same size
    pub fn with_parts(generator: MazeGenerator<R>, tree: SpanningTree) -> anyhow::Result<Self> {
        let maze_dims = generator.grid().dimensions();
        let tree_dims = tree.grid().dimensions();
        if maze_dims != tree_dims {
            bail!(
                "Maze of {:?} cells cannot drive a tree of {:?} cells",
                maze_dims,
                tree_dims
            );
        }
        Ok(Self {
            generator,
            tree,
            cursor: None,
            steps: 0,
        })
    }

    /// Advance the maze by one event and shift the tree root accordingly.
    ///
    /// Backtracking events report the edge walked back over in its forward
    /// direction, so the root is shifted the opposite way. Safe to call
    /// after completion, which is reported every time.
    pub fn step(&mut self) -> StepOutcome {
        let step = self.generator.advance();
        let (Some(direction), Some(cursor)) = (step.direction(), step.cell()) else {
            return StepOutcome::Complete;
        };
        let direction = if step.is_backtrack() {
            direction.opposite()
        } else {
            direction
        };

        let root = self.tree.shift(direction);
        self.cursor = Some(cursor);
        self.steps += 1;
        debug!("Step {}: cursor at {}, root at {}", self.steps, cursor, root);

        StepOutcome::Advanced { step, cursor, root }
    }

    /// Step until the maze is complete. Returns the number of steps taken.
    pub fn run(&mut self) -> usize {
        let mut taken = 0;
        while let StepOutcome::Advanced { .. } = self.step() {
            taken += 1;
        }
        taken
    }
}

impl<R> Orchestrator<R> {
    /// Latest maze cursor, `None` before the first step
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn root(&self) -> Point {
        self.tree.root()
    }

    /// Number of steps that advanced the maze
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn is_complete(&self) -> bool {
        self.generator.is_exhausted()
    }

    /// Maze grid, as carved so far
    pub fn maze(&self) -> &Grid {
        self.generator.grid()
    }

    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }
}
