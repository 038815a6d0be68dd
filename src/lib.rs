//! Grow a maze with randomized depth-first search, and drag the root of a
//! spanning tree along with the search cursor
//!
//! Two grids are kept side by side. The maze grid starts fully walled and is
//! carved one step at a time by [MazeGenerator]. The tree grid starts without
//! internal walls, with every cell pointing to a parent so that the cells form
//! a spanning tree rooted at the top left corner. Every move of the maze
//! cursor is replayed as a [root shift](SpanningTree::shift) on the tree.
//!
//! # Examples
//! ## Stepping through the generation
//! ```
//! use maze_shift::{Orchestrator, StepOutcome};
//!
//! let mut orchestrator = Orchestrator::new(4, 3, Some(7)).unwrap();
//! while let StepOutcome::Advanced { cursor, root, .. } = orchestrator.step() {
//!     // The tree root follows the maze cursor around
//!     assert_eq!(cursor, root);
//! }
//! assert!(orchestrator.is_complete());
//! assert!(orchestrator.maze().cells().all(|cell| cell.visited));
//! ```
//!
//! ## Shifting the root by hand
//! ```
//! use maze_shift::{Direction, Point, SpanningTree};
//!
//! let mut tree = SpanningTree::new(4, 1).unwrap();
//! assert_eq!(tree.shift(Direction::Right), Point::new(1, 0));
//! assert_eq!(tree.parent(Point::new(0, 0)), Some(Point::new(1, 0)));
//! assert_eq!(tree.parent(Point::new(1, 0)), None);
//!
//! // Back in the corner, shifting further left is a no-op
//! assert_eq!(tree.shift(Direction::Left), Point::new(0, 0));
//! assert_eq!(tree.shift(Direction::Left), Point::new(0, 0));
//! ```

use std::fmt;

pub mod config;
pub mod grid;
pub mod maze_generator;
pub mod orchestrator;
pub mod render;
pub mod spanning_tree;

pub use config::DisplayConfig;
pub use grid::{Cell, Grid, Walls};
pub use maze_generator::{MazeGenerator, Step};
pub use orchestrator::{Orchestrator, StepOutcome};
pub use spanning_tree::SpanningTree;

/// Location of a cell in a grid
///
/// `x` grows to the right, `y` grows downwards.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side of a cell
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Neighbor enumeration order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// The side facing this one across a shared wall
    ///
    /// A backtracking step reports the edge it walks back over in the
    /// forward direction; the opposite side is where the cursor actually
    /// moves.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Step from `point` one cell into this direction, if that stays
    /// inside a `width` x `height` grid.
    pub fn step(self, point: Point, width: usize, height: usize) -> Option<Point> {
        let Point { x, y } = point;
        match self {
            Direction::Left if x > 0 => Some(Point::new(x - 1, y)),
            Direction::Right if x + 1 < width => Some(Point::new(x + 1, y)),
            Direction::Top if y > 0 => Some(Point::new(x, y - 1)),
            Direction::Bottom if y + 1 < height => Some(Point::new(x, y + 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}
