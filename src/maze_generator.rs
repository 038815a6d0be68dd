//! Stepping maze generation

use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::Grid;
use crate::{Direction, Point};

/// Outcome of a single [MazeGenerator::advance] call
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Step {
    /// A wall was carved and the cursor moved to the new cell `cell`
    Forward { direction: Direction, cell: Point },
    /// The cursor retreated to `cell`.
    ///
    /// `direction` is the side of `cell` that leads to the cell just left,
    /// i.e. the forward direction of the edge that was walked back over.
    Backtrack { direction: Direction, cell: Point },
    /// Every cell has been visited and the path is back at the start
    Exhausted,
}

impl Step {
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Step::Forward { direction, .. } | Step::Backtrack { direction, .. } => Some(direction),
            Step::Exhausted => None,
        }
    }

    /// Cursor position after the step
    pub fn cell(&self) -> Option<Point> {
        match *self {
            Step::Forward { cell, .. } | Step::Backtrack { cell, .. } => Some(cell),
            Step::Exhausted => None,
        }
    }

    pub fn is_backtrack(&self) -> bool {
        matches!(self, Step::Backtrack { .. })
    }
}

/// Randomized depth-first maze generator with explicit backtracking.
///
/// Generation starts from the top left corner and proceeds one event per
/// [Self::advance] call, so that a caller can interleave steps with its
/// own work. Once exhausted, the generator stays exhausted.
pub struct MazeGenerator<R = StdRng> {
    grid: Grid,
    /// Cells from the start to the cursor, all visited
    path: Vec<Point>,
    random: R,
    /// Completion has been reported
    finished: bool,
}

impl MazeGenerator<StdRng> {
    /// Generator over a fresh `width` x `height` grid.
    ///
    /// Random source is seeded with `seed`, or from entropy if not given.
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> anyhow::Result<Self> {
        let random = if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        };
        Self::with_rng(width, height, random)
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Generator over a fresh `width` x `height` grid, choosing among
    /// candidates with `random`.
    pub fn with_rng(width: usize, height: usize, random: R) -> anyhow::Result<Self> {
        let mut grid = Grid::new(width, height)?;
        let start = Point::new(0, 0);
        grid.cell_mut(start).visited = true;
        Ok(Self {
            grid,
            path: vec![start],
            random,
            finished: false,
        })
    }

    /// Take one step of the depth-first search
    ///
    /// From the cursor, carve into a random unvisited neighbor. If there
    /// is none, retreat one cell along the path. If the path is back at the
    /// start with nothing left to visit, report [Step::Exhausted].
    pub fn advance(&mut self) -> Step {
        let current = self.cursor();

        let unvisited: Vec<(Direction, Point)> = self
            .grid
            .neighbors(current)
            .into_iter()
            .filter(|&(_, n)| self.grid.cell(n).is_some_and(|c| !c.visited))
            .collect();

        if let Some(&(direction, next)) = unvisited.choose(&mut self.random) {
            self.grid.carve(current, next, direction);
            self.grid.cell_mut(next).visited = true;
            self.path.push(next);
            debug!("Carved {} from {} to {}", direction, current, next);
            Step::Forward {
                direction,
                cell: next,
            }
        } else if self.path.len() > 1 {
            self.path.pop();
            let prev = self.path[self.path.len() - 1];
            let direction = self
                .grid
                .neighbors(prev)
                .into_iter()
                .find_map(|(d, n)| (n == current).then_some(d))
                .expect("consecutive path cells are neighbors");
            debug!("Backtracked from {} to {}", current, prev);
            Step::Backtrack {
                direction,
                cell: prev,
            }
        } else {
            if !self.finished {
                self.finished = true;
                info!("Maze generation complete");
            }
            Step::Exhausted
        }
    }

    /// Run the generator to completion.
    ///
    /// Returns the number of forward and backtracking events emitted.
    pub fn generate(&mut self) -> usize {
        self.by_ref().count()
    }
}

impl<R> MazeGenerator<R> {
    /// Grid being carved
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current depth-first path, from the start cell to the cursor
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Current cursor position
    pub fn cursor(&self) -> Point {
        self.path[self.path.len() - 1]
    }

    /// Has the generator nothing left to carve or retreat from
    pub fn is_exhausted(&self) -> bool {
        self.path.len() == 1
            && self
                .grid
                .neighbors(self.cursor())
                .into_iter()
                .all(|(_, n)| self.grid.cell(n).is_some_and(|c| c.visited))
    }
}

impl<R: Rng> Iterator for MazeGenerator<R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self.advance() {
            Step::Exhausted => None,
            step => Some(step),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;

    use crate::grid::Grid;
    use crate::maze_generator::{MazeGenerator, Step};
    use crate::{Direction, Point};

    /// Random source that always picks the first candidate
    fn first_choice() -> StepRng {
        StepRng::new(0, 0)
    }

    fn walls_are_symmetric(grid: &Grid) -> bool {
        grid.cells().all(|cell| {
            grid.neighbors(cell.position).into_iter().all(|(d, n)| {
                let other = grid.cell(n).unwrap();
                cell.walls.has(d) == other.walls.has(d.opposite())
            })
        })
    }

    fn open_passages(grid: &Grid) -> usize {
        grid.cells()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| grid.neighbor(cell.position, d).is_some() && !cell.walls.has(d))
                    .count()
            })
            .sum()
    }

    #[test]
    fn start_cell_is_visited() {
        let gen = MazeGenerator::new(3, 3, Some(0)).unwrap();
        assert_eq!(gen.path(), &[Point::new(0, 0)]);
        assert_eq!(gen.cursor(), Point::new(0, 0));
        assert!(gen.grid().cell(Point::new(0, 0)).unwrap().visited);
        assert_eq!(gen.grid().cells().filter(|c| c.visited).count(), 1);
        assert!(!gen.is_exhausted());
    }

    #[test]
    fn step_accessors() {
        let forward = Step::Forward {
            direction: Direction::Bottom,
            cell: Point::new(0, 1),
        };
        let back = Step::Backtrack {
            direction: Direction::Right,
            cell: Point::new(2, 0),
        };
        assert_eq!(forward.direction(), Some(Direction::Bottom));
        assert_eq!(forward.cell(), Some(Point::new(0, 1)));
        assert!(!forward.is_backtrack());
        assert_eq!(back.direction(), Some(Direction::Right));
        assert!(back.is_backtrack());
        assert_eq!(Step::Exhausted.direction(), None);
        assert_eq!(Step::Exhausted.cell(), None);
    }

    #[test]
    fn invalid_dimensions_fail() {
        assert!(MazeGenerator::new(0, 5, None).is_err());
        assert!(MazeGenerator::with_rng(4, 0, first_choice()).is_err());
    }

    #[test]
    fn injected_source_starts_on_blank_grid() {
        let gen = MazeGenerator::with_rng(3, 2, first_choice()).unwrap();
        assert_eq!(gen.grid().dimensions(), (3, 2));
        assert_eq!(gen.grid().cells().filter(|c| c.visited).count(), 1);
        for cell in gen.grid().cells() {
            assert!(Direction::ALL.iter().all(|&d| cell.walls.has(d)));
            assert_eq!(cell.parent, None);
        }
    }

    #[test]
    fn two_by_two_with_first_choice() {
        let mut gen = MazeGenerator::with_rng(2, 2, first_choice()).unwrap();

        let steps: Vec<Step> = gen.by_ref().collect();
        assert_eq!(
            steps,
            vec![
                Step::Forward {
                    direction: Direction::Right,
                    cell: Point::new(1, 0)
                },
                Step::Forward {
                    direction: Direction::Bottom,
                    cell: Point::new(1, 1)
                },
                Step::Forward {
                    direction: Direction::Left,
                    cell: Point::new(0, 1)
                },
                Step::Backtrack {
                    direction: Direction::Left,
                    cell: Point::new(1, 1)
                },
                Step::Backtrack {
                    direction: Direction::Bottom,
                    cell: Point::new(1, 0)
                },
                Step::Backtrack {
                    direction: Direction::Right,
                    cell: Point::new(0, 0)
                },
            ]
        );
        assert_eq!(steps.iter().filter(|s| !s.is_backtrack()).count(), 3);
        assert!(gen.is_exhausted());
        assert_eq!(gen.path().len(), 1);

        // Left wall between (0, 1) and (0, 0) was never carved
        let bottom_left = gen.grid().cell(Point::new(0, 1)).unwrap();
        assert!(bottom_left.walls.top);
        assert!(!bottom_left.walls.right);
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut gen = MazeGenerator::new(3, 2, Some(11)).unwrap();
        gen.generate();
        let walls: Vec<_> = gen.grid().cells().map(|c| c.walls).collect();

        for _ in 0..3 {
            assert_eq!(gen.advance(), Step::Exhausted);
        }
        assert_eq!(gen.next(), None);
        assert_eq!(gen.grid().cells().map(|c| c.walls).collect::<Vec<_>>(), walls);
    }

    #[test]
    fn single_cell_is_exhausted_immediately() {
        let mut gen = MazeGenerator::new(1, 1, Some(3)).unwrap();
        assert!(gen.is_exhausted());
        assert_eq!(gen.advance(), Step::Exhausted);
    }

    #[test]
    fn backtrack_reports_edge_towards_cell_left_behind() {
        let mut gen = MazeGenerator::with_rng(3, 1, first_choice()).unwrap();
        assert_eq!(gen.generate(), 4);

        let mut gen = MazeGenerator::with_rng(3, 1, first_choice()).unwrap();
        gen.advance();
        gen.advance();
        assert_eq!(
            gen.advance(),
            Step::Backtrack {
                direction: Direction::Right,
                cell: Point::new(1, 0)
            }
        );
        assert_eq!(gen.cursor(), Point::new(1, 0));
    }

    proptest! {
        #[test]
        fn completed_run_visits_every_cell(
            width in 1usize..8,
            height in 1usize..8,
            seed in any::<u64>(),
        ) {
            let mut gen = MazeGenerator::new(width, height, Some(seed)).unwrap();
            let mut forward = 0;
            let mut events = 0;

            while let Some(step) = gen.next() {
                events += 1;
                if !step.is_backtrack() {
                    forward += 1;
                }
                prop_assert!(walls_are_symmetric(gen.grid()));
                prop_assert_eq!(Some(gen.cursor()), step.cell());
            }

            let cells = width * height;
            prop_assert_eq!(gen.grid().cells().filter(|c| c.visited).count(), cells);
            prop_assert_eq!(gen.path().len(), 1);
            prop_assert_eq!(forward, cells - 1);
            prop_assert!(events < 2 * cells);
            prop_assert_eq!(open_passages(gen.grid()), cells - 1);
        }

        #[test]
        fn path_cells_are_visited(seed in any::<u64>(), steps in 0usize..40) {
            let mut gen = MazeGenerator::new(5, 4, Some(seed)).unwrap();
            for _ in 0..steps {
                gen.advance();
            }
            prop_assert!(!gen.path().is_empty());
            for &p in gen.path() {
                prop_assert!(gen.grid().cell(p).unwrap().visited);
            }
        }
    }
}
