//! Rectangular cell storage shared by the maze and the spanning tree

use anyhow::bail;

use crate::{Direction, Point};

/// Wall flags of a single cell, `true` when the wall is standing
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    const ALL: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Is the wall on `side` standing
    pub fn has(&self, side: Direction) -> bool {
        match side {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    fn clear(&mut self, side: Direction) {
        match side {
            Direction::Top => self.top = false,
            Direction::Right => self.right = false,
            Direction::Bottom => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

/// One grid position
#[derive(Clone, Debug)]
pub struct Cell {
    pub position: Point,
    pub walls: Walls,
    /// Reached by the maze generator. Unused on the tree grid.
    pub visited: bool,
    /// Handle of the parent cell in the same grid. Unused on the maze grid.
    pub parent: Option<Point>,
}

impl Cell {
    fn new(position: Point) -> Self {
        Self {
            position,
            walls: Walls::ALL,
            visited: false,
            parent: None,
        }
    }
}

/// Fixed-size rectangular grid of cells, stored row by row
///
/// Cells refer to each other by [Point], which doubles as the index into
/// the grid's own storage.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell has all four walls, is unvisited, and
    /// has no parent.
    ///
    /// Returns error, if either dimension is zero or the cell count does not
    /// fit in `usize`.
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            bail!("Grid dimensions must be positive, got {}x{}", width, height);
        }
        if width.checked_mul(height).is_none() {
            bail!("Grid of {}x{} cells is too large", width, height);
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Point::new(x, y))))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid without any internal walls, where the cells form a
    /// spanning tree rooted at `(0, 0)`.
    ///
    /// Every cell off the first column points to its left neighbor; cells
    /// in the first column point to the cell above.
    pub fn fully_connected(width: usize, height: usize) -> anyhow::Result<Self> {
        let mut grid = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let here = Point::new(x, y);
                if x + 1 < width {
                    grid.carve(here, Point::new(x + 1, y), Direction::Right);
                }
                if y + 1 < height {
                    grid.carve(here, Point::new(x, y + 1), Direction::Bottom);
                }
                grid.cell_mut(here).parent = if x > 0 {
                    Some(Point::new(x - 1, y))
                } else if y > 0 {
                    Some(Point::new(x, y - 1))
                } else {
                    None
                };
            }
        }
        Ok(grid)
    }

    /// Grid size as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Cell at `point`, if it lies inside the grid
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        if self.contains(point) {
            Some(&self.cells[self.index_of(point)])
        } else {
            None
        }
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bound neighbors of `point`, in the order left, right, top, bottom
    pub fn neighbors(&self, point: Point) -> Vec<(Direction, Point)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbor(point, d).map(|n| (d, n)))
            .collect()
    }

    /// Neighbor of `point` on `side`, if it lies inside the grid
    pub fn neighbor(&self, point: Point, side: Direction) -> Option<Point> {
        side.step(point, self.width, self.height)
    }

    /// Open the passage between `a` and its neighbor `b` on `side` of `a`.
    ///
    /// # Panics
    /// If `b` is not the neighbor of `a` on `side`.
    pub(crate) fn carve(&mut self, a: Point, b: Point, side: Direction) {
        assert_eq!(
            self.neighbor(a, side),
            Some(b),
            "{} is not the {} neighbor of {}",
            b,
            side,
            a
        );
        self.cell_mut(a).walls.clear(side);
        self.cell_mut(b).walls.clear(side.opposite());
    }

    pub(crate) fn cell_mut(&mut self, point: Point) -> &mut Cell {
        assert!(self.contains(point), "{} is outside the grid", point);
        let index = self.index_of(point);
        &mut self.cells[index]
    }

    #[inline]
    fn index_of(&self, point: Point) -> usize {
        self.width * point.y + point.x
    }
}
