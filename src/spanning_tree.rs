//! Parent-pointer tree over a wall-less grid, with a movable root

use log::{debug, trace};

use crate::grid::Grid;
use crate::{Direction, Point};

/// Spanning tree over a [fully connected](Grid::fully_connected) grid.
///
/// Exactly one cell, the root, has no parent. The root moves only through
/// [Self::shift].
pub struct SpanningTree {
    grid: Grid,
    root: Point,
}

impl SpanningTree {
    /// Tree over a fresh `width` x `height` grid, rooted at `(0, 0)`
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        Ok(Self {
            grid: Grid::fully_connected(width, height)?,
            root: Point::new(0, 0),
        })
    }

    /// Move the root one cell towards `direction`
    ///
    /// Only the pointers around the move are patched: the old root's former
    /// parent (if any) is pointed back at the old root, the new root loses
    /// its parent, and the old root becomes its child. The rest of the tree
    /// is left as it was, so cells further away may still point along the
    /// old chain.
    ///
    /// If there is no cell in `direction`, nothing changes. Returns the root
    /// after the move.
    pub fn shift(&mut self, direction: Direction) -> Point {
        let current = self.root;
        let Some(neighbor) = self.grid.neighbor(current, direction) else {
            trace!("Root {} cannot shift {}", current, direction);
            return current;
        };

        if let Some(old_parent) = self.parent(current) {
            self.grid.cell_mut(old_parent).parent = Some(current);
        }
        self.grid.cell_mut(neighbor).parent = None;
        self.grid.cell_mut(current).parent = Some(neighbor);
        self.root = neighbor;

        debug!("Shifted root {} from {} to {}", direction, current, neighbor);
        neighbor
    }

    pub fn root(&self) -> Point {
        self.root
    }

    /// Parent of the cell at `point`
    pub fn parent(&self, point: Point) -> Option<Point> {
        self.grid.cell(point).and_then(|cell| cell.parent)
    }

    /// Cells whose parent is `point`, row by row
    pub fn children(&self, point: Point) -> Vec<Point> {
        self.grid
            .cells()
            .filter(|cell| cell.parent == Some(point))
            .map(|cell| cell.position)
            .collect()
    }

    /// Cells without a parent
    pub fn parentless(&self) -> Vec<Point> {
        self.grid
            .cells()
            .filter(|cell| cell.parent.is_none())
            .map(|cell| cell.position)
            .collect()
    }

    /// Follow parent links from `point` to a parentless cell.
    ///
    /// Returns the visited cells, `point` first, or `None` if `point` is
    /// outside the grid or the links do not end within one hop per cell.
    pub fn path_to_root(&self, point: Point) -> Option<Vec<Point>> {
        let (width, height) = self.grid.dimensions();
        let mut path = vec![point];
        let mut here = self.grid.cell(point)?;
        for _ in 0..width * height {
            match here.parent {
                None => return Some(path),
                Some(parent) => {
                    path.push(parent);
                    here = self.grid.cell(parent)?;
                }
            }
        }
        None
    }

    /// Underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
