//! Text drawing of the maze and the tree
//!
//! Read-only views for terminal output; nothing here mutates a grid.

use itertools::{EitherOrBoth, Itertools};

use crate::grid::Grid;
use crate::spanning_tree::SpanningTree;
use crate::{Direction, Point};

const S_CURSOR: &str = "@@";
const S_VISITED: &str = "  ";
const S_UNVISITED: &str = "..";
const S_ROOT: char = '●';
const S_DETACHED: char = '·';

/// Draw the walls of `grid`, marking unvisited cells and the cursor
///
/// # Examples
/// ```
/// use maze_shift::{render, Grid, Point};
///
/// let grid = Grid::new(2, 1).unwrap();
/// assert_eq!(
///     render::maze(&grid, Some(Point::new(0, 0))),
///     "+--+--+\n|@@|..|\n+--+--+"
/// );
/// ```
pub fn maze(grid: &Grid, cursor: Option<Point>) -> String {
    let (width, height) = grid.dimensions();
    let mut lines = Vec::with_capacity(2 * height + 1);

    for y in 0..height {
        let row = (0..width)
            .filter_map(|x| grid.cell(Point::new(x, y)))
            .collect_vec();

        lines.push(format!(
            "+{}",
            row.iter()
                .map(|c| if c.walls.top { "--+" } else { "  +" })
                .join("")
        ));

        let left = if row[0].walls.left { '|' } else { ' ' };
        let body = row
            .iter()
            .map(|c| {
                let fill = if Some(c.position) == cursor {
                    S_CURSOR
                } else if c.visited {
                    S_VISITED
                } else {
                    S_UNVISITED
                };
                let right = if c.walls.right { '|' } else { ' ' };
                format!("{}{}", fill, right)
            })
            .join("");
        lines.push(format!("{}{}", left, body));
    }

    let bottom = (0..width)
        .filter_map(|x| grid.cell(Point::new(x, height - 1)))
        .map(|c| if c.walls.bottom { "--+" } else { "  +" })
        .join("");
    lines.push(format!("+{}", bottom));

    lines.join("\n")
}

/// Draw every cell of `tree` as an arrow towards its parent, the root as a
/// dot.
///
/// The drawing is filled from the root down through the children, so cells
/// that cannot reach the root are drawn as `·`.
///
/// # Examples
/// ```
/// use maze_shift::{render, Direction, SpanningTree};
///
/// let mut tree = SpanningTree::new(3, 2).unwrap();
/// tree.shift(Direction::Right);
/// assert_eq!(render::tree(&tree), "→ ● ←\n↑ ← ←");
/// ```
pub fn tree(tree: &SpanningTree) -> String {
    let grid = tree.grid();
    let (width, height) = grid.dimensions();
    let mut symbols = vec![S_DETACHED; width * height];

    let root = tree.root();
    symbols[width * root.y + root.x] = S_ROOT;
    let mut pending = tree.children(root);
    while let Some(node) = pending.pop() {
        let symbol = &mut symbols[width * node.y + node.x];
        if *symbol != S_DETACHED {
            continue;
        }
        if let Some(parent) = tree.parent(node) {
            *symbol = arrow(grid, node, parent);
        }
        pending.extend(tree.children(node));
    }

    symbols
        .chunks(width)
        .map(|row| row.iter().join(" "))
        .join("\n")
}

fn arrow(grid: &Grid, from: Point, to: Point) -> char {
    let side = grid
        .neighbors(from)
        .into_iter()
        .find_map(|(d, n)| (n == to).then_some(d));
    match side {
        Some(Direction::Top) => '↑',
        Some(Direction::Right) => '→',
        Some(Direction::Bottom) => '↓',
        Some(Direction::Left) => '←',
        None => '?',
    }
}

/// Place two drawings next to each other, `left` padded to a common width
pub fn side_by_side(left: &str, right: &str) -> String {
    let width = left.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    left.lines()
        .zip_longest(right.lines())
        .map(|pair| {
            let (l, r) = match pair {
                EitherOrBoth::Both(l, r) => (l, r),
                EitherOrBoth::Left(l) => (l, ""),
                EitherOrBoth::Right(r) => ("", r),
            };
            format!("{:<width$}    {}", l, r, width = width)
                .trim_end()
                .to_string()
        })
        .join("\n")
}
