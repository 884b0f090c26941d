//! # maze_search
//!
//! Uninformed maze solving on a 4-connected grid. A single exploration loop is
//! shared by [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) and
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) search; the only
//! difference between the two is the [Frontier](frontier::Frontier) that gets plugged in.
//! Search trees are kept in an append-only arena, so backpointers are plain indices.
//!
//! Parsing the classic text format (`A` start, `B` goal, space open, anything else a wall)
//! and rendering solved mazes to text or PNG live next to the core in [parse] and [render].
pub mod components;
pub mod error;
pub mod frontier;
pub mod maze_grid;
pub mod node;
pub mod parse;
pub mod render;
pub mod search;
pub mod solution;

use core::fmt;
use std::path::Path;

use grid_util::point::Point;

pub use crate::error::{MazeError, ParseStrategyError, SearchError};
pub use crate::maze_grid::MazeGrid;
pub use crate::search::{solve, SearchContext, Strategy};
pub use crate::solution::Solution;

/// Fixed expansion order. Determines tie-breaking for both strategies.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// A grid position, addressed by row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in the given direction. May lie outside any grid.
    pub fn step(self, direction: Direction) -> Cell {
        let (dr, dc) = direction.delta();
        Cell::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

// grid_util works in (x, y) screen coordinates: x is the column, y the row.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

/// One of the four orthogonal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A [MazeGrid] together with the outcome of the most recent solve. Each call to
/// [solve](Maze::solve) starts from scratch and replaces the stored solution.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: MazeGrid,
    solution: Option<Solution>,
    expanded: usize,
}

impl Maze {
    pub fn new(grid: MazeGrid) -> Maze {
        Maze {
            grid,
            solution: None,
            expanded: 0,
        }
    }

    /// Reads and parses a maze file in the text format described in [parse].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Maze, MazeError> {
        MazeGrid::from_file(path).map(Maze::new)
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// The solution found by the last successful [solve](Maze::solve), if any.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Number of states expanded by the last solve, successful or not.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn solve(&mut self, strategy: Strategy) -> Result<&Solution, SearchError> {
        let mut context = SearchContext::new(strategy);
        let outcome = context.run(&self.grid);
        self.expanded = context.expanded();
        self.solution = None;
        let solution = outcome?;
        Ok(&*self.solution.insert(solution))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::render_text(&self.grid, self.solution.as_ref()))
    }
}
