use core::fmt;

use grid_util::grid::{BoolGrid, ValueGrid};
use smallvec::SmallVec;

use crate::{render, Cell, Direction, MazeError, DIRECTIONS};

/// Walls, start and goal of a single maze. Read-only once built, so one grid can back any
/// number of independent searches.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    walls: BoolGrid,
    start: Cell,
    goal: Cell,
}

impl MazeGrid {
    /// Builds a grid from a wall layer ([true] is a wall). The start and goal cells are
    /// always open, whatever the wall layer says about them.
    pub fn new(mut walls: BoolGrid, start: Cell, goal: Cell) -> Result<MazeGrid, MazeError> {
        let (width, height) = (walls.width(), walls.height());
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        for cell in [start, goal] {
            if !Self::within(cell, width, height) {
                return Err(MazeError::OutOfBounds {
                    cell,
                    width,
                    height,
                });
            }
            walls.set(cell.col, cell.row, false);
        }
        Ok(MazeGrid { walls, start, goal })
    }

    /// Builds a grid from rows of wall flags. The width is that of the longest row and
    /// shorter rows are padded with open cells.
    pub fn from_rows<R: AsRef<[bool]>>(
        rows: &[R],
        start: Cell,
        goal: Cell,
    ) -> Result<MazeGrid, MazeError> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut walls = BoolGrid::new(width, height, false);
        for (row, flags) in rows.iter().enumerate() {
            for (col, &blocked) in flags.as_ref().iter().enumerate() {
                walls.set(col as i32, row as i32, blocked);
            }
        }
        MazeGrid::new(walls, start, goal)
    }

    /// An open `width` x `height` grid with walls placed on the listed cells.
    pub fn with_walls<I>(
        width: usize,
        height: usize,
        walls: I,
        start: Cell,
        goal: Cell,
    ) -> Result<MazeGrid, MazeError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut grid = BoolGrid::new(width, height, false);
        for cell in walls {
            if Self::within(cell, width, height) {
                grid.set(cell.col, cell.row, true);
            }
        }
        MazeGrid::new(grid, start, goal)
    }

    fn within(cell: Cell, width: usize, height: usize) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < height
            && (cell.col as usize) < width
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }
    pub fn height(&self) -> usize {
        self.walls.height()
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }
    /// Total number of cells, walls included.
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        Self::within(cell, self.width(), self.height())
    }

    /// [true] for wall cells inside the grid. Cells outside the grid are not walls, they
    /// simply do not exist; use [can_move_to](Self::can_move_to) to test passability.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.walls.get(cell.col, cell.row)
    }

    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.walls.get(cell.col, cell.row)
    }

    /// Row-major index of an in-bounds cell.
    pub fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row as usize * self.width() + cell.col as usize
    }

    /// Open cells one step away from `cell`, in [DIRECTIONS] order (up, down, left, right).
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[(Direction, Cell); 4]> {
        DIRECTIONS
            .into_iter()
            .map(|d| (d, cell.step(d)))
            .filter(|(_, c)| self.can_move_to(*c))
            .collect()
    }

    /// Every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height() as i32)
            .flat_map(move |row| (0..self.width() as i32).map(move |col| Cell::new(row, col)))
            .filter(move |c| self.can_move_to(*c))
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::render_text(self, None))
    }
}
