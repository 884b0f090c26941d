use log::debug;
use petgraph::unionfind::UnionFind;

use crate::{Cell, Direction, MazeGrid};

/// Connected components of the open cells of a [MazeGrid] under 4-connectivity, kept in a
/// [UnionFind] structure. Answers reachability without running a search.
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    width: usize,
    height: usize,
}

impl Components {
    /// Links up every open cell with its open right and down neighbours.
    pub fn new(grid: &MazeGrid) -> Components {
        let mut components = UnionFind::new(grid.len());
        for cell in grid.open_cells() {
            let ix = grid.index_of(cell);
            for d in [Direction::Down, Direction::Right] {
                let next = cell.step(d);
                if grid.can_move_to(next) {
                    components.union(ix, grid.index_of(next));
                }
            }
        }
        debug!(
            "Generated connected components for {}x{} grid",
            grid.width(),
            grid.height()
        );
        Components {
            components,
            width: grid.width(),
            height: grid.height(),
        }
    }

    fn index(&self, cell: &Cell) -> Option<usize> {
        if cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
        {
            Some(cell.row as usize * self.width + cell.col as usize)
        } else {
            None
        }
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        self.index(cell).map(|ix| self.components.find(ix))
    }

    /// Checks if `a` and `b` are on the same component. Cells outside the grid are never
    /// reachable. Walls form singleton components, so a wall is only reachable from itself.
    pub fn reachable(&self, a: &Cell, b: &Cell) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => self.components.equiv(ia, ib),
            _ => false,
        }
    }

    /// Number of cells sharing a component with `cell`, `cell` itself included.
    pub fn component_size(&self, cell: &Cell) -> usize {
        match self.component(cell) {
            Some(root) => (0..self.width * self.height)
                .filter(|&ix| self.components.find(ix) == root)
                .count(),
            None => 0,
        }
    }
}
