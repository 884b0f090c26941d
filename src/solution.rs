use core::fmt;

use itertools::Itertools;

use crate::{Cell, Direction};

/// A path from start to goal. `actions[i]` is the move that enters `cells[i]`; the start
/// cell itself is not part of the path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    actions: Vec<Direction>,
    cells: Vec<Cell>,
}

impl Solution {
    pub(crate) fn new(actions: Vec<Direction>, cells: Vec<Cell>) -> Solution {
        debug_assert_eq!(actions.len(), cells.len());
        Solution { actions, cells }
    }

    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of steps, which is zero when start and goal coincide.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pairs of action and the cell it leads to, in path order.
    pub fn steps(&self) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        self.actions.iter().copied().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.actions.iter().join(", "))
    }
}
