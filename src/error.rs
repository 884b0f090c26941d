use thiserror::Error;

use crate::Cell;

/// Ways a single solve can end without a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// [remove](crate::frontier::Frontier::remove) was called on an empty frontier. The
    /// search loop checks emptiness first, so seeing this outside of it is a bug.
    #[error("cannot remove a node from an empty frontier")]
    FrontierEmpty,
    /// Every state reachable from the start was expanded without meeting the goal.
    #[error("no solution: frontier exhausted after expanding {expanded} states")]
    NoSolution { expanded: usize },
}

/// Rejections raised while building a [MazeGrid](crate::MazeGrid).
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,
    #[error("maze must have exactly one start point (A), found none")]
    MissingStart,
    #[error("maze must have exactly one start point (A), found {0}")]
    MultipleStarts(usize),
    #[error("maze must have exactly one goal (B), found none")]
    MissingGoal,
    #[error("maze must have exactly one goal (B), found {0}")]
    MultipleGoals(usize),
    #[error("cell {cell} lies outside the {width}x{height} maze")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },
    #[error("could not read maze file")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown search strategy `{0}`, expected `dfs` or `bfs`")]
pub struct ParseStrategyError(pub String);
