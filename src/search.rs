//! The exploration loop shared by all frontier strategies.
use core::fmt;
use std::str::FromStr;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{info, warn};

use crate::frontier::{Frontier, QueueFrontier, StackFrontier};
use crate::node::SearchTree;
use crate::{Cell, MazeGrid, ParseStrategyError, SearchError, Solution};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Removal order of the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Last in, first out. Finds some path, not necessarily a short one.
    #[default]
    DepthFirst,
    /// First in, first out. Finds a path with the fewest steps.
    BreadthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::DepthFirst, Strategy::BreadthFirst];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "stack" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" | "queue" => Ok(Strategy::BreadthFirst),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

/// Solves `grid` with a fresh [SearchContext].
pub fn solve(grid: &MazeGrid, strategy: Strategy) -> Result<Solution, SearchError> {
    SearchContext::new(strategy).run(grid)
}

/// Per-solve bookkeeping: the search tree, the explored set and the expansion counter. All
/// of it is reset at the start of every run, and stays readable afterwards whatever the
/// outcome was.
#[derive(Clone, Debug)]
pub struct SearchContext {
    strategy: Strategy,
    tree: SearchTree,
    explored: FxIndexSet<Cell>,
    expanded: usize,
}

impl SearchContext {
    pub fn new(strategy: Strategy) -> SearchContext {
        SearchContext {
            strategy,
            tree: SearchTree::new(),
            explored: FxIndexSet::default(),
            expanded: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of nodes taken off the frontier during the last run.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Expanded states, in the order they were expanded. The goal is never part of it.
    pub fn explored(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.explored.iter()
    }

    pub fn is_explored(&self, cell: &Cell) -> bool {
        self.explored.contains(cell)
    }

    pub fn nodes_created(&self) -> usize {
        self.tree.len()
    }

    fn reset(&mut self) {
        self.tree.clear();
        self.explored.clear();
        self.expanded = 0;
    }

    /// Runs the search with the frontier matching this context's [Strategy].
    pub fn run(&mut self, grid: &MazeGrid) -> Result<Solution, SearchError> {
        match self.strategy {
            Strategy::DepthFirst => self.run_with::<StackFrontier>(grid),
            Strategy::BreadthFirst => self.run_with::<QueueFrontier>(grid),
        }
    }

    /// Runs the search with a frontier of type `F`, built empty for this run. Node ids in
    /// the frontier therefore always refer to this context's tree.
    pub fn run_with<F: Frontier + Default>(
        &mut self,
        grid: &MazeGrid,
    ) -> Result<Solution, SearchError> {
        self.reset();
        let mut frontier = F::default();
        let start = grid.start();
        let goal = grid.goal();
        info!("Solving from {} to {} ({})", start, goal, self.strategy);

        let root = self.tree.push_root(start);
        frontier.add(root, start);
        loop {
            if frontier.is_empty() {
                warn!(
                    "Number of states explored before failure: {}",
                    self.expanded
                );
                return Err(SearchError::NoSolution {
                    expanded: self.expanded,
                });
            }
            let id = frontier.remove()?;
            self.expanded += 1;
            let state = self.tree[id].state;

            if state == goal {
                let solution = self.tree.solution(id);
                info!(
                    "Number of states explored: {}; path length: {}",
                    self.expanded,
                    solution.len()
                );
                return Ok(solution);
            }

            self.explored.insert(state);
            for (direction, next) in grid.neighbors(state) {
                if !self.explored.contains(&next) && !frontier.contains_state(&next) {
                    let child = self.tree.push_child(id, next, direction);
                    frontier.add(child, next);
                }
            }
        }
    }
}
