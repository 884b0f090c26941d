//! Frontiers hold discovered but not yet expanded nodes. Both variants keep a count of held
//! nodes per state, so [contains_state](Frontier::contains_state) does not scan the whole
//! collection and stays correct if a caller adds the same state twice.
use std::collections::VecDeque;

use fxhash::FxHashMap;

use crate::{node::NodeId, Cell, SearchError};

pub trait Frontier {
    /// Inserts a node. No de-duplication happens here.
    fn add(&mut self, node: NodeId, state: Cell);
    fn contains_state(&self, state: &Cell) -> bool;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    /// Takes the next node in strategy order.
    fn remove(&mut self) -> Result<NodeId, SearchError>;
}

#[derive(Clone, Debug, Default)]
struct StateCounts {
    counts: FxHashMap<Cell, usize>,
}

impl StateCounts {
    fn insert(&mut self, state: Cell) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &Cell) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &Cell) -> bool {
        self.counts.contains_key(state)
    }
}

/// Last-in-first-out frontier, giving depth-first search.
#[derive(Clone, Debug, Default)]
pub struct StackFrontier {
    stack: Vec<(NodeId, Cell)>,
    states: StateCounts,
}

impl StackFrontier {
    pub fn new() -> StackFrontier {
        StackFrontier::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: NodeId, state: Cell) {
        self.stack.push((node, state));
        self.states.insert(state);
    }
    fn contains_state(&self, state: &Cell) -> bool {
        self.states.contains(state)
    }
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
    fn remove(&mut self) -> Result<NodeId, SearchError> {
        let (node, state) = self.stack.pop().ok_or(SearchError::FrontierEmpty)?;
        self.states.remove(&state);
        Ok(node)
    }
}

/// First-in-first-out frontier, giving breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<(NodeId, Cell)>,
    states: StateCounts,
}

impl QueueFrontier {
    pub fn new() -> QueueFrontier {
        QueueFrontier::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: NodeId, state: Cell) {
        self.queue.push_back((node, state));
        self.states.insert(state);
    }
    fn contains_state(&self, state: &Cell) -> bool {
        self.states.contains(state)
    }
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
    fn remove(&mut self) -> Result<NodeId, SearchError> {
        let (node, state) = self.queue.pop_front().ok_or(SearchError::FrontierEmpty)?;
        self.states.remove(&state);
        Ok(node)
    }
}
