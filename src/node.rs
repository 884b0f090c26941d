//! Append-only storage for the search tree. Parents are referenced by index and every
//! child is pushed after its parent, so a parent index is always smaller than the index of
//! any of its children and the backpointer chain can only lead towards the root.
use core::ops::Index;

use crate::{Cell, Direction, Solution};

/// Index of a [SearchNode] inside a [SearchTree].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A state plus the move that produced it. The root has neither parent nor action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Cell,
    pub parent: Option<NodeId>,
    pub action: Option<Direction>,
}

#[derive(Clone, Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> SearchTree {
        SearchTree::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn push_root(&mut self, state: Cell) -> NodeId {
        self.push(SearchNode {
            state,
            parent: None,
            action: None,
        })
    }

    pub fn push_child(&mut self, parent: NodeId, state: Cell, action: Direction) -> NodeId {
        debug_assert!(parent.0 < self.nodes.len());
        self.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Walks the backpointer chain from `id` up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(self.get(id), move |node| {
            node.parent.and_then(|parent| self.get(parent))
        })
    }

    /// Number of moves between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// Reconstructs the path from the root to `id`, root excluded.
    pub fn solution(&self, id: NodeId) -> Solution {
        let (mut actions, mut cells): (Vec<Direction>, Vec<Cell>) = self
            .ancestors(id)
            .filter_map(|node| node.action.map(|action| (action, node.state)))
            .unzip();
        actions.reverse();
        cells.reverse();
        Solution::new(actions, cells)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
