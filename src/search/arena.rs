//! Node arena for ancestor chains.
//!
//! Search nodes live in a single `Vec` and refer to their predecessor by
//! handle. A parent handle is always smaller than its children's, so the
//! ancestor chain is acyclic by construction and the winning path can be
//! recovered by walking parent links without any cycle checks.

use crate::board::{Board, Direction};

pub type NodeId = usize;

#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub board: Board,
    /// The move that produced this board from its parent; `None` for the root.
    pub action: Option<Direction>,
    pub parent: Option<NodeId>,
    /// Path length from the root.
    pub depth: u32,
}

#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Arena {
        Arena { nodes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Insert a root node (no predecessor, depth 0).
    pub fn push_root(&mut self, board: Board) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            board,
            action: None,
            parent: None,
            depth: 0,
        });
        id
    }

    /// Insert a successor of `parent` reached by `action`.
    pub fn push_child(&mut self, parent: NodeId, action: Direction, board: Board) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        let id = self.nodes.len();
        self.nodes.push(Node {
            board,
            action: Some(action),
            parent: Some(parent),
            depth,
        });
        id
    }

    /// Collect the actions from the root to `id`, in root-to-goal order.
    pub fn path_from_root(&self, id: NodeId) -> Vec<Direction> {
        let mut actions = Vec::with_capacity(self.nodes[id].depth as usize);
        let mut cursor = id;
        while let Some(parent) = self.nodes[cursor].parent {
            actions.push(
                self.nodes[cursor]
                    .action
                    .expect("non-root nodes record an action"),
            );
            cursor = parent;
        }
        actions.reverse();
        actions
    }
}
