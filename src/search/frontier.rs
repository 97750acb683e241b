//! Frontier disciplines for the three strategies.
//!
//! The ordered variant keys by `(priority, NodeId)` inside `Reverse`, so ties
//! break toward the smaller handle, i.e. insertion order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::search::arena::NodeId;

#[derive(Debug)]
pub enum Frontier {
    /// FIFO: breadth-first.
    Fifo(VecDeque<NodeId>),
    /// LIFO: depth-first.
    Lifo(Vec<NodeId>),
    /// Min-priority: best-first.
    Ordered(BinaryHeap<Reverse<(u32, NodeId)>>),
}

impl Frontier {
    pub fn fifo() -> Frontier {
        Frontier::Fifo(VecDeque::new())
    }

    pub fn lifo() -> Frontier {
        Frontier::Lifo(Vec::new())
    }

    pub fn ordered() -> Frontier {
        Frontier::Ordered(BinaryHeap::new())
    }

    /// Push a node. `priority` is only consulted by the ordered variant.
    pub fn push(&mut self, id: NodeId, priority: u32) {
        match self {
            Frontier::Fifo(q) => q.push_back(id),
            Frontier::Lifo(stack) => stack.push(id),
            Frontier::Ordered(heap) => heap.push(Reverse((priority, id))),
        }
    }

    /// Pop the next node according to the discipline.
    pub fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Fifo(q) => q.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Ordered(heap) => heap.pop().map(|Reverse((_, id))| id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(q) => q.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Ordered(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
