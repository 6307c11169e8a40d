use std::collections::VecDeque;

use super::{Frontier, SearchNode};

/// First in, first out: breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct Fifo {
    queue: VecDeque<SearchNode>,
}

impl Frontier for Fifo {
    fn push(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Last in, first out: depth-first search.
#[derive(Clone, Debug, Default)]
pub struct Lifo {
    stack: Vec<SearchNode>,
}

impl Frontier for Lifo {
    fn push(&mut self, node: SearchNode) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
