use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which end of the priority range is served first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Order {
    /// Lowest priority first (shortest path searches).
    #[default]
    Ascending,
    /// Highest priority first.
    Descending,
}

impl Order {
    /// [Ordering::Greater] if an entry with priority `a` is served after one with priority `b`.
    /// Incomparable priorities (NaN) are treated as equal.
    pub fn compare<P: PartialOrd>(self, a: &P, b: &P) -> Ordering {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match self {
            Order::Ascending => ord,
            Order::Descending => ord.reverse(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriorityItem<T, P> {
    pub item: T,
    pub priority: P,
}

/// Sorted-on-insert priority queue. Entries with equal priority leave in insertion order.
///
/// Entries are kept in reverse serving order so that [PriorityQueue::pop] takes from the back of
/// the vector. Insertion is a binary search plus a shift.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P> {
    items: Vec<PriorityItem<T, P>>,
    order: Order,
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// An ascending queue.
    pub fn new() -> PriorityQueue<T, P> {
        PriorityQueue::with_order(Order::Ascending)
    }

    pub fn with_order(order: Order) -> PriorityQueue<T, P> {
        PriorityQueue {
            items: Vec::new(),
            order,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn push(&mut self, item: T, priority: P) {
        let order = self.order;
        // Everything served strictly later sits in front of the new entry, ties stay behind it.
        let ix = self
            .items
            .partition_point(|e| order.compare(&e.priority, &priority) == Ordering::Greater);
        self.items.insert(ix, PriorityItem { item, priority });
    }

    pub fn pop(&mut self) -> Option<PriorityItem<T, P>> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&PriorityItem<T, P>> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries in the order [PriorityQueue::pop] would return them.
    pub fn iter(&self) -> impl Iterator<Item = &PriorityItem<T, P>> {
        self.items.iter().rev()
    }
}
