//! Ordered event logs produced by searches and maze builds.
//!
//! The algorithms never sleep or schedule anything themselves. They hand each event to a sink as
//! it happens; a renderer decides how to space the events out in time.
use crate::coordinate::Coordinate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisitKind {
    /// The cell passed the wall and visited checks and its neighbours are being generated.
    Expanded,
    /// The cell was generated as a neighbour and is not a wall, not yet visited and not the goal.
    Discovered,
}

/// One step of a search, see [crate::search_with].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisitEvent {
    pub coordinate: Coordinate,
    /// Strictly increasing within one search.
    pub order: usize,
    pub kind: VisitKind,
}

/// A wall placed by the maze generator. Both cells of a double-thickness wall step share an
/// order index, so the index is non-decreasing rather than strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallEvent {
    pub coordinate: Coordinate,
    pub order: usize,
}

/// Hands out order indices.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct OrderClock {
    next: usize,
}

impl OrderClock {
    pub(crate) fn tick(&mut self) -> usize {
        let order = self.next;
        self.next += 1;
        order
    }
}

/// A finished, replayable event log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace<E> {
    events: Vec<E>,
}

impl<E> Default for Trace<E> {
    fn default() -> Self {
        Trace { events: Vec::new() }
    }
}

impl<E> Trace<E> {
    pub fn new() -> Trace<E> {
        Trace::default()
    }

    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates from the first event, every call starts over.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    pub fn into_inner(self) -> Vec<E> {
        self.events
    }
}

impl Trace<VisitEvent> {
    /// Coordinates of one kind of event, in order.
    pub fn coordinates(&self, kind: VisitKind) -> impl Iterator<Item = Coordinate> + '_ {
        self.events
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| e.coordinate)
    }
}

impl<E> FromIterator<E> for Trace<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Trace {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a, E> IntoIterator for &'a Trace<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<E> IntoIterator for Trace<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
