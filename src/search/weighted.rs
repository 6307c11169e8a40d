use crate::coordinate::Coordinate;
use crate::priority_queue::PriorityQueue;

use super::{Frontier, SearchNode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Estimate of the remaining distance to the goal.
///
/// Greedy best-first orders by [Heuristic::SquaredEuclidean] while A* uses
/// [Heuristic::Manhattan]. The two differ on purpose; only Manhattan distance is admissible on a
/// 4-connected unit-cost grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heuristic {
    #[default]
    Zero,
    Manhattan,
    SquaredEuclidean,
}

impl Heuristic {
    pub fn estimate(self, from: &Coordinate, goal: &Coordinate) -> u64 {
        // Both distances are non-negative.
        match self {
            Heuristic::Zero => 0,
            Heuristic::Manhattan => from.manhattan_distance(goal).unsigned_abs(),
            Heuristic::SquaredEuclidean => from.squared_euclidean_distance(goal).unsigned_abs(),
        }
    }
}

/// Priority queue frontier. A node's priority is its estimate to the goal, plus its path cost
/// when `use_cost` is set.
#[derive(Clone, Debug)]
pub struct WeightedFrontier {
    queue: PriorityQueue<SearchNode, u64>,
    goal: Coordinate,
    heuristic: Heuristic,
    use_cost: bool,
}

impl WeightedFrontier {
    pub fn new(goal: Coordinate, heuristic: Heuristic, use_cost: bool) -> WeightedFrontier {
        WeightedFrontier {
            queue: PriorityQueue::new(),
            goal,
            heuristic,
            use_cost,
        }
    }

    /// `h`: squared Euclidean distance, path cost ignored.
    pub fn greedy(goal: Coordinate) -> WeightedFrontier {
        WeightedFrontier::new(goal, Heuristic::SquaredEuclidean, false)
    }

    /// `g`: path cost only.
    pub fn dijkstra(goal: Coordinate) -> WeightedFrontier {
        WeightedFrontier::new(goal, Heuristic::Zero, true)
    }

    /// `f = g + h` with Manhattan distance.
    pub fn astar(goal: Coordinate) -> WeightedFrontier {
        WeightedFrontier::new(goal, Heuristic::Manhattan, true)
    }

    pub fn priority(&self, node: &SearchNode) -> u64 {
        let h = self.heuristic.estimate(&node.position.coordinate, &self.goal);
        if self.use_cost {
            u64::from(node.cost) + h
        } else {
            h
        }
    }
}

impl Frontier for WeightedFrontier {
    fn seed(&mut self, node: SearchNode) {
        self.queue.push(node, 0);
    }

    fn push(&mut self, node: SearchNode) {
        let priority = self.priority(&node);
        self.queue.push(node, priority);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop().map(|e| e.item)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Direction;
    use crate::coordinate::DirectedCoordinate;

    fn node(row: i32, column: i32, cost: u32) -> SearchNode {
        SearchNode::new(
            DirectedCoordinate::new(Coordinate::new(row, column), Direction::None),
            Vec::new(),
            cost,
        )
    }

    #[test]
    fn priorities_per_preset() {
        let goal = Coordinate::new(0, 4);
        let n = node(3, 1, 5);
        assert_eq!(WeightedFrontier::greedy(goal).priority(&n), 9 + 9);
        assert_eq!(WeightedFrontier::dijkstra(goal).priority(&n), 5);
        assert_eq!(WeightedFrontier::astar(goal).priority(&n), 5 + 6);
    }

    /// Greedy and A* disagree on which of two cells is closer.
    #[test]
    fn heuristics_are_not_interchangeable() {
        let goal = Coordinate::new(0, 0);
        let diagonal = Coordinate::new(2, 2);
        let straight = Coordinate::new(0, 3);
        assert!(
            Heuristic::Manhattan.estimate(&diagonal, &goal)
                > Heuristic::Manhattan.estimate(&straight, &goal)
        );
        assert!(
            Heuristic::SquaredEuclidean.estimate(&diagonal, &goal)
                < Heuristic::SquaredEuclidean.estimate(&straight, &goal)
        );
    }

    #[test]
    fn far_goals_keep_their_order() {
        let goal = Coordinate::new(0, 49_999);
        let frontier = WeightedFrontier::greedy(goal);
        let far = frontier.priority(&node(0, 0, 0));
        let near = frontier.priority(&node(0, 1, 0));
        assert_eq!(far, 49_999 * 49_999);
        assert!(near < far);
        let edge = Coordinate::new(i32::MAX, 0);
        assert_eq!(
            Heuristic::SquaredEuclidean.estimate(&Coordinate::new(0, 0), &edge),
            (i32::MAX as u64) * (i32::MAX as u64)
        );
    }

    #[test]
    fn seed_has_priority_zero() {
        let goal = Coordinate::new(9, 9);
        let mut frontier = WeightedFrontier::greedy(goal);
        frontier.push(node(9, 8, 0));
        frontier.seed(node(0, 0, 0));
        assert_eq!(frontier.pop().map(|n| n.position.coordinate), Some(Coordinate::new(0, 0)));
        assert_eq!(frontier.pop().map(|n| n.position.coordinate), Some(Coordinate::new(9, 8)));
        assert!(frontier.is_empty());
    }
}
