//! Single-goal searches over a [Grid] with walls.
//!
//! All five algorithms share one traversal, [traverse], and differ only in the [Frontier] that
//! decides which discovered node is expanded next:
//!
//! | [Algorithm] | frontier |
//! |---|---|
//! | breadth-first | [Fifo] |
//! | depth-first | [Lifo] |
//! | greedy best-first | [WeightedFrontier::greedy], squared Euclidean estimate only |
//! | Dijkstra | [WeightedFrontier::dijkstra], path cost only |
//! | A* | [WeightedFrontier::astar], path cost plus Manhattan estimate |
//!
//! Walls and the visited set are checked when a node is taken out of the frontier, never when it
//! is put in, so a cell may sit in the frontier several times before it is expanded once.
use core::fmt;
use std::str::FromStr;

use fxhash::FxHashSet;
use log::{debug, warn};

use crate::coordinate::{Coordinate, DirectedCoordinate};
use crate::error::GridError;
use crate::grid::{Grid, WallSet};
use crate::path::Path;
use crate::trace::{OrderClock, Trace, VisitEvent, VisitKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod unweighted;
pub mod weighted;

pub use unweighted::{Fifo, Lifo};
pub use weighted::{Heuristic, WeightedFrontier};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    #[default]
    BreadthFirstSearch,
    DepthFirstSearch,
    GreedyBestFirstSearch,
    DijkstrasAlgorithm,
    AStarAlgorithm,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirstSearch,
        Algorithm::DepthFirstSearch,
        Algorithm::GreedyBestFirstSearch,
        Algorithm::DijkstrasAlgorithm,
        Algorithm::AStarAlgorithm,
    ];

    /// The selector tag, accepted back by [FromStr].
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::BreadthFirstSearch => "BreadthFirstSearch",
            Algorithm::DepthFirstSearch => "DepthFirstSearch",
            Algorithm::GreedyBestFirstSearch => "GreedyBestFirstSearch",
            Algorithm::DijkstrasAlgorithm => "DijkstrasAlgorithm",
            Algorithm::AStarAlgorithm => "AStarAlgorithm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BreadthFirstSearch => "Breadth-first Search",
            Algorithm::DepthFirstSearch => "Depth-first Search",
            Algorithm::GreedyBestFirstSearch => "Greedy Best-first Search",
            Algorithm::DijkstrasAlgorithm => "Dijkstra's Algorithm",
            Algorithm::AStarAlgorithm => "A* Algorithm",
        }
    }

    /// Whether the frontier is a priority queue.
    pub fn is_weighted(self) -> bool {
        matches!(
            self,
            Algorithm::GreedyBestFirstSearch
                | Algorithm::DijkstrasAlgorithm
                | Algorithm::AStarAlgorithm
        )
    }

    /// Whether returned paths are shortest paths.
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::BreadthFirstSearch
                | Algorithm::DijkstrasAlgorithm
                | Algorithm::AStarAlgorithm
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "BreadthFirstSearch" => Ok(Algorithm::BreadthFirstSearch),
            "DepthFirstSearch" => Ok(Algorithm::DepthFirstSearch),
            "GreedyBestFirstSearch" => Ok(Algorithm::GreedyBestFirstSearch),
            "DijkstrasAlgorithm" | "UniformCostSearch" => Ok(Algorithm::DijkstrasAlgorithm),
            "AStarAlgorithm" => Ok(Algorithm::AStarAlgorithm),
            _ => Err(GridError::UnknownAlgorithm(tag.to_owned())),
        }
    }
}

/// A frontier entry: a position, the path that led to it (excluding the position itself) and the
/// number of moves along that path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub position: DirectedCoordinate,
    pub path: Vec<DirectedCoordinate>,
    pub cost: u32,
}

impl SearchNode {
    pub fn new(position: DirectedCoordinate, path: Vec<DirectedCoordinate>, cost: u32) -> Self {
        SearchNode {
            position,
            path,
            cost,
        }
    }
}

/// The discovered-but-not-expanded nodes of a search. Its discipline is what tells the
/// algorithms apart.
pub trait Frontier {
    /// Inserts the start node. Priority frontiers seed it with priority 0.
    fn seed(&mut self, node: SearchNode) {
        self.push(node);
    }

    fn push(&mut self, node: SearchNode);

    fn pop(&mut self) -> Option<SearchNode>;

    fn is_empty(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchResult {
    /// The start is the goal; nothing was searched.
    EmptyPath,
    Path(Path),
    /// Every reachable cell was expanded without meeting the goal.
    NoPath,
}

impl SearchResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchResult::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, SearchResult::Path(_))
    }

    /// What to tell the user when there is no path to draw.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchResult::EmptyPath => Some("The start is the goal. Please try again."),
            SearchResult::NoPath => Some("No path was found. Please try again."),
            SearchResult::Path(_) => None,
        }
    }
}

/// A search result together with the ordered visitation events that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Search {
    pub result: SearchResult,
    pub trace: Trace<VisitEvent>,
}

/// Runs `algorithm` from `start` to `goal` and records every visitation event.
pub fn search(
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    walls: &WallSet,
    algorithm: Algorithm,
) -> Search {
    let mut trace = Trace::new();
    let result = search_with(grid, start, goal, walls, algorithm, |e| trace.record(e));
    Search { result, trace }
}

/// Runs `algorithm` and hands each visitation event to `observer` as it happens.
pub fn search_with<F>(
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    walls: &WallSet,
    algorithm: Algorithm,
    observer: F,
) -> SearchResult
where
    F: FnMut(VisitEvent),
{
    debug!("{algorithm} from {start} to {goal} on a {}x{} grid", grid.rows(), grid.columns());
    match algorithm {
        Algorithm::BreadthFirstSearch => {
            traverse(grid, start, goal, walls, Fifo::default(), observer)
        }
        Algorithm::DepthFirstSearch => {
            traverse(grid, start, goal, walls, Lifo::default(), observer)
        }
        Algorithm::GreedyBestFirstSearch => traverse(
            grid,
            start,
            goal,
            walls,
            WeightedFrontier::greedy(goal),
            observer,
        ),
        Algorithm::DijkstrasAlgorithm => traverse(
            grid,
            start,
            goal,
            walls,
            WeightedFrontier::dijkstra(goal),
            observer,
        ),
        Algorithm::AStarAlgorithm => traverse(
            grid,
            start,
            goal,
            walls,
            WeightedFrontier::astar(goal),
            observer,
        ),
    }
}

/// The traversal shared by every algorithm. Each frontier node carries its own copy of the path
/// that reached it, so the goal's path is returned as is.
pub fn traverse<FR, F>(
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    walls: &WallSet,
    mut frontier: FR,
    mut observer: F,
) -> SearchResult
where
    FR: Frontier,
    F: FnMut(VisitEvent),
{
    debug_assert!(grid.contains(start), "start {start} is out of bounds");
    debug_assert!(grid.contains(goal), "goal {goal} is out of bounds");
    if start == goal {
        return SearchResult::EmptyPath;
    }
    let mut visited: FxHashSet<Coordinate> = FxHashSet::default();
    let mut clock = OrderClock::default();

    frontier.seed(SearchNode::new(start.into(), Vec::new(), 0));
    while let Some(SearchNode {
        position,
        mut path,
        cost,
    }) = frontier.pop()
    {
        let current = position.coordinate;
        if current == goal {
            path.push(position);
            debug!(
                "Reached {goal} after expanding {} cells, path has {} cells",
                visited.len(),
                path.len()
            );
            return SearchResult::Path(Path::new(path));
        }
        if walls.contains(&current) || visited.contains(&current) {
            continue;
        }
        observer(VisitEvent {
            coordinate: current,
            order: clock.tick(),
            kind: VisitKind::Expanded,
        });
        for child in grid.neighbours(&current) {
            let mut child_path = Vec::with_capacity(path.len() + 1);
            child_path.extend_from_slice(&path);
            child_path.push(position);
            let c = child.coordinate;
            frontier.push(SearchNode::new(child, child_path, cost + 1));
            if !visited.contains(&c) && !walls.contains(&c) && c != goal {
                observer(VisitEvent {
                    coordinate: c,
                    order: clock.tick(),
                    kind: VisitKind::Discovered,
                });
            }
        }
        visited.insert(current);
    }
    warn!(
        "{goal} is not reachable from {start}, expanded {} cells",
        visited.len()
    );
    SearchResult::NoPath
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls(cells: &[(i32, i32)]) -> WallSet {
        cells.iter().map(|&c| Coordinate::from(c)).collect()
    }

    /// A wall across row 2 except column 4.
    fn row_barrier() -> WallSet {
        walls(&[(2, 0), (2, 1), (2, 2), (2, 3)])
    }

    #[test]
    fn start_is_goal() {
        let grid = Grid::new(5, 5);
        for algorithm in Algorithm::ALL {
            let start = Coordinate::new(2, 2);
            let run = search(&grid, start, start, &WallSet::new(), algorithm);
            assert_eq!(run.result, SearchResult::EmptyPath);
            assert!(run.trace.is_empty());
        }
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let grid = Grid::new(5, 5);
        let start = Coordinate::new(4, 0);
        let goal = Coordinate::new(0, 4);
        let run = search(&grid, start, goal, &WallSet::new(), Algorithm::BreadthFirstSearch);
        let path = run.result.path().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.edges(), 8);
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.goal(), Some(goal));
        assert!(path.is_connected());
    }

    /// BFS tries up before right, so the path climbs the first column before turning.
    #[test]
    fn bfs_prefers_neighbour_order() {
        let grid = Grid::new(5, 5);
        let start = Coordinate::new(4, 0);
        let goal = Coordinate::new(0, 4);
        let run = search(&grid, start, goal, &WallSet::new(), Algorithm::BreadthFirstSearch);
        let cells = run.result.path().unwrap().coordinates().collect::<Vec<_>>();
        assert_eq!(cells[1], Coordinate::new(3, 0));
        assert_eq!(cells[4], Coordinate::new(0, 0));
    }

    #[test]
    fn every_algorithm_routes_through_the_gap() {
        let grid = Grid::new(5, 5);
        let gap = Coordinate::new(2, 4);
        for algorithm in Algorithm::ALL {
            let run = search(
                &grid,
                Coordinate::new(0, 0),
                Coordinate::new(4, 0),
                &row_barrier(),
                algorithm,
            );
            let path = run.result.path().unwrap();
            assert!(path.contains(&gap), "{algorithm} missed the gap");
            assert!(path.is_connected());
            assert!(path.coordinates().all(|c| !row_barrier().contains(&c)));
            if algorithm.is_optimal() {
                assert_eq!(path.edges(), 12, "{algorithm}");
            }
        }
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let grid = Grid::new(5, 5);
        let fence = walls(&[(1, 2), (2, 1), (2, 3), (3, 2)]);
        for algorithm in Algorithm::ALL {
            let run = search(
                &grid,
                Coordinate::new(0, 0),
                Coordinate::new(2, 2),
                &fence,
                algorithm,
            );
            assert_eq!(run.result, SearchResult::NoPath, "{algorithm}");
            assert_eq!(run.result.message(), Some("No path was found. Please try again."));
            // Every open cell outside the fence was expanded exactly once.
            let expanded = run.trace.coordinates(VisitKind::Expanded).collect::<Vec<_>>();
            assert_eq!(expanded.len(), 25 - 4 - 1);
            let unique = expanded.iter().collect::<FxHashSet<_>>();
            assert_eq!(unique.len(), expanded.len());
        }
    }

    #[test]
    fn walled_start_is_pruned() {
        // A start placed on a wall is discarded on the first pop.
        let grid = Grid::new(3, 3);
        let start = Coordinate::new(0, 0);
        let run = search(
            &grid,
            start,
            Coordinate::new(2, 2),
            &walls(&[(0, 0)]),
            Algorithm::BreadthFirstSearch,
        );
        assert_eq!(run.result, SearchResult::NoPath);
        assert!(run.trace.is_empty());
    }

    #[test]
    fn long_grids_do_not_overflow_priorities() {
        let grid = Grid::new(1, 50_000);
        let goal = Coordinate::new(0, 49_999);
        for algorithm in [
            Algorithm::GreedyBestFirstSearch,
            Algorithm::DijkstrasAlgorithm,
            Algorithm::AStarAlgorithm,
        ] {
            // The start is boxed in, so only distant cells get a priority.
            let run = search(&grid, Coordinate::new(0, 0), goal, &walls(&[(0, 1)]), algorithm);
            assert_eq!(run.result, SearchResult::NoPath, "{algorithm}");
            assert_eq!(run.trace.coordinates(VisitKind::Expanded).count(), 1);

            let run = search(&grid, Coordinate::new(0, 49_990), goal, &WallSet::new(), algorithm);
            assert_eq!(run.result.path().map(|p| p.edges()), Some(9), "{algorithm}");
        }
    }

    #[test]
    fn trace_orders_are_strictly_increasing() {
        let grid = Grid::new(6, 7);
        for algorithm in Algorithm::ALL {
            let run = search(
                &grid,
                Coordinate::new(0, 0),
                Coordinate::new(5, 6),
                &walls(&[(1, 1), (2, 2), (3, 3)]),
                algorithm,
            );
            assert!(run.result.is_path());
            assert!(run.trace.iter().enumerate().all(|(i, e)| e.order == i));
            assert!(run
                .trace
                .iter()
                .all(|e| e.coordinate != Coordinate::new(5, 6)));
            assert_eq!(run.trace.iter().next().map(|e| e.kind), Some(VisitKind::Expanded));
        }
    }

    #[test]
    fn observer_sees_the_same_events_as_the_trace() {
        let grid = Grid::new(4, 4);
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(3, 3);
        let mut seen = Vec::new();
        let result = search_with(
            &grid,
            start,
            goal,
            &WallSet::new(),
            Algorithm::AStarAlgorithm,
            |e| seen.push(e),
        );
        let run = search(&grid, start, goal, &WallSet::new(), Algorithm::AStarAlgorithm);
        assert_eq!(result, run.result);
        assert_eq!(seen, run.trace.into_inner());
    }

    /// Depth-first pops the last pushed neighbour (left, then down, ...) first.
    #[test]
    fn dfs_follows_the_last_neighbour() {
        let grid = Grid::new(3, 3);
        let run = search(
            &grid,
            Coordinate::new(0, 2),
            Coordinate::new(2, 2),
            &WallSet::new(),
            Algorithm::DepthFirstSearch,
        );
        let cells = run.result.path().unwrap().coordinates().collect::<Vec<_>>();
        // Left is pushed last and wins until the top row ends, then down wins until the bottom
        // row, then right.
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(0, 1),
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(2, 1),
                Coordinate::new(2, 2),
            ]
        );
    }

    #[test]
    fn algorithm_tags_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.tag().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "UniformCostSearch".parse::<Algorithm>(),
            Ok(Algorithm::DijkstrasAlgorithm)
        );
        assert_eq!(
            "Bogo".parse::<Algorithm>(),
            Err(GridError::UnknownAlgorithm("Bogo".to_owned()))
        );
        assert_eq!(Algorithm::default(), Algorithm::BreadthFirstSearch);
    }
}
