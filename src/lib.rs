//! # maze_pathfinding
//!
//! Single-goal search on a 4-connected, unit-cost grid with walls, and maze generation by
//! [recursive division](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Recursive_division_method).
//!
//! Five searches share one traversal: breadth-first, depth-first, greedy best-first, Dijkstra and
//! A*. Besides a [SearchResult], every run yields the ordered [VisitEvent]s that led to it, and
//! every maze build yields its ordered [WallEvent]s, so a front end can replay either at its own
//! pace. Connected components are available through [Grid::components] to check reachability up
//! front.
//!
//! ```
//! use maze_pathfinding::{Algorithm, Board, MazeAlgorithm};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut board = Board::default();
//! let mut rng = StdRng::seed_from_u64(0);
//! board.build_maze(&mut rng, MazeAlgorithm::RecursiveDivision).unwrap();
//! let run = board.visualize(Algorithm::AStarAlgorithm).unwrap();
//! assert!(run.result.is_path());
//! ```
pub mod board;
pub mod coordinate;
pub mod error;
pub mod grid;
pub mod maze;
pub mod path;
pub mod priority_queue;
pub mod search;
pub mod trace;

pub use board::Board;
pub use coordinate::{Coordinate, DirectedCoordinate, Direction};
pub use error::GridError;
pub use grid::{Components, Grid, WallSet};
pub use maze::{build_maze, MazeAlgorithm, MazeGenerator};
pub use path::{Path, PathGlyph};
pub use priority_queue::{Order, PriorityItem, PriorityQueue};
pub use search::{search, search_with, Algorithm, Heuristic, Search, SearchResult};
pub use trace::{Trace, VisitEvent, VisitKind, WallEvent};

/// Rows of [Board::default].
pub const DEFAULT_ROWS: usize = 15;
/// Columns of [Board::default].
pub const DEFAULT_COLUMNS: usize = 15;
/// Offset from a double wall's first line to the first line of the regions beside it: two wall
/// lines and one open line.
pub const DOUBLE_WALL_STEP: i32 = 3;
