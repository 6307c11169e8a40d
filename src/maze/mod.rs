//! Maze generation by recursive division.
//!
//! A build first walls off the border of the grid, then divides the interior. Walls are only ever
//! added, and never on the start or the goal. Each placed wall is reported as a [WallEvent] in
//! placement order so a caller can replay the build.
pub mod division;
pub mod random;

use core::fmt;
use std::str::FromStr;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coordinate::Coordinate;
use crate::error::GridError;
use crate::grid::{Grid, WallSet};
use crate::trace::{OrderClock, Trace, WallEvent};
use division::{divide, Layers, Region};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MazeAlgorithm {
    #[default]
    RecursiveDivision,
    RecursiveDivisionTwoLayers,
}

impl MazeAlgorithm {
    pub const ALL: [MazeAlgorithm; 2] = [
        MazeAlgorithm::RecursiveDivision,
        MazeAlgorithm::RecursiveDivisionTwoLayers,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            MazeAlgorithm::RecursiveDivision => "RecursiveDivision",
            MazeAlgorithm::RecursiveDivisionTwoLayers => "RecursiveDivisionTwoLayers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MazeAlgorithm::RecursiveDivision => "Recursive Division",
            MazeAlgorithm::RecursiveDivisionTwoLayers => "Recursive Division (two layers)",
        }
    }

    pub fn layers(self) -> Layers {
        match self {
            MazeAlgorithm::RecursiveDivision => Layers::Single,
            MazeAlgorithm::RecursiveDivisionTwoLayers => Layers::Double,
        }
    }
}

impl fmt::Display for MazeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MazeAlgorithm {
    type Err = GridError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        MazeAlgorithm::ALL
            .into_iter()
            .find(|a| a.tag() == tag)
            .ok_or_else(|| GridError::UnknownAlgorithm(tag.to_owned()))
    }
}

/// State shared by one build: where walls go and who hears about them.
struct Carver<'a, F> {
    grid: &'a Grid,
    start: Coordinate,
    goal: Coordinate,
    walls: &'a mut WallSet,
    clock: OrderClock,
    observer: F,
    placed: usize,
}

impl<'a, F: FnMut(WallEvent)> Carver<'a, F> {
    /// Adds a wall unless `c` is off the grid, reserved, or already a wall.
    fn place(&mut self, c: Coordinate, order: usize) -> bool {
        if !self.grid.contains(c) || c == self.start || c == self.goal || !self.walls.insert(c) {
            return false;
        }
        self.placed += 1;
        (self.observer)(WallEvent {
            coordinate: c,
            order,
        });
        true
    }

    /// One loop around the perimeter: down the left edge, along the bottom, up the right edge and
    /// back along the top.
    fn border(&mut self) {
        let rows = self.grid.rows() as i32;
        let columns = self.grid.columns() as i32;
        let left = (0..rows).map(|i| Coordinate::new(i, 0));
        let bottom = (0..columns).map(|i| Coordinate::new(rows - 1, i));
        let right = (0..rows).rev().map(|i| Coordinate::new(i, columns - 1));
        let top = (0..columns).rev().map(|i| Coordinate::new(0, i));
        for c in left.chain(bottom).chain(right).chain(top) {
            let order = self.clock.tick();
            self.place(c, order);
        }
    }
}

/// Walls the border of `grid` and divides its interior, adding to `walls`. Returns the number of
/// walls placed.
pub fn build_maze<R, F>(
    rng: &mut R,
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
    walls: &mut WallSet,
    algorithm: MazeAlgorithm,
    observer: F,
) -> usize
where
    R: Rng + ?Sized,
    F: FnMut(WallEvent),
{
    debug_assert!(grid.contains(start), "start {start} is out of bounds");
    debug_assert!(grid.contains(goal), "goal {goal} is out of bounds");
    let mut carver = Carver {
        grid,
        start,
        goal,
        walls,
        clock: OrderClock::default(),
        observer,
        placed: 0,
    };
    carver.border();
    let interior = Region::new(1, 1, grid.rows() as i32 - 2, grid.columns() as i32 - 2);
    divide(&mut carver, rng, algorithm.layers(), interior);
    info!(
        "{algorithm} placed {} walls on a {}x{} grid",
        carver.placed,
        grid.rows(),
        grid.columns()
    );
    carver.placed
}

/// Owns the randomness of maze builds, so a seeded generator replays the same mazes.
#[derive(Clone, Debug)]
pub struct MazeGenerator<R> {
    rng: R,
}

impl MazeGenerator<StdRng> {
    pub fn seeded(seed: u64) -> MazeGenerator<StdRng> {
        MazeGenerator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> MazeGenerator<R> {
        MazeGenerator { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn build_maze(
        &mut self,
        grid: &Grid,
        start: Coordinate,
        goal: Coordinate,
        walls: &mut WallSet,
        algorithm: MazeAlgorithm,
    ) -> Trace<WallEvent> {
        let mut trace = Trace::new();
        self.build_maze_with(grid, start, goal, walls, algorithm, |e| trace.record(e));
        trace
    }

    pub fn build_maze_with<F: FnMut(WallEvent)>(
        &mut self,
        grid: &Grid,
        start: Coordinate,
        goal: Coordinate,
        walls: &mut WallSet,
        algorithm: MazeAlgorithm,
        observer: F,
    ) -> usize {
        build_maze(&mut self.rng, grid, start, goal, walls, algorithm, observer)
    }
}
