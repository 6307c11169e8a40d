use itertools::Itertools;

use crate::coordinate::{Coordinate, DirectedCoordinate, Direction};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rewrites every direction as the step taken from the previous entry. The first entry gets
/// [Direction::None].
pub fn annotate_directions(steps: &mut [DirectedCoordinate]) {
    if let Some(first) = steps.first_mut() {
        first.direction = Direction::None;
    }
    for i in 1..steps.len() {
        steps[i].direction = steps[i - 1].coordinate.direction_to(&steps[i].coordinate);
    }
}

/// The line segment drawn through an interior path cell, named by the two cell sides it joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathGlyph {
    Vertical,
    Horizontal,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl PathGlyph {
    /// The glyph joining two sides of a cell. `None` for two equal sides or [Direction::None].
    pub fn joining(a: Direction, b: Direction) -> Option<PathGlyph> {
        use Direction as D;
        match (a, b) {
            (D::Up, D::Down) | (D::Down, D::Up) => Some(PathGlyph::Vertical),
            (D::Left, D::Right) | (D::Right, D::Left) => Some(PathGlyph::Horizontal),
            (D::Up, D::Left) | (D::Left, D::Up) => Some(PathGlyph::UpLeft),
            (D::Up, D::Right) | (D::Right, D::Up) => Some(PathGlyph::UpRight),
            (D::Down, D::Left) | (D::Left, D::Down) => Some(PathGlyph::DownLeft),
            (D::Down, D::Right) | (D::Right, D::Down) => Some(PathGlyph::DownRight),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PathGlyph::Vertical => '│',
            PathGlyph::Horizontal => '─',
            PathGlyph::UpLeft => '┘',
            PathGlyph::UpRight => '└',
            PathGlyph::DownLeft => '┐',
            PathGlyph::DownRight => '┌',
        }
    }
}

/// A route from start to goal, both included. Each entry records the direction it was entered
/// from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    steps: Vec<DirectedCoordinate>,
}

impl Path {
    pub fn new(mut steps: Vec<DirectedCoordinate>) -> Path {
        annotate_directions(&mut steps);
        Path { steps }
    }

    pub fn from_coordinates<I: IntoIterator<Item = Coordinate>>(coordinates: I) -> Path {
        Path::new(coordinates.into_iter().map(DirectedCoordinate::from).collect())
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of moves, one less than [Path::len].
    pub fn edges(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn steps(&self) -> &[DirectedCoordinate] {
        &self.steps
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps.iter().map(|s| s.coordinate)
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.steps.first().map(|s| s.coordinate)
    }

    pub fn goal(&self) -> Option<Coordinate> {
        self.steps.last().map(|s| s.coordinate)
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        self.steps.iter().any(|s| s.coordinate == *c)
    }

    /// Whether every move is a single orthogonal step.
    pub fn is_connected(&self) -> bool {
        self.steps
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.coordinate.manhattan_distance(&b.coordinate) == 1)
    }

    /// Glyphs for the interior cells, start and goal excluded.
    pub fn glyphs(&self) -> Vec<(Coordinate, PathGlyph)> {
        self.steps
            .iter()
            .skip(1)
            .tuple_windows()
            .filter_map(|(cur, next)| {
                PathGlyph::joining(cur.direction.opposite(), next.direction)
                    .map(|glyph| (cur.coordinate, glyph))
            })
            .collect()
    }

    pub fn into_steps(self) -> Vec<DirectedCoordinate> {
        self.steps
    }
}
