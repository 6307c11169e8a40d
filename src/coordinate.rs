use core::fmt;
use std::str::FromStr;

use crate::error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by row and column. Both axes start at 0 in the top left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub const fn new(row: i32, column: i32) -> Coordinate {
        Coordinate { row, column }
    }

    /// The coordinate one step away in the given direction. [Direction::None] stays in place.
    pub fn step(&self, direction: Direction) -> Coordinate {
        let (d_row, d_column) = direction.delta();
        Coordinate::new(self.row + d_row, self.column + d_column)
    }

    /// Computed in `i64`, so any two coordinates of a grid are in range.
    pub fn manhattan_distance(&self, other: &Coordinate) -> i64 {
        let d_row = i64::from(self.row) - i64::from(other.row);
        let d_column = i64::from(self.column) - i64::from(other.column);
        d_row.abs() + d_column.abs()
    }

    /// Euclidean distance without the square root. Only used to order nodes, so the
    /// root is never taken. Computed in `i64`: a single axis difference past 46_340 already
    /// squares beyond `i32::MAX`.
    pub fn squared_euclidean_distance(&self, other: &Coordinate) -> i64 {
        let d_row = i64::from(self.row) - i64::from(other.row);
        let d_column = i64::from(self.column) - i64::from(other.column);
        d_column * d_column + d_row * d_row
    }

    /// The direction of a single orthogonal step from `self` to `other`, or
    /// [Direction::None] if the two are not orthogonally adjacent.
    pub fn direction_to(&self, other: &Coordinate) -> Direction {
        match (other.row - self.row, other.column - self.column) {
            (-1, 0) => Direction::Up,
            (1, 0) => Direction::Down,
            (0, -1) => Direction::Left,
            (0, 1) => Direction::Right,
            _ => Direction::None,
        }
    }
}

/// Formats as the canonical `row_column` key.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.column)
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let malformed = || GridError::MalformedKey(key.to_owned());
        let (row, column) = key.split_once('_').ok_or_else(malformed)?;
        let row = row.parse::<i32>().map_err(|_| malformed())?;
        let column = column.parse::<i32>().map_err(|_| malformed())?;
        Ok(Coordinate::new(row, column))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, column): (i32, i32)) -> Self {
        Coordinate::new(row, column)
    }
}

/// How a cell was entered. Only used to orient the drawn path, never for search decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    #[default]
    None,
}

impl Direction {
    /// Neighbour generation order. DFS exploration order and priority tie-breaking depend on it.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, column)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::None => (0, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::None => Direction::None,
        }
    }

    pub fn vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A [Coordinate] together with the [Direction] it was reached from.
///
/// Equality includes the direction; compare [DirectedCoordinate::coordinate] for position only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedCoordinate {
    pub coordinate: Coordinate,
    pub direction: Direction,
}

impl DirectedCoordinate {
    pub fn new(coordinate: Coordinate, direction: Direction) -> DirectedCoordinate {
        DirectedCoordinate {
            coordinate,
            direction,
        }
    }

    pub fn row(&self) -> i32 {
        self.coordinate.row
    }

    pub fn column(&self) -> i32 {
        self.coordinate.column
    }
}

impl From<Coordinate> for DirectedCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        DirectedCoordinate::new(coordinate, Direction::None)
    }
}
