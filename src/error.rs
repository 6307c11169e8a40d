use core::fmt;

use crate::coordinate::Coordinate;

/// Caller mistakes. A search that finds nothing is not an error, see [crate::SearchResult].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    InvalidDimensions { rows: usize, columns: usize },
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        columns: usize,
    },
    /// A wall key that is not of the form `row_column`.
    MalformedKey(String),
    UnknownAlgorithm(String),
    /// Start and goal cells cannot be turned into walls.
    ReservedCell(Coordinate),
    /// The board has a search result on it and must be reset before it is edited or searched again.
    BoardLocked,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, columns } => {
                write!(f, "invalid grid dimensions {rows}x{columns}")
            }
            GridError::OutOfBounds {
                coordinate,
                rows,
                columns,
            } => write!(
                f,
                "coordinate ({}, {}) is outside the {rows}x{columns} grid",
                coordinate.row, coordinate.column
            ),
            GridError::MalformedKey(key) => write!(f, "malformed wall key {key:?}"),
            GridError::UnknownAlgorithm(name) => write!(f, "unknown algorithm {name:?}"),
            GridError::ReservedCell(c) => {
                write!(f, "({}, {}) is the start or the goal", c.row, c.column)
            }
            GridError::BoardLocked => write!(f, "board has a result on it, reset the path first"),
        }
    }
}

impl std::error::Error for GridError {}
