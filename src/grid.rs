use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coordinate::{Coordinate, DirectedCoordinate, Direction};
use crate::error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// The rectangular coordinate space searched and carved by this crate. Cells are 4-connected:
/// only orthogonal moves are possible and every move costs 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Panics on a zero dimension, use [Grid::try_new] for unchecked input.
    pub fn new(rows: usize, columns: usize) -> Grid {
        match Grid::try_new(rows, columns) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(rows: usize, columns: usize) -> Result<Grid, GridError> {
        if rows == 0 || columns == 0 || rows > i32::MAX as usize || columns > i32::MAX as usize {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        Ok(Grid { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Always false, both dimensions are at least 1.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.row >= 0 && c.column >= 0 && (c.row as usize) < self.rows && (c.column as usize) < self.columns
    }

    pub fn check(&self, c: Coordinate) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coordinate: c,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// The in-bounds orthogonal neighbours of `c`, in the order up, right, down, left. Walls are
    /// not filtered out here.
    pub fn neighbours(&self, c: &Coordinate) -> SmallVec<[DirectedCoordinate; 4]> {
        Direction::ORTHOGONAL
            .into_iter()
            .map(|dir| DirectedCoordinate::new(c.step(dir), dir))
            .filter(|n| self.contains(n.coordinate))
            .collect()
    }

    /// Row-major index of an in-bounds coordinate.
    pub fn index(&self, c: &Coordinate) -> usize {
        debug_assert!(self.contains(*c));
        c.row as usize * self.columns + c.column as usize
    }

    pub fn coordinate(&self, index: usize) -> Coordinate {
        Coordinate::new((index / self.columns) as i32, (index % self.columns) as i32)
    }

    /// All cells in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.len()).map(move |ix| self.coordinate(ix))
    }

    /// Links up open neighbours into connected components.
    pub fn components(&self, walls: &WallSet) -> Components {
        let mut union_find = UnionFind::new(self.len());
        for point in self.coordinates() {
            if walls.contains(&point) {
                continue;
            }
            let parent_ix = self.index(&point);
            [point.step(Direction::Down), point.step(Direction::Right)]
                .into_iter()
                .filter(|p| self.contains(*p) && !walls.contains(p))
                .for_each(|p| {
                    union_find.union(parent_ix, self.index(&p));
                });
        }
        Components {
            grid: *self,
            union_find,
        }
    }
}

/// Connected components of the open cells of a grid, see [Grid::components].
#[derive(Clone, Debug)]
pub struct Components {
    grid: Grid,
    union_find: UnionFind<usize>,
}

impl Components {
    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn component(&self, c: &Coordinate) -> usize {
        self.union_find.find(self.grid.index(c))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        self.grid.contains(*start)
            && self.grid.contains(*goal)
            && self
                .union_find
                .equiv(self.grid.index(start), self.grid.index(goal))
    }
}

/// The impassable cells of a board. Iteration follows placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallSet {
    walls: FxIndexSet<Coordinate>,
}

impl WallSet {
    pub fn new() -> WallSet {
        WallSet::default()
    }

    /// Builds a wall set from `row_column` keys.
    pub fn from_keys<I, S>(keys: I) -> Result<WallSet, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| key.as_ref().parse::<Coordinate>())
            .collect()
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        self.walls.contains(c)
    }

    /// Returns whether the wall is new.
    pub fn insert(&mut self, c: Coordinate) -> bool {
        self.walls.insert(c)
    }

    /// Returns whether there was a wall.
    pub fn remove(&mut self, c: &Coordinate) -> bool {
        self.walls.shift_remove(c)
    }

    /// Flips a cell between wall and open and returns whether it is a wall now.
    pub fn toggle(&mut self, c: Coordinate) -> bool {
        if self.remove(&c) {
            false
        } else {
            self.insert(c)
        }
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn clear(&mut self) {
        self.walls.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.walls.iter()
    }

    /// The walls as `row_column` keys.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.walls.iter().map(|c| c.to_string())
    }
}

impl FromIterator<Coordinate> for WallSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        WallSet {
            walls: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coordinate> for WallSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.walls.extend(iter);
    }
}

impl<'a> IntoIterator for &'a WallSet {
    type Item = &'a Coordinate;
    type IntoIter = indexmap::set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::try_new(0, 4),
            Err(GridError::InvalidDimensions {
                rows: 0,
                columns: 4
            })
        );
        assert!(Grid::try_new(3, 0).is_err());
        let single = Grid::try_new(1, 1).unwrap();
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
    }

    #[test]
    fn neighbour_order_is_up_right_down_left() {
        let grid = Grid::new(3, 3);
        let dirs = grid
            .neighbours(&Coordinate::new(1, 1))
            .iter()
            .map(|n| n.direction)
            .collect::<Vec<_>>();
        assert_eq!(dirs, Direction::ORTHOGONAL.to_vec());
        let coords = grid
            .neighbours(&Coordinate::new(1, 1))
            .iter()
            .map(|n| n.coordinate)
            .collect::<Vec<_>>();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0)
            ]
        );
    }

    #[test]
    fn corner_has_two_neighbours() {
        let grid = Grid::new(3, 4);
        let n = grid.neighbours(&Coordinate::new(0, 0));
        assert_eq!(n.len(), 2);
        assert_eq!(n[0].direction, Direction::Right);
        assert_eq!(n[1].direction, Direction::Down);
        assert!(grid.neighbours(&Coordinate::new(2, 3)).len() == 2);
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(3, 5);
        let c = Coordinate::new(2, 1);
        assert_eq!(grid.index(&c), 11);
        assert_eq!(grid.coordinate(11), c);
        assert_eq!(grid.coordinates().count(), 15);
    }

    #[test]
    fn toggle_and_keys() {
        let mut walls = WallSet::new();
        assert!(walls.toggle(Coordinate::new(1, 2)));
        assert!(walls.insert(Coordinate::new(0, 0)));
        assert!(!walls.insert(Coordinate::new(0, 0)));
        assert_eq!(walls.keys().collect::<Vec<_>>(), vec!["1_2", "0_0"]);
        assert!(!walls.toggle(Coordinate::new(1, 2)));
        assert_eq!(walls.len(), 1);
        let parsed = WallSet::from_keys(["0_0"]).unwrap();
        assert_eq!(parsed, walls);
        assert!(WallSet::from_keys(["0_0", "x"]).is_err());
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let grid = Grid::new(2, 3);
        let walls: WallSet = [Coordinate::new(0, 1), Coordinate::new(1, 1)]
            .into_iter()
            .collect();
        let components = grid.components(&walls);
        let p1 = Coordinate::new(0, 0);
        let p2 = Coordinate::new(1, 0);
        let p3 = Coordinate::new(0, 2);
        assert!(components.reachable(&p1, &p2));
        assert!(!components.reachable(&p1, &p3));
        assert!(!components.reachable(&p1, &Coordinate::new(0, 1)));
        assert!(!components.reachable(&p1, &Coordinate::new(5, 5)));
        assert_ne!(components.component(&p1), components.component(&p3));
    }
}
