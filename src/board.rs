use core::fmt;

use fxhash::FxHashMap;
use rand::Rng;

use crate::coordinate::Coordinate;
use crate::error::GridError;
use crate::grid::{Grid, WallSet};
use crate::maze::{self, MazeAlgorithm};
use crate::path::Path;
use crate::search::{search, Algorithm, Search};
use crate::trace::{Trace, WallEvent};
use crate::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// A grid with a start, a goal and walls, as edited by a user.
///
/// Running a search locks the board: walls can not be changed and no other search can run until
/// [Board::reset_path] or [Board::reset_board] is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    start: Coordinate,
    goal: Coordinate,
    walls: WallSet,
    locked: bool,
}

impl Default for Board {
    /// A 15x15 board with the start and goal in opposite corners of the interior.
    fn default() -> Board {
        let start = Coordinate::new(1, 1);
        let goal = Coordinate::new(DEFAULT_ROWS as i32 - 2, DEFAULT_COLUMNS as i32 - 2);
        Board {
            grid: Grid::new(DEFAULT_ROWS, DEFAULT_COLUMNS),
            start,
            goal,
            walls: WallSet::new(),
            locked: false,
        }
    }
}

impl Board {
    pub fn new(
        rows: usize,
        columns: usize,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Board, GridError> {
        let grid = Grid::try_new(rows, columns)?;
        grid.check(start)?;
        grid.check(goal)?;
        Ok(Board {
            grid,
            start,
            goal,
            walls: WallSet::new(),
            locked: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn editable(&self, c: Coordinate) -> Result<(), GridError> {
        if self.locked {
            return Err(GridError::BoardLocked);
        }
        self.grid.check(c)?;
        if c == self.start || c == self.goal {
            return Err(GridError::ReservedCell(c));
        }
        Ok(())
    }

    /// Flips a cell between wall and open. Returns whether the cell is a wall now.
    pub fn toggle_wall(&mut self, c: Coordinate) -> Result<bool, GridError> {
        self.editable(c)?;
        Ok(self.walls.toggle(c))
    }

    /// Makes `c` a wall. Returns whether it was open before.
    pub fn build_wall(&mut self, c: Coordinate) -> Result<bool, GridError> {
        self.editable(c)?;
        Ok(self.walls.insert(c))
    }

    /// Generates a maze on top of the current walls.
    pub fn build_maze<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        algorithm: MazeAlgorithm,
    ) -> Result<Trace<WallEvent>, GridError> {
        if self.locked {
            return Err(GridError::BoardLocked);
        }
        let mut trace = Trace::new();
        maze::build_maze(
            rng,
            &self.grid,
            self.start,
            self.goal,
            &mut self.walls,
            algorithm,
            |e| trace.record(e),
        );
        Ok(trace)
    }

    /// Runs `algorithm` and locks the board.
    pub fn visualize(&mut self, algorithm: Algorithm) -> Result<Search, GridError> {
        if self.locked {
            return Err(GridError::BoardLocked);
        }
        let run = search(&self.grid, self.start, self.goal, &self.walls, algorithm);
        self.locked = true;
        Ok(run)
    }

    /// Forgets the last search, keeping the walls.
    pub fn reset_path(&mut self) {
        self.locked = false;
    }

    pub fn reset_board(&mut self) {
        self.walls.clear();
        self.locked = false;
    }

    /// Whether any search could connect the start to the goal.
    pub fn reachable(&self) -> bool {
        self.grid
            .components(&self.walls)
            .reachable(&self.start, &self.goal)
    }

    /// Renders the board with `S`, `G`, `#` and `.`, drawing the interior cells of `path` with
    /// their line glyphs.
    pub fn render_with_path(&self, path: Option<&Path>) -> String {
        let glyphs: FxHashMap<Coordinate, char> = path
            .map(|p| p.glyphs().into_iter().map(|(c, g)| (c, g.as_char())).collect())
            .unwrap_or_default();
        let mut out = String::with_capacity(self.grid.len() + self.grid.rows());
        for row in 0..self.grid.rows() as i32 {
            for column in 0..self.grid.columns() as i32 {
                let c = Coordinate::new(row, column);
                let cell = if c == self.start {
                    'S'
                } else if c == self.goal {
                    'G'
                } else if self.walls.contains(&c) {
                    '#'
                } else if let Some(&glyph) = glyphs.get(&c) {
                    glyph
                } else {
                    '.'
                };
                out.push(cell);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_with_path(None))
    }
}
