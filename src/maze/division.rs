//! Recursive division. A region is cut by a wall on an even line with a single opening on an odd
//! line, then each side is divided again until no room is left.
use std::cmp::Ordering;

use rand::Rng;

use super::random::{even_rand_between, odd_rand_between};
use super::Carver;
use crate::coordinate::Coordinate;
use crate::trace::WallEvent;
use crate::DOUBLE_WALL_STEP;

/// The rectangle `[y, max_y] x [x, max_x]`, bounds included. Rows are `y`, columns are `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub y: i32,
    pub x: i32,
    pub max_y: i32,
    pub max_x: i32,
}

impl Region {
    pub fn new(y: i32, x: i32, max_y: i32, max_x: i32) -> Region {
        Region { y, x, max_y, max_x }
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.y
    }
}

/// Wall thickness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layers {
    Single,
    Double,
}

impl Layers {
    pub fn thickness(self) -> i32 {
        match self {
            Layers::Single => 1,
            Layers::Double => 2,
        }
    }

    /// Distance from a wall line to the nearest line of the sub-regions on either side.
    pub fn step(self) -> i32 {
        match self {
            Layers::Single => 1,
            Layers::Double => DOUBLE_WALL_STEP,
        }
    }

    pub fn too_small(self, region: &Region) -> bool {
        match self {
            Layers::Single => region.width() < 1 || region.height() < 1,
            Layers::Double => region.width() <= 2 || region.height() <= 2,
        }
    }
}

pub(super) fn divide<R, F>(carver: &mut Carver<'_, F>, rng: &mut R, layers: Layers, region: Region)
where
    R: Rng + ?Sized,
    F: FnMut(WallEvent),
{
    if layers.too_small(&region) {
        return;
    }
    // Wide regions are cut vertically, tall ones horizontally.
    let horizontal = match region.width().cmp(&region.height()) {
        Ordering::Greater => false,
        Ordering::Less => true,
        Ordering::Equal => rng.gen_bool(0.5),
    };
    let step = layers.step();
    if horizontal {
        let Some(wall_y) = even_rand_between(rng, region.y, region.max_y) else {
            return;
        };
        let Some(opening_x) = odd_rand_between(rng, region.x, region.max_x) else {
            return;
        };
        for i in region.x..=region.max_x {
            if i == opening_x || spares_horizontal(carver, layers, wall_y, i) {
                continue;
            }
            let order = carver.clock.tick();
            for layer in 0..layers.thickness() {
                carver.place(Coordinate::new(wall_y + layer, i), order);
            }
        }
        divide(
            carver,
            rng,
            layers,
            Region::new(region.y, region.x, wall_y - step, region.max_x),
        );
        divide(
            carver,
            rng,
            layers,
            Region::new(wall_y + step, region.x, region.max_y, region.max_x),
        );
    } else {
        let Some(wall_x) = even_rand_between(rng, region.x, region.max_x) else {
            return;
        };
        let Some(opening_y) = odd_rand_between(rng, region.y, region.max_y) else {
            return;
        };
        for i in region.y..=region.max_y {
            if i == opening_y || spares_vertical(carver, layers, wall_x, i) {
                continue;
            }
            let order = carver.clock.tick();
            for layer in 0..layers.thickness() {
                carver.place(Coordinate::new(i, wall_x + layer), order);
            }
        }
        divide(
            carver,
            rng,
            layers,
            Region::new(region.y, region.x, region.max_y, wall_x - step),
        );
        divide(
            carver,
            rng,
            layers,
            Region::new(region.y, wall_x + step, region.max_y, region.max_x),
        );
    }
}

/// Column `i` of a horizontal wall at `wall_y` stays open when the start sits on the wall or just
/// below it, or the goal sits on the wall or just above it.
fn spares_horizontal<F>(carver: &Carver<'_, F>, layers: Layers, wall_y: i32, i: i32) -> bool {
    let t = layers.thickness();
    let (start, goal) = (carver.start, carver.goal);
    (start.column == i && (wall_y..=wall_y + t).contains(&start.row))
        || (goal.column == i && (wall_y - t..wall_y + t).contains(&goal.row))
}

/// Row `i` of a vertical wall at `wall_x` stays open when the start is on a wall column at row
/// `i` or `i + 1`, or the goal is on a wall column at row `i - 1` or `i`.
fn spares_vertical<F>(carver: &Carver<'_, F>, layers: Layers, wall_x: i32, i: i32) -> bool {
    let (start, goal) = (carver.start, carver.goal);
    (wall_x..wall_x + layers.thickness()).any(|c| {
        (start.column == c && (i..=i + 1).contains(&start.row))
            || (goal.column == c && (i - 1..=i).contains(&goal.row))
    })
}
