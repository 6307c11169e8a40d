use maze_pathfinding::{search, Algorithm, Coordinate, Grid, VisitKind, WallSet};

// Runs every search on the same grid with shape
//  _______
// |S      |
// |#####  |
// |       |
// |  #####|
// |      G|
//  _______
// and compares how much of the grid each one explores.
fn main() {
    let grid = Grid::new(5, 7);
    let mut walls = WallSet::new();
    walls.extend((0..5).map(|column| Coordinate::new(1, column)));
    walls.extend((2..7).map(|column| Coordinate::new(3, column)));
    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(4, 6);
    println!("start and goal connected: {}", grid.components(&walls).reachable(&start, &goal));

    for algorithm in Algorithm::ALL {
        let run = search(&grid, start, goal, &walls, algorithm);
        let expanded = run.trace.coordinates(VisitKind::Expanded).count();
        let moves = run.result.path().map(|p| p.edges());
        println!(
            "{:<26} expanded {expanded:>2}, moves {:?}, optimal {}",
            algorithm.label(),
            moves,
            algorithm.is_optimal()
        );
    }
}
