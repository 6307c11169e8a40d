use maze_pathfinding::{Algorithm, Board, Coordinate};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighbourhood

fn main() {
    let mut board = Board::new(3, 3, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
    board.build_wall(Coordinate::new(1, 1)).unwrap();
    println!("{board}");
    let run = board.visualize(Algorithm::BreadthFirstSearch).unwrap();
    match run.result.path() {
        Some(path) => {
            println!("Path:");
            for step in path.steps() {
                println!("{} entered moving {:?}", step.coordinate, step.direction);
            }
        }
        None => println!("{}", run.result.message().unwrap_or_default()),
    }
}
