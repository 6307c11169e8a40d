use maze_pathfinding::{Algorithm, Board, MazeAlgorithm, SearchResult, VisitKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Generates a maze on the default 15x15 board with each generator, prints the order the walls
// went up in and solves the maze with A*.
fn main() {
    for maze in MazeAlgorithm::ALL {
        let mut board = Board::default();
        let mut rng = StdRng::seed_from_u64(3);
        let trace = board.build_maze(&mut rng, maze).unwrap();
        println!("{maze}: {} walls", trace.len());
        let first = trace
            .iter()
            .take(8)
            .map(|e| format!("{}@{}", e.coordinate, e.order))
            .collect::<Vec<_>>();
        println!("first walls: {}", first.join(" "));

        let run = board.visualize(Algorithm::AStarAlgorithm).unwrap();
        let expanded = run.trace.coordinates(VisitKind::Expanded).count();
        match &run.result {
            SearchResult::Path(path) => {
                println!("{} moves after expanding {expanded} cells", path.edges());
                println!("{}", board.render_with_path(Some(path)));
            }
            result => println!("{}\n{board}", result.message().unwrap_or_default()),
        }
    }
}
