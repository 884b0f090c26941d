use maze_search::components::Components;
use maze_search::{solve, MazeGrid, SearchError, Strategy};

// The goal sits in a sealed room. The search expands every cell reachable
// from the start exactly once before reporting that there is no solution.
//  ______
// |A   # |
// |    #B|
// |    ##|
//  ______

fn main() {
    let grid: MazeGrid = "A   # \n    #B\n    ##".parse().unwrap();
    let components = Components::new(&grid);
    println!("{}", grid);
    println!(
        "Goal reachable: {}; cells reachable from start: {}",
        components.reachable(&grid.start(), &grid.goal()),
        components.component_size(&grid.start())
    );
    match solve(&grid, Strategy::DepthFirst) {
        Err(SearchError::NoSolution { expanded }) => {
            println!("No solution after expanding {} states", expanded)
        }
        other => println!("Unexpected outcome: {:?}", other),
    }
}
