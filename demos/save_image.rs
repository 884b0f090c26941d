use maze_search::render::{save_image, DEFAULT_CELL_SIZE};
use maze_search::{Maze, Strategy};

// Solves a small maze and writes it to maze_solution.png with the path in blue.

const MAZE: &str = "\
##    #
## ## #
#B #  #
# ## ##
     ##
A######";

fn main() {
    let mut maze = Maze::new(MAZE.parse().unwrap());
    maze.solve(Strategy::DepthFirst).unwrap();
    println!("{}", maze);
    save_image(
        maze.grid(),
        maze.solution(),
        true,
        DEFAULT_CELL_SIZE,
        "maze_solution.png",
    )
    .unwrap();
}
