use maze_search::{Maze, Strategy};

// In this example a path is found through the maze
//  _____
// |A#   |
// | # # |
// |   #B|
//  _____
// where
// - # marks a wall
// - A marks the start
// - B marks the goal
//
// Moves are restricted to the 4-neighborhood.

const MAZE: &str = "\
A#
 # # 
   #B";

fn main() {
    let mut maze = Maze::new(MAZE.parse().unwrap());
    let solution = maze.solve(Strategy::BreadthFirst).unwrap().clone();
    println!("{}", maze);
    println!("Actions: {}", solution);
    println!("Path:");
    for (action, cell) in solution.steps() {
        println!("{:>5} -> {}", action, cell);
    }
}
