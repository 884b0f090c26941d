use maze_search::{MazeGrid, SearchContext, Strategy};

// Both strategies share the same search loop. Breadth-first always returns a
// path with the fewest steps, depth-first returns whichever path the fixed
// up/down/left/right expansion order stumbles upon first.

const MAZE: &str = "\
###                 #########
#   ###################   # #
# ####                # # # #
# ################### # # # #
#                     # # # #
##################### # # # #
#   ##                # # # #
# # ## ### ## ######### # # #
# #    #   ##B#         # # #
# # ## ################ # # #
### ##             #### # # #
### ############## ## # # # #
###             ##    # # # #
###### ######## ####### # # #
###### ####             #   #
A      ######################";

fn main() {
    let grid: MazeGrid = MAZE.parse().unwrap();
    for strategy in Strategy::ALL {
        let mut context = SearchContext::new(strategy);
        match context.run(&grid) {
            Ok(solution) => println!(
                "{:>13}: {} steps, {} states explored, {} nodes created",
                strategy,
                solution.len(),
                context.expanded(),
                context.nodes_created()
            ),
            Err(err) => println!("{:>13}: {}", strategy, err),
        }
    }
}
