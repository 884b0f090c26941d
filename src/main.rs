//! CLI entry point for the maze solver.
//!
//! Usage:
//!   maze_search <maze.txt> [options]
//!
//! Options:
//!   --strategy <dfs|bfs>    Frontier order (default: dfs)
//!   --image <path>          Also write a PNG rendering of the maze
//!   --cell-size <px>        Pixel size of one cell in the PNG, 1 to 256 (default: 20)
//!   --no-solution           Leave the path out of the PNG
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use maze_search::components::Components;
use maze_search::render::{save_image, DEFAULT_CELL_SIZE};
use maze_search::{Maze, SearchError, Strategy};

#[derive(Parser)]
#[command(name = "maze_search")]
#[command(about = "Solve a text maze with depth-first or breadth-first search")]
#[command(version)]
struct Cli {
    /// Maze file: `A` start, `B` goal, space open, anything else a wall
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Frontier order: dfs (stack) or bfs (queue)
    #[arg(long, default_value = "dfs")]
    strategy: Strategy,

    /// Write a PNG rendering of the maze to this path
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Pixel size of one maze cell in the PNG
    #[arg(
        long,
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=256)
    )]
    cell_size: u32,

    /// Leave the solution path out of the PNG
    #[arg(long)]
    no_solution: bool,
}

/// The line reporting how many states were expanded. Any error other than an exhausted
/// search is passed on.
fn explored_summary(
    outcome: Result<(), SearchError>,
    expanded: usize,
) -> Result<String, SearchError> {
    match outcome {
        Ok(()) => Ok(format!("Number of states explored: {expanded}")),
        Err(SearchError::NoSolution { expanded }) => Ok(format!(
            "Number of states explored before failure: {expanded}"
        )),
        Err(err @ SearchError::FrontierEmpty) => {
            error!("Search stopped early: {err}");
            Err(err)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut maze = Maze::from_file(&cli.file)?;
    let grid = maze.grid();
    if !Components::new(grid).reachable(&grid.start(), &grid.goal()) {
        info!("Goal is not connected to the start, search will exhaust the reachable area");
    }

    let outcome = maze.solve(cli.strategy).map(|_| ());
    println!("{}", explored_summary(outcome, maze.expanded())?);
    println!("\n{maze}");

    if let Some(path) = &cli.image {
        save_image(
            maze.grid(),
            maze.solution(),
            !cli.no_solution,
            cli.cell_size,
            path,
        )?;
    }
    outcome.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_expanded_states() {
        assert_eq!(
            explored_summary(Ok(()), 6),
            Ok("Number of states explored: 6".to_owned())
        );
        assert_eq!(
            explored_summary(Err(SearchError::NoSolution { expanded: 4 }), 4),
            Ok("Number of states explored before failure: 4".to_owned())
        );
        assert_eq!(
            explored_summary(Err(SearchError::FrontierEmpty), 0),
            Err(SearchError::FrontierEmpty)
        );
    }

    #[test]
    fn cell_size_is_bounded() {
        let cli = Cli::try_parse_from(["maze_search", "maze.txt"]).unwrap();
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(cli.strategy, Strategy::DepthFirst);
        let args = ["maze_search", "maze.txt", "--cell-size", "256"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.cell_size, 256);
        for size in ["0", "257", "4294967295"] {
            let args = ["maze_search", "maze.txt", "--cell-size", size];
            assert!(Cli::try_parse_from(args).is_err());
        }
    }
}
