//! The plain-text maze format.
//!
//! Every line is a row and every character a cell: `A` marks the start, `B` the goal, a
//! space is open floor and anything else is a wall. The text must contain exactly one `A`
//! and exactly one `B`. The width is that of the longest line; shorter lines are padded with
//! open cells rather than rejected.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::{Cell, MazeError, MazeGrid};

pub const START: char = 'A';
pub const GOAL: char = 'B';
pub const OPEN: char = ' ';

/// Parses a maze in the text format described in the [module docs](self).
pub fn parse_maze(contents: &str) -> Result<MazeGrid, MazeError> {
    match contents.matches(START).count() {
        0 => return Err(MazeError::MissingStart),
        1 => {}
        n => return Err(MazeError::MultipleStarts(n)),
    }
    match contents.matches(GOAL).count() {
        0 => return Err(MazeError::MissingGoal),
        1 => {}
        n => return Err(MazeError::MultipleGoals(n)),
    }

    let mut start = None;
    let mut goal = None;
    let rows: Vec<Vec<bool>> = contents
        .lines()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| {
                    let cell = Cell::new(row as i32, col as i32);
                    match ch {
                        START => {
                            start = Some(cell);
                            false
                        }
                        GOAL => {
                            goal = Some(cell);
                            false
                        }
                        OPEN => false,
                        _ => true,
                    }
                })
                .collect()
        })
        .collect();

    let start = start.ok_or(MazeError::MissingStart)?;
    let goal = goal.ok_or(MazeError::MissingGoal)?;
    let grid = MazeGrid::from_rows(&rows, start, goal)?;
    debug!(
        "Parsed {}x{} maze, start {}, goal {}",
        grid.width(),
        grid.height(),
        start,
        goal
    );
    Ok(grid)
}

impl FromStr for MazeGrid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<MazeGrid, MazeError> {
        parse_maze(s)
    }
}

impl MazeGrid {
    /// Reads a maze file in the text format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MazeGrid, MazeError> {
        let path = path.as_ref();
        debug!("Reading maze from {}", path.display());
        parse_maze(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_and_walls() {
        let grid = parse_maze("##B\n#  \nA #\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.start(), Cell::new(2, 0));
        assert_eq!(grid.goal(), Cell::new(0, 2));
        assert!(grid.is_wall(Cell::new(0, 0)));
        assert!(grid.is_wall(Cell::new(2, 2)));
        assert!(grid.can_move_to(Cell::new(1, 1)));
    }

    /// Any character other than the markers and space counts as a wall.
    #[test]
    fn unknown_characters_are_walls() {
        let grid: MazeGrid = "A.x█B".parse().unwrap();
        assert_eq!(grid.width(), 5);
        for col in 1..4 {
            assert!(grid.is_wall(Cell::new(0, col)));
        }
    }

    #[test]
    fn short_lines_are_padded_open() {
        let grid = parse_maze("#####\nA\n#  B#").unwrap();
        assert_eq!(grid.width(), 5);
        for col in 0..5 {
            assert!(grid.can_move_to(Cell::new(1, col)));
        }
    }

    #[test]
    fn handles_crlf_line_endings() {
        let grid = parse_maze("A #\r\n  B\r\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.goal(), Cell::new(1, 2));
    }

    #[test]
    fn rejects_wrong_marker_counts() {
        assert!(matches!(parse_maze(""), Err(MazeError::MissingStart)));
        assert!(matches!(parse_maze("A  "), Err(MazeError::MissingGoal)));
        assert!(matches!(
            parse_maze("AA B"),
            Err(MazeError::MultipleStarts(2))
        ));
        assert!(matches!(
            parse_maze("A\nB\nB\nB"),
            Err(MazeError::MultipleGoals(3))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MazeGrid::from_file("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
    }
}
