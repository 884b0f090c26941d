//! Console and PNG output for solved (or unsolved) mazes.
use std::path::Path;

use fxhash::FxHashSet;
use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{ImageResult, Rgba, RgbaImage};
use itertools::Itertools;
use log::info;

use crate::{Cell, MazeGrid, Solution};

pub const WALL_CHAR: char = '█';
pub const PATH_CHAR: char = '*';

/// Side length in pixels of one maze cell in rendered images.
pub const DEFAULT_CELL_SIZE: u32 = 20;

const WALL: Rgba<u8> = Rgba([0, 0, 0, 255]);
const START: Rgba<u8> = Rgba([0, 128, 0, 255]);
const GOAL: Rgba<u8> = Rgba([255, 0, 0, 255]);
const PATH: Rgba<u8> = Rgba([0, 0, 255, 255]);
const FLOOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const EDGE: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// What a cell shows up as, in order of precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Wall,
    Start,
    Goal,
    Path,
    Floor,
}

fn tile(grid: &MazeGrid, path: &FxHashSet<Cell>, cell: Cell) -> Tile {
    if grid.is_wall(cell) {
        Tile::Wall
    } else if cell == grid.start() {
        Tile::Start
    } else if cell == grid.goal() {
        Tile::Goal
    } else if path.contains(&cell) {
        Tile::Path
    } else {
        Tile::Floor
    }
}

fn path_cells(solution: Option<&Solution>) -> FxHashSet<Cell> {
    solution
        .map(|s| s.cells().iter().copied().collect())
        .unwrap_or_default()
}

/// One line per row: `█` for walls, `A` and `B` for the markers, `*` for cells on the
/// solution path and a space for everything else.
pub fn render_text(grid: &MazeGrid, solution: Option<&Solution>) -> String {
    let path = path_cells(solution);
    (0..grid.height() as i32)
        .map(|row| {
            (0..grid.width() as i32)
                .map(|col| match tile(grid, &path, Cell::new(row, col)) {
                    Tile::Wall => WALL_CHAR,
                    Tile::Start => crate::parse::START,
                    Tile::Goal => crate::parse::GOAL,
                    Tile::Path => PATH_CHAR,
                    Tile::Floor => ' ',
                })
                .chain(Some('\n'))
                .collect::<String>()
        })
        .collect()
}

/// Pixel dimensions of the rendered grid, or a limit error when they do not fit a `u32`
/// or the pixel buffer would not fit in memory addressing.
fn image_dimensions(grid: &MazeGrid, size: u32) -> ImageResult<(u32, u32)> {
    let scale = |cells: usize| u32::try_from(cells).ok()?.checked_mul(size);
    match (scale(grid.width()), scale(grid.height())) {
        (Some(width), Some(height))
            if (u64::from(width) * u64::from(height))
                .checked_mul(4)
                .is_some_and(|bytes| usize::try_from(bytes).is_ok()) =>
        {
            Ok((width, height))
        }
        _ => Err(ImageError::Limits(LimitError::from_kind(
            LimitErrorKind::DimensionError,
        ))),
    }
}

/// Draws every cell as a `cell_size` square with a one pixel gray border. Walls are black,
/// the start green, the goal red and, when `show_solution` is set, path cells blue.
pub fn render_image(
    grid: &MazeGrid,
    solution: Option<&Solution>,
    show_solution: bool,
    cell_size: u32,
) -> ImageResult<RgbaImage> {
    let size = cell_size.max(1);
    let (width, height) = image_dimensions(grid, size)?;
    let path = if show_solution {
        path_cells(solution)
    } else {
        FxHashSet::default()
    };
    let mut img = RgbaImage::from_pixel(width, height, FLOOR);
    for cell in (0..grid.height() as i32)
        .cartesian_product(0..grid.width() as i32)
        .map(|(row, col)| Cell::new(row, col))
    {
        let fill = match tile(grid, &path, cell) {
            Tile::Wall => WALL,
            Tile::Start => START,
            Tile::Goal => GOAL,
            Tile::Path => PATH,
            Tile::Floor => FLOOR,
        };
        let (x0, y0) = (cell.col as u32 * size, cell.row as u32 * size);
        for dy in 0..size {
            for dx in 0..size {
                let border = dx == 0 || dy == 0 || dx == size - 1 || dy == size - 1;
                img.put_pixel(x0 + dx, y0 + dy, if border { EDGE } else { fill });
            }
        }
    }
    Ok(img)
}

/// Renders with [render_image] and writes the result, format chosen by file extension.
pub fn save_image<P: AsRef<Path>>(
    grid: &MazeGrid,
    solution: Option<&Solution>,
    show_solution: bool,
    cell_size: u32,
    path: P,
) -> ImageResult<()> {
    let path = path.as_ref();
    render_image(grid, solution, show_solution, cell_size)?.save(path)?;
    info!("Maze image saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve, Strategy};

    #[test]
    fn text_marks_solution_path() {
        let grid: MazeGrid = "A  \n## \nB  ".parse().unwrap();
        let solution = solve(&grid, Strategy::BreadthFirst).unwrap();
        assert_eq!(render_text(&grid, Some(&solution)), "A**\n██*\nB**\n");
        assert_eq!(grid.to_string(), "A  \n██ \nB  \n");
    }

    #[test]
    fn image_colors_cells() {
        let grid: MazeGrid = "A#B".parse().unwrap();
        let img = render_image(&grid, None, true, 4).unwrap();
        assert_eq!(img.dimensions(), (12, 4));
        // Cell centres carry the fill, the outermost ring the border.
        assert_eq!(*img.get_pixel(1, 1), START);
        assert_eq!(*img.get_pixel(5, 2), WALL);
        assert_eq!(*img.get_pixel(10, 2), GOAL);
        assert_eq!(*img.get_pixel(4, 0), EDGE);
    }

    #[test]
    fn hidden_solution_is_not_drawn() {
        let grid: MazeGrid = "A B".parse().unwrap();
        let solution = solve(&grid, Strategy::DepthFirst).unwrap();
        let shown = render_image(&grid, Some(&solution), true, 3).unwrap();
        let hidden = render_image(&grid, Some(&solution), false, 3).unwrap();
        assert_eq!(*shown.get_pixel(4, 1), PATH);
        assert_eq!(*hidden.get_pixel(4, 1), FLOOR);
    }

    /// Cell sizes that overflow the image dimensions are reported, not drawn.
    #[test]
    fn oversized_cells_are_rejected() {
        let grid: MazeGrid = "A#B".parse().unwrap();
        let err = render_image(&grid, None, true, u32::MAX).unwrap_err();
        assert!(matches!(err, ImageError::Limits(_)));
        let err = save_image(&grid, None, true, u32::MAX / 2, "unused.png").unwrap_err();
        assert!(matches!(err, ImageError::Limits(_)));
        assert!(render_image(&grid, None, true, 0).is_ok());
    }
}
