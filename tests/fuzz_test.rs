/// Fuzzes the search by checking on many random grids that a path is found exactly when the goal
/// shares a connected component with the start, that breadth-first paths are as short as an
/// independent distance computation says they can be, and that every returned path is a valid,
/// acyclic walk over open cells. Both strategies are tested.
use std::collections::VecDeque;

use fxhash::FxHashSet;
use maze_search::components::Components;
use maze_search::{solve, Cell, MazeGrid, SearchError, Solution, Strategy};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> MazeGrid {
    let mut walls = Vec::new();
    for row in 0..h as i32 {
        for col in 0..w as i32 {
            if rng.gen_bool(0.4) {
                walls.push(Cell::new(row, col));
            }
        }
    }
    let start = Cell::new(0, 0);
    let goal = Cell::new(h as i32 - 1, w as i32 - 1);
    MazeGrid::with_walls(w, h, walls, start, goal).unwrap()
}

/// Plain breadth-first distance from start to goal, without any of the crate's machinery.
fn reference_distance(grid: &MazeGrid) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.index_of(grid.start())] = 0;
    queue.push_back(grid.start());
    while let Some(cell) = queue.pop_front() {
        let d = dist[grid.index_of(cell)];
        if cell == grid.goal() {
            return Some(d);
        }
        for (_, next) in grid.neighbors(cell) {
            let ix = grid.index_of(next);
            if dist[ix] == usize::MAX {
                dist[ix] = d + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

fn assert_valid_path(grid: &MazeGrid, solution: &Solution) {
    let mut seen = FxHashSet::default();
    seen.insert(grid.start());
    let mut current = grid.start();
    for (action, cell) in solution.steps() {
        assert_eq!(current.step(action), cell);
        assert!(grid.can_move_to(cell));
        assert!(seen.insert(cell), "{} visited twice", cell);
        current = cell;
    }
    assert_eq!(current, grid.goal());
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let components = Components::new(&grid);
        let reachable = components.reachable(&grid.start(), &grid.goal());
        for strategy in Strategy::ALL {
            let result = solve(&grid, strategy);
            // Show the grid if the outcome disagrees with the components
            if result.is_ok() != reachable {
                println!("{}", grid);
            }
            match result {
                Ok(solution) => {
                    assert!(reachable);
                    assert_valid_path(&grid, &solution);
                }
                Err(SearchError::NoSolution { expanded }) => {
                    assert!(!reachable);
                    assert_eq!(expanded, components.component_size(&grid.start()));
                }
                Err(err) => panic!("unexpected error {err}"),
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let Some(distance) = reference_distance(&grid) else {
            continue;
        };
        let bfs = solve(&grid, Strategy::BreadthFirst).unwrap();
        let dfs = solve(&grid, Strategy::DepthFirst).unwrap();
        if bfs.len() != distance {
            println!("{}", maze_search::render::render_text(&grid, Some(&bfs)));
        }
        assert_eq!(bfs.len(), distance);
        assert!(dfs.len() >= bfs.len());
    }
}

#[test]
fn fuzz_determinism() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let (w, h) = (rng.gen_range(1..12), rng.gen_range(1..12));
        let grid = random_grid(w, h, &mut rng);
        for strategy in Strategy::ALL {
            assert_eq!(solve(&grid, strategy), solve(&grid, strategy));
        }
    }
}
