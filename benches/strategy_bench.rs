use criterion::{criterion_group, criterion_main, Criterion};
use maze_search::{solve, Cell, MazeGrid, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grids(n: usize, count: usize, density: f64) -> Vec<MazeGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|_| {
            let walls: Vec<Cell> = (0..n as i32)
                .flat_map(|row| (0..n as i32).map(move |col| Cell::new(row, col)))
                .filter(|_| rng.gen_bool(density))
                .collect();
            let goal = Cell::new(n as i32 - 1, n as i32 - 1);
            MazeGrid::with_walls(n, n, walls, Cell::new(0, 0), goal).unwrap()
        })
        .collect()
}

fn strategy_bench(c: &mut Criterion) {
    for n in [32, 128] {
        let grids = random_grids(n, 16, 0.3);
        for strategy in Strategy::ALL {
            c.bench_function(format!("{n}x{n}, {strategy}").as_str(), |b| {
                b.iter(|| {
                    for grid in &grids {
                        let _ = black_box(solve(grid, strategy));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
