//! Timing harness comparing the serial and rayon step paths

use std::time::Instant;

use conway_life::Grid;

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size)
        .expect("benchmark sizes are positive")
        .randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn benchmark_step_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size)
        .expect("benchmark sizes are positive")
        .randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("{:<10}{:<18}{:<18}", "size", "serial ms/gen", "parallel ms/gen");

    for &size in &[64, 256, 1024] {
        let iterations = if size >= 1024 { 10 } else { 100 };
        let serial = benchmark_step(size, iterations);
        let parallel = benchmark_step_parallel(size, iterations);
        println!("{size:<10}{serial:<18.3}{parallel:<18.3}");
    }
}
