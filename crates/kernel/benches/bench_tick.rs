use std::hint::black_box;
use std::time::Instant;

use flagwave_kernel::{GridSimulator, WaveConfig};

fn bench_tick(grid_size: usize, iterations: usize) {
    let mut sim = GridSimulator::from_config(WaveConfig {
        grid_size,
        ..WaveConfig::default()
    })
    .expect("valid config");
    let params = sim.config().params();

    let dt = 1.0 / 60.0;
    let start = Instant::now();
    for i in 0..iterations {
        let elapsed = (i + 1) as f32 * dt;
        sim.tick(black_box(dt), black_box(elapsed), &params)
            .expect("valid tick");
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  tick ({grid_size}x{grid_size} cells, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
    black_box(sim.state_hash());
}

fn bench_state_hash(grid_size: usize, iterations: usize) {
    let sim = GridSimulator::initialize(grid_size, 1.5).expect("valid layout");

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(black_box(&sim).state_hash());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  state hash ({grid_size}x{grid_size} cells, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn main() {
    println!("=== Grid Simulator Benchmarks ===\n");

    println!("Tick:");
    bench_tick(10, 10000);
    bench_tick(30, 1000);
    bench_tick(100, 100);

    println!("\nState hash:");
    bench_state_hash(30, 1000);
    bench_state_hash(100, 100);

    println!("\n=== Done ===");
}
