//! Tick throughput on random soups, wrapping vs bounded edges

use std::time::Instant;

use life_sandbox::domain::{BoundaryMode, GridSimulation, SimulationConfig};
use rand::{SeedableRng, rngs::StdRng};

const SEED: u64 = 0x5EED_11FE;
const DENSITY: f64 = 0.3;

/// Average milliseconds per tick
fn benchmark_ticks(size: usize, mode: BoundaryMode, iterations: u32) -> f64 {
    let config = SimulationConfig {
        boundary_mode: mode,
        ..SimulationConfig::with_dimensions(size, size)
    };
    let Ok(mut simulation) = GridSimulation::new(&config) else {
        return f64::NAN;
    };
    simulation.fill_random(&mut StdRng::seed_from_u64(SEED), DENSITY);

    let start = Instant::now();
    let mut changed = 0usize;
    for _ in 0..iterations {
        simulation.tick_with(|_| changed += 1);
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);
    std::hint::black_box(changed);
    elapsed
}

fn main() {
    println!("=== Life Sandbox Tick Benchmark ===\n");

    let sizes = [(50, 200), (100, 100), (250, 40), (500, 10), (1000, 4)];

    println!("{:>10} | {:>12} | {:>12} | {:>14}", "Size", "Wrap ms", "Bounded ms", "Cells/s (wrap)");
    println!("{:-<10}-+-{:-<12}-+-{:-<12}-+-{:-<14}", "", "", "", "");

    for (size, iterations) in sizes {
        let wrap = benchmark_ticks(size, BoundaryMode::Wrap, iterations);
        let bounded = benchmark_ticks(size, BoundaryMode::Bounded, iterations);
        let cells_per_sec = (size * size) as f64 / (wrap / 1000.0);

        println!(
            "{:>10} | {:>12.3} | {:>12.3} | {:>14.0}",
            format!("{size}x{size}"),
            wrap,
            bounded,
            cells_per_sec
        );
    }
}
