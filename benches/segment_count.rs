//! Benchmark of sampling cost against table size.
//!
//! Segment lookup is a binary search, so the cost of a sample should grow
//! with the logarithm of the node count while the Newton-bisection
//! iteration count stays flat.

use cubic_spline_sampling::{integrate_catmull_rom, sample_catmull_rom};
use std::time::Instant;

const ITERATIONS: u32 = 100_000;

fn benchmark_sample(
    nodes: &[f32],
    values: &[f32],
    cdf: &[f32],
    u_values: &[f32],
    description: &str,
) -> f64 {
    let start = Instant::now();
    let mut sum = 0.0;

    for &u in u_values {
        for _ in 0..ITERATIONS {
            sum += sample_catmull_rom(nodes, values, cdf, u).x;
        }
    }

    let elapsed = start.elapsed();
    let ns_per_op =
        elapsed.as_nanos() as f64 / (ITERATIONS as f64 * u_values.len() as f64);

    println!("{:<30} {:8.1} ns/op", description, ns_per_op);
    std::hint::black_box(sum);
    ns_per_op
}

fn main() {
    println!("=== sample_catmull_rom Performance vs Segment Count ===\n");

    let node_counts = vec![2, 3, 5, 10, 20, 50, 100, 200, 500, 1000];

    println!("{:<20} {:<15} {:<20}", "Segments", "Nodes", "Time (ns)");
    println!("{:-<55}", "");

    for node_count in node_counts {
        let nodes: Vec<f32> = (0..node_count)
            .map(|i| (i as f32 / (node_count - 1) as f32).powf(1.5))
            .collect();
        let values: Vec<f32> = nodes.iter().map(|x| 1.0 + 4.0 * x * (1.0 - x)).collect();
        let mut cdf = vec![0.0; node_count];
        integrate_catmull_rom(&nodes, &values, &mut cdf);

        // Samples near the start, the middle and the end of the table
        let u_values = [0.1, 0.5, 0.9];

        let description = format!("{:<20} {:<15}", node_count - 1, node_count);
        benchmark_sample(&nodes, &values, &cdf, &u_values, &description);
    }
}
