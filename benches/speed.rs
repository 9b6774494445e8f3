use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use cubic_spline_sampling::{
    catmull_rom, fill_reciprocals, fourier, integrate_catmull_rom,
    integrate_catmull_rom_rows, invert_catmull_rom, sample_catmull_rom,
    sample_catmull_rom_2d, sample_fourier,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_random_nodes(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Strictly increasing, non-uniformly spaced nodes
    let mut current = 0.0;
    (0..n)
        .map(|_| {
            current += rng.random_range(0.1..1.0);
            current
        })
        .collect()
}

fn generate_random_values(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Non-negative so the values can be importance sampled
    (0..n).map(|_| rng.random_range(0.1..10.0)).collect()
}

fn benchmark_catmull_rom(c: &mut Criterion) {
    let mut group = c.benchmark_group("Catmull-Rom");

    // Fixed seed for deterministic results
    const SEED: u64 = 12345;

    for num_points in [10, 50, 100, 500] {
        let nodes = generate_random_nodes(num_points, SEED);
        let values = generate_random_values(num_points, SEED + 1);
        let mut cdf = vec![0.0; num_points];
        integrate_catmull_rom(&nodes, &values, &mut cdf);

        let monotonic_values = generate_random_nodes(num_points, SEED + 2);
        let (x_min, x_max) = (nodes[0], nodes[num_points - 1]);
        let (y_min, y_max) = (monotonic_values[0], monotonic_values[num_points - 1]);

        group.bench_function(BenchmarkId::new("evaluate", num_points), |b| {
            let mut rng = StdRng::seed_from_u64(SEED + 3);
            b.iter(|| {
                let x = rng.random_range(x_min..x_max);
                black_box(catmull_rom(&nodes, &values, x))
            });
        });

        group.bench_function(BenchmarkId::new("integrate", num_points), |b| {
            let mut cdf = vec![0.0; num_points];
            b.iter(|| black_box(integrate_catmull_rom(&nodes, &values, &mut cdf)));
        });

        group.bench_function(BenchmarkId::new("sample", num_points), |b| {
            let mut rng = StdRng::seed_from_u64(SEED + 4);
            b.iter(|| {
                let u = rng.random::<f32>();
                black_box(sample_catmull_rom(&nodes, &values, &cdf, u))
            });
        });

        group.bench_function(BenchmarkId::new("invert", num_points), |b| {
            let mut rng = StdRng::seed_from_u64(SEED + 5);
            b.iter(|| {
                let y = rng.random_range(y_min..y_max);
                black_box(invert_catmull_rom(&nodes, &monotonic_values, y))
            });
        });
    }

    group.finish();
}

fn benchmark_catmull_rom_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Catmull-Rom 2D");

    const SEED: u64 = 23456;
    const ROWS: usize = 32;

    for num_points in [10, 100] {
        let outer = generate_random_nodes(ROWS, SEED);
        let inner = generate_random_nodes(num_points, SEED + 1);
        let values = generate_random_values(ROWS * num_points, SEED + 2);
        let mut cdf = vec![0.0; values.len()];
        let mut masses = vec![0.0; ROWS];
        integrate_catmull_rom_rows(&inner, &values, &mut cdf, &mut masses);
        let (alpha_min, alpha_max) = (outer[0], outer[ROWS - 1]);

        group.bench_function(BenchmarkId::new("sample", num_points), |b| {
            let mut rng = StdRng::seed_from_u64(SEED + 3);
            b.iter(|| {
                let alpha = rng.random_range(alpha_min..alpha_max);
                let u = rng.random::<f32>();
                black_box(sample_catmull_rom_2d(&outer, &inner, &values, &cdf, alpha, u))
            });
        });
    }

    group.finish();
}

fn benchmark_fourier(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fourier");

    const SEED: u64 = 34567;

    for num_coefficients in [4, 16, 64] {
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut coefficients: Vec<f32> = (0..num_coefficients)
            .map(|k| rng.random_range(-0.5..0.5) / (1 + k * k) as f32)
            .collect();
        coefficients[0] = 1.0;
        let mut recip = vec![0.0; num_coefficients];
        fill_reciprocals(&mut recip);

        group.bench_function(BenchmarkId::new("evaluate", num_coefficients), |b| {
            let mut rng = StdRng::seed_from_u64(SEED + 1);
            b.iter(|| {
                let cos_phi = rng.random_range(-1.0..1.0);
                black_box(fourier(&coefficients, cos_phi))
            });
        });

        group.bench_function(BenchmarkId::new("sample", num_coefficients), |b| {
            let mut rng = StdRng::seed_from_u64(SEED + 2);
            b.iter(|| {
                let u = rng.random::<f32>();
                black_box(sample_fourier(&coefficients, &recip, u))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_catmull_rom,
    benchmark_catmull_rom_2d,
    benchmark_fourier
);
criterion_main!(benches);
