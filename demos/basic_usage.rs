//! Basic usage example for cubic-spline-sampling

use cubic_spline_sampling::prelude::*;

fn main() {
    println!("=== Basic Catmull-Rom Sampling Example ===\n");

    // Example 1: Interpolating a non-uniformly tabulated function
    println!("1D Catmull-Rom interpolation:");
    let nodes = vec![0.0f32, 0.25, 1.0, 1.5, 3.0];
    let values = vec![0.5f32, 2.0, 1.0, 3.0, 0.5];

    for x in [0.0, 0.5, 1.0, 2.0, 3.0, 3.5] {
        println!("  f({:.2}) = {:.4}", x, catmull_rom(&nodes, &values, x));
    }

    // Example 2: Importance sampling through the CDF
    println!("\nImportance sampling:");
    let mut cdf = vec![0.0f32; nodes.len()];
    let mass = integrate_catmull_rom(&nodes, &values, &mut cdf);
    println!("  integral = {:.4}", mass);

    for u in [0.1, 0.5, 0.9] {
        let sample = sample_catmull_rom(&nodes, &values, &cdf, u);
        println!(
            "  u = {:.1} -> x = {:.4}, f(x) = {:.4}, pdf = {:.4}",
            u, sample.x, sample.value, sample.pdf
        );
    }

    // Example 3: Inverting a monotone table
    println!("\nSpline inversion:");
    let monotonic_values = vec![0.0f32, 1.0, 2.0, 4.0, 8.0];
    let y_target = 3.0;
    let x = invert_catmull_rom(&nodes, &monotonic_values, y_target);
    println!("  For y = {}, x = {:.4}", y_target, x);
    println!(
        "  Verification: f({:.4}) = {:.4}",
        x,
        catmull_rom(&nodes, &monotonic_values, x)
    );

    // Example 4: Sampling a row blended between two tabulated rows
    println!("\n2D sampling:");
    let table = CatmullRomTable2d::new(
        vec![0.0f32, 1.0],
        nodes.clone(),
        values.iter().chain(monotonic_values.iter()).copied().collect(),
    )
    .unwrap();
    for alpha in [0.0, 0.5, 1.0] {
        let sample = table.sample(alpha, 0.5);
        println!(
            "  alpha = {:.1}: median x = {:.4}, pdf = {:.4}",
            alpha, sample.x, sample.pdf
        );
    }

    // Example 5: Fourier lobes
    println!("\nFourier series:");
    let lobe = FourierSeries::new(vec![1.0f32, 0.6, 0.2]).unwrap();
    for u in [0.1, 0.4, 0.6, 0.9] {
        let sample = lobe.sample(u);
        println!(
            "  u = {:.1} -> phi = {:.4}, f(phi) = {:.4}, pdf = {:.4}",
            u, sample.phi, sample.value, sample.pdf
        );
    }

    // Example 6: Error handling
    println!("\nError handling:");
    match CatmullRomTable::new(vec![0.0f32, 1.0], vec![1.0, -1.0]) {
        Ok(table) => println!("  Mass: {}", table.mass()),
        Err(e) => println!("  Error: {}", e),
    }
}
