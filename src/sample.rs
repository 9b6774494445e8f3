//! Importance sampling of Catmull-Rom interpolants through their CDF.
//!
//! The CDF tables come from [`integrate_catmull_rom()`] (1D) or
//! [`integrate_catmull_rom_rows()`] (2D). Sampling maps `u` to a segment by
//! searching the CDF and then inverts the segment's closed-form integral
//! with [`newton_bisection()`], starting from the inverse of the trapezoid
//! through the segment's end values.

use crate::{
    catmull_rom_weights, find_interval, integrate_catmull_rom, newton_bisection,
    Bracket, InverseOptions, Real, Segment,
};

/// A sampled position together with the interpolant's value and the
/// probability density there.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplineSample<T> {
    pub x: T,
    pub value: T,
    pub pdf: T,
}

impl<T: Real> SplineSample<T> {
    /// A sample carrying no contribution.
    #[inline]
    pub fn zero(x: T) -> Self {
        Self {
            x,
            value: T::zero(),
            pdf: T::zero(),
        }
    }
}

/// Draws `x` with density proportional to the Catmull-Rom interpolant of
/// `(nodes, values)`.
///
/// `cdf` must have been built from the same table by
/// [`integrate_catmull_rom()`]; `u` is a uniform variate in `[0, 1)`.
/// The returned `pdf` is `value` divided by the total integral.
///
/// Tables with zero total integral yield [`SplineSample::zero()`] at
/// `nodes[0]`.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::{integrate_catmull_rom, sample_catmull_rom};
///
/// let nodes = [0.0f32, 1.0, 2.0];
/// let values = [1.0f32, 1.0, 1.0];
/// let mut cdf = [0.0f32; 3];
/// integrate_catmull_rom(&nodes, &values, &mut cdf);
///
/// let sample = sample_catmull_rom(&nodes, &values, &cdf, 0.25);
/// assert!((sample.x - 0.5).abs() < 1e-5);
/// assert!((sample.pdf - 0.5).abs() < 1e-5);
/// ```
pub fn sample_catmull_rom<T: Real>(
    nodes: &[T],
    values: &[T],
    cdf: &[T],
    u: T,
) -> SplineSample<T> {
    debug_assert_eq!(
        nodes.len(),
        values.len(),
        "sample_catmull_rom() needs one value per node"
    );
    debug_assert_eq!(
        values.len(),
        cdf.len(),
        "sample_catmull_rom() needs one CDF entry per node"
    );

    let n = nodes.len();
    let mass = cdf[n - 1];
    if !(mass > T::zero()) {
        return SplineSample::zero(nodes[0]);
    }

    // Map `u` to a segment by inverting the CDF.
    let u = u * mass;
    let i = find_interval(n, |j| cdf[j] <= u);
    let segment = Segment::new(nodes, values, i);

    invert_segment(&segment, (u - cdf[i]) / segment.width, mass, Bracket::Open)
}

/// Draws the inner coordinate of a 2D table with density proportional to
/// the Catmull-Rom interpolant at outer coordinate `alpha`.
///
/// `values` and `cdf` are flattened row-major `outer_nodes.len() ×
/// inner_nodes.len()` grids; `cdf` must hold per-row CDFs as written by
/// [`integrate_catmull_rom_rows()`]. Rows are blended with the weights of
/// [`catmull_rom_weights()`] on the outer axis, entry by entry as the
/// inversion touches them, so no interpolated row is ever materialized.
///
/// Returns [`SplineSample::zero()`] at `0` if `alpha` lies outside the outer
/// nodes, and at `inner_nodes[0]` if the interpolated row has no mass.
///
/// Passing a single-row table (two identical outer rows, `alpha` on the
/// first node) reduces this to [`sample_catmull_rom()`].
pub fn sample_catmull_rom_2d<T: Real>(
    outer_nodes: &[T],
    inner_nodes: &[T],
    values: &[T],
    cdf: &[T],
    alpha: T,
    u: T,
) -> SplineSample<T> {
    let n = inner_nodes.len();
    debug_assert_eq!(
        values.len(),
        outer_nodes.len() * n,
        "sample_catmull_rom_2d() needs an outer × inner value grid"
    );
    debug_assert_eq!(
        cdf.len(),
        values.len(),
        "sample_catmull_rom_2d() needs one CDF entry per value"
    );

    let Some(weights) = catmull_rom_weights(outer_nodes, alpha) else {
        return SplineSample::zero(T::zero());
    };

    let interpolate =
        |array: &[T], idx: usize| weights.apply(|row| array[row * n + idx]);

    // Map `u` to a segment by inverting the interpolated CDF.
    let mass = interpolate(cdf, n - 1);
    if !(mass > T::zero()) {
        return SplineSample::zero(inner_nodes[0]);
    }
    let u = u * mass;
    let idx = find_interval(n, |i| interpolate(cdf, i) <= u);

    let segment = Segment::from_fn(inner_nodes, idx, |i| interpolate(values, i));

    // The closed bracket test differs from the 1D sampler on purpose; it
    // keeps an initial guess that lands exactly on a segment end.
    invert_segment(
        &segment,
        (u - interpolate(cdf, idx)) / segment.width,
        mass,
        Bracket::Closed,
    )
}

/// Builds per-row CDFs for [`sample_catmull_rom_2d()`].
///
/// Runs [`integrate_catmull_rom()`] over each `inner_nodes.len()` long row
/// of `values`, writing each row's CDF into the matching row of `cdf` and
/// the row's total into `masses`.
///
/// # Panics
/// If `values` is not a whole number of rows, or `cdf` and `masses` are too
/// short to hold them.
pub fn integrate_catmull_rom_rows<T: Real>(
    inner_nodes: &[T],
    values: &[T],
    cdf: &mut [T],
    masses: &mut [T],
) {
    let n = inner_nodes.len();
    assert!(
        n >= 2 && values.len() % n == 0,
        "integrate_catmull_rom_rows() needs whole rows of {n} values. Found: {}.",
        values.len()
    );
    let rows = values.len() / n;
    assert!(
        cdf.len() >= values.len() && masses.len() >= rows,
        "integrate_catmull_rom_rows() needs room for {rows} rows of {n} CDF entries and {rows} masses"
    );

    for ((row, row_cdf), mass) in values
        .chunks_exact(n)
        .zip(cdf.chunks_exact_mut(n))
        .zip(masses.iter_mut())
    {
        *mass = integrate_catmull_rom(inner_nodes, row, row_cdf);
    }
}

/// Solves `segment.integral(t) == u` and converts the result to a sample.
#[inline]
fn invert_segment<T: Real>(
    segment: &Segment<T>,
    u: T,
    mass: T,
    bracket: Bracket,
) -> SplineSample<T> {
    let root = newton_bisection(
        |t| (segment.integral(t), segment.value(t)),
        u,
        segment.linear_guess(u),
        T::zero(),
        T::one(),
        &InverseOptions::with_bracket(bracket),
    );

    SplineSample {
        x: segment.position(root.x),
        value: root.derivative,
        pdf: root.derivative / mass,
    }
}
