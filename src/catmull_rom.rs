//! Catmull-Rom interpolation over non-uniformly spaced nodes.

use crate::{
    find_interval, hermite::basis, newton_bisection, InverseOptions, Real,
    Segment,
};

/// Returns the Catmull-Rom interpolant of `(nodes, values)` at `x`.
///
/// Returns `0` if `x` lies outside `[nodes[0], nodes[n - 1]]`.
///
/// # Panics
/// If `nodes` and `values` differ in length or hold fewer than 2 entries
/// this will panic when the code is built with debug assertions enabled.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::catmull_rom;
///
/// let nodes = [0.0f32, 1.0, 2.0, 3.0];
/// let values = [0.0f32, 1.0, 4.0, 9.0];
///
/// assert_eq!(catmull_rom(&nodes, &values, 2.0), 4.0);
/// assert_eq!(catmull_rom(&nodes, &values, 3.5), 0.0);
/// ```
pub fn catmull_rom<T: Real>(nodes: &[T], values: &[T], x: T) -> T {
    debug_assert_eq!(
        nodes.len(),
        values.len(),
        "catmull_rom() needs one value per node"
    );

    if !in_domain(nodes, x) {
        return T::zero();
    }

    let idx = find_interval(nodes.len(), |i| nodes[i] <= x);
    let segment = Segment::new(nodes, values, idx);
    segment.value(segment.local(x))
}

/// Tap weights reproducing the Catmull-Rom interpolant at one point.
///
/// `weights[i]` multiplies the sample at index `offset + i`. A weight that
/// would refer to a tap outside the table is folded into its in-range
/// neighbour and set to exactly zero, so out-of-range taps never need to be
/// read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights<T> {
    pub offset: isize,
    pub weights: [T; 4],
}

impl<T: Real> Weights<T> {
    /// Iterates `(index, weight)` over the taps with a non-zero weight.
    pub fn taps(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| !weight.is_zero())
            .map(move |(i, weight)| ((self.offset + i as isize) as usize, *weight))
    }

    /// Weighted sum of `value(index)` over the non-zero taps.
    #[inline]
    pub fn apply<F>(&self, mut value: F) -> T
    where
        F: FnMut(usize) -> T,
    {
        self.taps()
            .fold(T::zero(), |total, (index, weight)| total + value(index) * weight)
    }
}

/// Computes the tap weights of the Catmull-Rom interpolant over `nodes` at
/// `x`.
///
/// For every value sequence `values` aligned with `nodes`, the weighted sum
/// `weights.apply(|i| values[i])` equals
/// [`catmull_rom`]`(nodes, values, x)`. This lets callers interpolate many
/// tables over the same nodes, or tensor-product tables, without computing
/// tangents per table.
///
/// Returns `None` if `x` lies outside `[nodes[0], nodes[n - 1]]`.
pub fn catmull_rom_weights<T: Real>(nodes: &[T], x: T) -> Option<Weights<T>> {
    if !in_domain(nodes, x) {
        return None;
    }

    let idx = find_interval(nodes.len(), |i| nodes[i] <= x);
    let x0 = nodes[idx];
    let x1 = nodes[idx + 1];
    let width = x1 - x0;
    let t = (x - x0) / width;

    let [h00, h10, h01, h11] = basis(t);
    let mut weights = [T::zero(), h00, h01, T::zero()];

    // The `d0` tangent taps nodes `idx - 1` and `idx + 1`.
    if idx > 0 {
        let w0 = h10 * width / (x1 - nodes[idx - 1]);
        weights[0] = -w0;
        weights[2] = weights[2] + w0;
    } else {
        weights[1] = weights[1] - h10;
        weights[2] = weights[2] + h10;
    }

    // The `d1` tangent taps nodes `idx` and `idx + 2`.
    if idx + 2 < nodes.len() {
        let w3 = h11 * width / (nodes[idx + 2] - x0);
        weights[1] = weights[1] - w3;
        weights[3] = w3;
    } else {
        weights[1] = weights[1] - h11;
        weights[2] = weights[2] + h11;
    }

    Some(Weights {
        offset: idx as isize - 1,
        weights,
    })
}

/// Integrates the Catmull-Rom interpolant of `(nodes, values)` segment by
/// segment.
///
/// Writes the running integral into `cdf` (`cdf[0] == 0`, `cdf[i]` is the
/// integral over `[nodes[0], nodes[i]]`) and returns the total.
///
/// # Panics
/// If `cdf` is shorter than `nodes`, or `nodes` and `values` differ in
/// length.
pub fn integrate_catmull_rom<T: Real>(nodes: &[T], values: &[T], cdf: &mut [T]) -> T {
    debug_assert_eq!(
        nodes.len(),
        values.len(),
        "integrate_catmull_rom() needs one value per node"
    );
    assert!(
        cdf.len() >= nodes.len(),
        "integrate_catmull_rom() needs a CDF buffer of at least {} entries. Found: {}.",
        nodes.len(),
        cdf.len()
    );

    let mut sum = T::zero();
    cdf[0] = sum;
    for i in 0..nodes.len() - 1 {
        sum = sum + Segment::new(nodes, values, i).area();
        cdf[i + 1] = sum;
    }
    sum
}

/// Inverts a monotonically increasing tabulated function; i.e. solves for
/// the `x` for which [`catmull_rom`]`(nodes, values, x) == y`.
///
/// Targets below `values[0]` clamp to `nodes[0]`, targets above the last
/// value clamp to the last node.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::{catmull_rom, invert_catmull_rom};
///
/// let nodes = [0.0f64, 1.0, 2.0, 3.0];
/// let values = [0.0f64, 1.0, 4.0, 9.0];
///
/// let x = invert_catmull_rom(&nodes, &values, 2.5);
/// assert!((catmull_rom(&nodes, &values, x) - 2.5).abs() < 1e-6);
/// ```
pub fn invert_catmull_rom<T: Real>(nodes: &[T], values: &[T], y: T) -> T {
    invert_catmull_rom_with(nodes, values, y, &InverseOptions::default())
}

/// Like [`invert_catmull_rom()`] with explicit solver options.
pub fn invert_catmull_rom_with<T: Real>(
    nodes: &[T],
    values: &[T],
    y: T,
    options: &InverseOptions<T>,
) -> T {
    debug_assert_eq!(
        nodes.len(),
        values.len(),
        "invert_catmull_rom() needs one value per node"
    );

    let n = values.len();
    if !(y > values[0]) {
        return nodes[0];
    } else if !(y < values[n - 1]) {
        return nodes[n - 1];
    }

    let idx = find_interval(n, |i| values[i] <= y);
    let segment = Segment::new(nodes, values, idx);

    let root = newton_bisection(
        |t| (segment.value(t), segment.derivative(t)),
        y,
        T::half(),
        T::zero(),
        T::one(),
        options,
    );
    segment.position(root.x)
}

#[inline]
fn in_domain<T: Real>(nodes: &[T], x: T) -> bool {
    debug_assert!(
        nodes.len() >= 2,
        "Catmull-Rom tables need at least 2 nodes. Found: {}.",
        nodes.len()
    );
    x >= nodes[0] && x <= nodes[nodes.len() - 1]
}
