//! Owned, validated tables.
//!
//! The free functions of this crate borrow caller storage and trust their
//! inputs. The types here own their data, check it once on construction and
//! precompute the CDFs, so that the hot path only ever sees well-formed
//! tables.

use crate::{
    catmull_rom, catmull_rom_weights, fill_reciprocals, fourier,
    integrate_catmull_rom, integrate_catmull_rom_rows, invert_catmull_rom,
    sample_catmull_rom, sample_catmull_rom_2d, sample_fourier, FourierSample,
    Real, SplineError, SplineResult, SplineSample,
};
use alloc::{vec, vec::Vec};
use core::f64::consts::PI;
use num_traits::Float;

/// A non-negative function tabulated over non-uniform nodes, ready for
/// importance sampling.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::CatmullRomTable;
///
/// let table = CatmullRomTable::new(
///     vec![0.0f32, 1.0, 2.0, 4.0],
///     vec![0.0f32, 2.0, 1.0, 1.0],
/// )
/// .unwrap();
///
/// let sample = table.sample(0.5);
/// assert!(sample.x > 0.0 && sample.x < 4.0);
/// assert!((sample.pdf - table.pdf(sample.x)).abs() < 1e-4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRomTable<T> {
    nodes: Vec<T>,
    values: Vec<T>,
    cdf: Vec<T>,
    mass: T,
}

impl<T: Real> CatmullRomTable<T> {
    /// Builds a table and its CDF.
    ///
    /// Fails if there are fewer than 2 nodes, if `values` is not aligned
    /// with `nodes`, if any entry is not finite, if any value is negative
    /// or, with the `monotonic_check` feature, if the nodes are not strictly
    /// increasing.
    pub fn new(nodes: Vec<T>, values: Vec<T>) -> SplineResult<Self> {
        const CONTEXT: &str = "Catmull-Rom table";
        check_nodes(CONTEXT, &nodes)?;
        check_values(CONTEXT, &values, nodes.len())?;

        let mut cdf = vec![T::zero(); nodes.len()];
        let mass = integrate_catmull_rom(&nodes, &values, &mut cdf);
        log::debug!("Built {CONTEXT} with {} nodes, mass {mass:?}", nodes.len());
        if !(mass > T::zero()) {
            log::warn!("{CONTEXT} has no mass; sampling will return zero samples");
        }

        Ok(Self {
            nodes,
            values,
            cdf,
            mass,
        })
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The running integral, one entry per node.
    pub fn cdf(&self) -> &[T] {
        &self.cdf
    }

    /// The integral of the interpolant over the whole domain.
    pub fn mass(&self) -> T {
        self.mass
    }

    /// See [`catmull_rom()`].
    pub fn evaluate(&self, x: T) -> T {
        catmull_rom(&self.nodes, &self.values, x)
    }

    /// Density [`sample()`](Self::sample) draws `x` with; zero for a table
    /// without mass.
    pub fn pdf(&self, x: T) -> T {
        if self.mass > T::zero() {
            self.evaluate(x) / self.mass
        } else {
            T::zero()
        }
    }

    /// See [`sample_catmull_rom()`].
    pub fn sample(&self, u: T) -> SplineSample<T> {
        sample_catmull_rom(&self.nodes, &self.values, &self.cdf, u)
    }

    /// Reads the table as a monotone map from nodes to values and inverts
    /// it; see [`invert_catmull_rom()`].
    pub fn invert(&self, y: T) -> T {
        invert_catmull_rom(&self.nodes, &self.values, y)
    }
}

/// A non-negative function tabulated over an outer × inner grid, sampled
/// along the inner axis for a given outer coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRomTable2d<T> {
    outer_nodes: Vec<T>,
    inner_nodes: Vec<T>,
    values: Vec<T>,
    cdf: Vec<T>,
    masses: Vec<T>,
}

impl<T: Real> CatmullRomTable2d<T> {
    /// Builds a table from row-major `values` (one row of
    /// `inner_nodes.len()` samples per outer node) and its per-row CDFs.
    ///
    /// Validation is the same as for [`CatmullRomTable::new()`], on both
    /// axes.
    pub fn new(
        outer_nodes: Vec<T>,
        inner_nodes: Vec<T>,
        values: Vec<T>,
    ) -> SplineResult<Self> {
        const CONTEXT: &str = "2D Catmull-Rom table";
        check_nodes(CONTEXT, &outer_nodes)?;
        check_nodes(CONTEXT, &inner_nodes)?;
        check_values(CONTEXT, &values, outer_nodes.len() * inner_nodes.len())?;

        let mut cdf = vec![T::zero(); values.len()];
        let mut masses = vec![T::zero(); outer_nodes.len()];
        integrate_catmull_rom_rows(&inner_nodes, &values, &mut cdf, &mut masses);

        log::debug!(
            "Built {CONTEXT} with {} × {} nodes",
            outer_nodes.len(),
            inner_nodes.len()
        );
        let empty_rows = masses.iter().filter(|mass| !(**mass > T::zero())).count();
        if empty_rows > 0 {
            log::warn!("{CONTEXT} has {empty_rows} rows without mass");
        }

        Ok(Self {
            outer_nodes,
            inner_nodes,
            values,
            cdf,
            masses,
        })
    }

    pub fn outer_nodes(&self) -> &[T] {
        &self.outer_nodes
    }

    pub fn inner_nodes(&self) -> &[T] {
        &self.inner_nodes
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Per-row CDFs, laid out like [`values()`](Self::values).
    pub fn cdf(&self) -> &[T] {
        &self.cdf
    }

    /// The integral of each row.
    pub fn masses(&self) -> &[T] {
        &self.masses
    }

    /// Evaluates the tensor-product interpolant at `(alpha, x)`; zero
    /// outside the grid.
    pub fn evaluate(&self, alpha: T, x: T) -> T {
        let (Some(outer), Some(inner)) = (
            catmull_rom_weights(&self.outer_nodes, alpha),
            catmull_rom_weights(&self.inner_nodes, x),
        ) else {
            return T::zero();
        };

        let n = self.inner_nodes.len();
        outer.apply(|row| inner.apply(|column| self.values[row * n + column]))
    }

    /// The integral over the inner axis of the row interpolated at `alpha`;
    /// zero outside the outer nodes.
    pub fn mass(&self, alpha: T) -> T {
        catmull_rom_weights(&self.outer_nodes, alpha)
            .map_or(T::zero(), |weights| weights.apply(|row| self.masses[row]))
    }

    /// See [`sample_catmull_rom_2d()`].
    pub fn sample(&self, alpha: T, u: T) -> SplineSample<T> {
        sample_catmull_rom_2d(
            &self.outer_nodes,
            &self.inner_nodes,
            &self.values,
            &self.cdf,
            alpha,
            u,
        )
    }
}

/// A truncated cosine series with its reciprocal table.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::FourierSeries;
///
/// let lobe = FourierSeries::new(vec![1.0f32, 0.5]).unwrap();
/// let sample = lobe.sample(0.3);
///
/// assert!((lobe.evaluate_angle(sample.phi) - sample.value).abs() < 1e-4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FourierSeries<T> {
    coefficients: Vec<T>,
    reciprocals: Vec<T>,
}

impl<T: Real> FourierSeries<T> {
    /// Builds a series from its coefficients `a[0..m]`.
    ///
    /// Fails on an empty or non-finite coefficient vector.
    pub fn new(coefficients: Vec<T>) -> SplineResult<Self> {
        const CONTEXT: &str = "Fourier series";
        if coefficients.is_empty() {
            return Err(SplineError::EmptySeries);
        }
        if let Some(index) = coefficients.iter().position(|a| !a.is_finite()) {
            return Err(SplineError::NonFiniteValue {
                context: CONTEXT,
                index,
            });
        }
        if !(coefficients[0] > T::zero()) {
            log::warn!("{CONTEXT} has no mass; sampling will return zero samples");
        }

        let mut reciprocals = vec![T::zero(); coefficients.len()];
        fill_reciprocals(&mut reciprocals);

        Ok(Self {
            coefficients,
            reciprocals,
        })
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// See [`fourier()`].
    pub fn evaluate(&self, cos_phi: f64) -> T {
        fourier(&self.coefficients, cos_phi)
    }

    /// Evaluates the series at the angle `phi`.
    pub fn evaluate_angle(&self, phi: T) -> T {
        self.evaluate(phi.wide().cos())
    }

    /// Density [`sample()`](Self::sample) draws `phi` with.
    pub fn pdf(&self, phi: T) -> T {
        let a0 = self.coefficients[0].wide();
        if a0 > 0.0 {
            T::narrow(self.evaluate_angle(phi).wide() / (2.0 * PI * a0))
        } else {
            T::zero()
        }
    }

    /// See [`sample_fourier()`].
    pub fn sample(&self, u: T) -> FourierSample<T> {
        sample_fourier(&self.coefficients, &self.reciprocals, u)
    }
}

fn check_nodes<T: Real>(context: &'static str, nodes: &[T]) -> SplineResult<()> {
    if nodes.len() < 2 {
        return Err(SplineError::TooFewNodes {
            context,
            actual: nodes.len(),
        });
    }
    if let Some(index) = nodes.iter().position(|x| !x.is_finite()) {
        return Err(SplineError::NonFiniteValue { context, index });
    }
    #[cfg(feature = "monotonic_check")]
    if let Some(index) = nodes.windows(2).position(|pair| !(pair[0] < pair[1])) {
        return Err(SplineError::NonMonotonicNodes {
            context,
            index: index + 1,
        });
    }
    Ok(())
}

fn check_values<T: Real>(
    context: &'static str,
    values: &[T],
    expected: usize,
) -> SplineResult<()> {
    if values.len() != expected {
        return Err(SplineError::LengthMismatch {
            context,
            expected,
            actual: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|f| !f.is_finite()) {
        return Err(SplineError::NonFiniteValue { context, index });
    }
    if let Some(index) = values.iter().position(|f| *f < T::zero()) {
        return Err(SplineError::NegativeValue { context, index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            CatmullRomTable::new(vec![0.0f32], vec![1.0]),
            Err(SplineError::TooFewNodes {
                context: "Catmull-Rom table",
                actual: 1
            })
        );
        assert!(matches!(
            CatmullRomTable::new(vec![0.0f32, 1.0], vec![1.0]),
            Err(SplineError::LengthMismatch { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            CatmullRomTable::new(vec![0.0f32, 1.0], vec![1.0, -1.0]),
            Err(SplineError::NegativeValue { index: 1, .. })
        ));
        assert!(matches!(
            CatmullRomTable::new(vec![0.0f32, f32::NAN], vec![1.0, 1.0]),
            Err(SplineError::NonFiniteValue { index: 1, .. })
        ));
        assert!(matches!(
            CatmullRomTable2d::new(vec![0.0f32, 1.0], vec![0.0, 1.0], vec![1.0; 3]),
            Err(SplineError::LengthMismatch { expected: 4, actual: 3, .. })
        ));
        assert_eq!(
            FourierSeries::<f32>::new(vec![]),
            Err(SplineError::EmptySeries)
        );
    }

    #[cfg(feature = "monotonic_check")]
    #[test]
    fn rejects_unsorted_nodes() {
        assert!(matches!(
            CatmullRomTable::new(vec![0.0f32, 2.0, 1.0], vec![1.0; 3]),
            Err(SplineError::NonMonotonicNodes { index: 2, .. })
        ));
        assert!(matches!(
            CatmullRomTable2d::new(vec![0.0f32, 0.0], vec![0.0, 1.0], vec![1.0; 4]),
            Err(SplineError::NonMonotonicNodes { index: 1, .. })
        ));
    }

    #[test]
    fn zero_table_samples_nothing() {
        let table = CatmullRomTable::new(vec![0.0f32, 1.0], vec![0.0, 0.0]).unwrap();
        assert_eq!(table.mass(), 0.0);
        assert_eq!(table.pdf(0.5), 0.0);
        assert_eq!(table.sample(0.5), SplineSample::zero(0.0));
    }

    #[test]
    fn table_2d_evaluates_rows_exactly() {
        let outer = vec![0.0f64, 1.0, 2.0];
        let inner = vec![0.0f64, 0.5, 1.0];
        let values = vec![1.0, 2.0, 1.0, 0.0, 1.0, 4.0, 3.0, 3.0, 3.0];
        let table = CatmullRomTable2d::new(outer.clone(), inner.clone(), values.clone()).unwrap();

        for (row, alpha) in outer.iter().enumerate() {
            let expected_row = &values[row * 3..row * 3 + 3];
            for step in 0..=10 {
                let x = step as f64 / 10.0;
                assert_abs_diff_eq!(
                    table.evaluate(*alpha, x),
                    catmull_rom(&inner, expected_row, x),
                    epsilon = 1e-12
                );
            }
            assert_abs_diff_eq!(table.mass(*alpha), table.masses()[row], epsilon = 1e-12);
        }
        assert_eq!(table.evaluate(2.5, 0.5), 0.0);
        assert_eq!(table.mass(-0.5), 0.0);
    }

    #[test]
    fn fourier_pdf_matches_sample() {
        let lobe = FourierSeries::new(vec![0.8f64, 0.3, 0.1]).unwrap();
        for step in 0..20 {
            let sample = lobe.sample((step as f64 + 0.5) / 20.0);
            assert_abs_diff_eq!(lobe.pdf(sample.phi), sample.pdf, epsilon = 1e-9);
        }
    }
}
