//! Safeguarded Newton-bisection root finding.
//!
//! Every inversion in this crate (CDF sampling in 1D and 2D, direct spline
//! inversion and Fourier series sampling) solves `function(x) == target`
//! for a function that is monotone on a known bracket and whose derivative
//! is cheap to evaluate alongside it. [`newton_bisection()`] takes Newton
//! steps and falls back to bisection whenever a step would leave the
//! bracket, so the bracket shrinks on every iteration.

use crate::{Real, TOLERANCE};
use core::num::NonZeroU16;

/// Iteration cap used when [`InverseOptions::max_iterations`] is `None`.
pub const DEFAULT_MAX_ITERATIONS: NonZeroU16 = match NonZeroU16::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// How a Newton candidate is tested against the current bracket
/// `[lower, upper]` before it is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Bracket {
    /// Accept the candidate only if `lower < x < upper`.
    #[default]
    Open,
    /// Accept the candidate if `lower <= x <= upper`.
    Closed,
}

impl Bracket {
    /// Returns `true` if `x` is an acceptable iterate. NaN never is.
    #[inline]
    pub fn contains<T: PartialOrd>(self, x: T, lower: T, upper: T) -> bool {
        match self {
            Bracket::Open => x > lower && x < upper,
            Bracket::Closed => x >= lower && x <= upper,
        }
    }
}

/// Options for [`newton_bisection()`] and
/// [`invert_catmull_rom_with()`](crate::invert_catmull_rom_with).
#[derive(Clone, Debug, PartialEq)]
pub struct InverseOptions<T> {
    /// Upper bound on function evaluations.
    ///
    /// Defaults to [`DEFAULT_MAX_ITERATIONS`]. Bisection alone reaches the
    /// default precision on a unit bracket in about 20 steps.
    pub max_iterations: Option<NonZeroU16>,
    /// Absolute residual and bracket width at which iteration stops.
    ///
    /// Defaults to [`TOLERANCE`].
    pub precision: Option<T>,
    /// Bracket test applied to each Newton candidate.
    pub bracket: Bracket,
}

impl<T> Default for InverseOptions<T> {
    fn default() -> Self {
        Self {
            max_iterations: None,
            precision: None,
            bracket: Bracket::Open,
        }
    }
}

impl<T: Real> InverseOptions<T> {
    /// Default options with the given bracket test.
    pub fn with_bracket(bracket: Bracket) -> Self {
        Self {
            bracket,
            ..Self::default()
        }
    }
}

/// Where [`newton_bisection()`] stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root<T> {
    /// The last iterate.
    pub x: T,
    /// `function(x).0`.
    pub value: T,
    /// `function(x).1`.
    pub derivative: T,
}

/// Solves `function(x).0 == target` for `x` in `[lower, upper]`.
///
/// `function` returns the value and its derivative at `x`. The value must be
/// non-decreasing on the bracket. Iteration starts at `guess` (bisecting
/// right away if the guess fails the bracket test) and stops once the
/// residual or the bracket width drops below the precision, or after
/// `max_iterations` evaluations.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::{newton_bisection, InverseOptions};
///
/// let root = newton_bisection(
///     |x: f64| (x * x, 2.0 * x),
///     2.0,
///     1.0,
///     0.0,
///     2.0,
///     &InverseOptions::default(),
/// );
///
/// assert!((root.x - 2f64.sqrt()).abs() < 1e-6);
/// ```
pub fn newton_bisection<T, F>(
    mut function: F,
    target: T,
    guess: T,
    lower: T,
    upper: T,
    options: &InverseOptions<T>,
) -> Root<T>
where
    T: Real,
    F: FnMut(T) -> (T, T),
{
    let max_iterations = options
        .max_iterations
        .unwrap_or(DEFAULT_MAX_ITERATIONS)
        .get();
    let precision = options.precision.unwrap_or_else(|| T::c(TOLERANCE));

    let mut x = guess;
    let mut lower = lower;
    let mut upper = upper;

    let mut iteration = 0;
    loop {
        if !options.bracket.contains(x, lower, upper) {
            x = lower.lerp(upper, T::half());
        }

        let (value, derivative) = function(x);
        let residual = value - target;
        iteration += 1;

        if residual.abs() < precision
            || upper - lower < precision
            || iteration >= max_iterations
        {
            return Root {
                x,
                value,
                derivative,
            };
        }

        if residual < T::zero() {
            lower = x;
        } else {
            upper = x;
        }

        x = x - residual / derivative;
    }
}
