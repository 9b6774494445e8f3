//! Cubic Hermite segments with finite-difference tangents.
//!
//! A segment is defined by its two end values `f0`, `f1` and two tangents
//! `d0`, `d1` (already scaled to the segment width). The tangents are
//! estimated from neighbouring samples: a width-scaled central difference
//! in the interior and a one-sided difference `f1 - f0` on the first and
//! last segment.
//!
//! Multiplying the control vector `(f0, d0, f1, d1)` by [`HERMITE`] yields
//! power-basis coefficients, from which value, derivative and antiderivative
//! all evaluate in Horner form.

use crate::Real;

/// The Hermite basis matrix, rows ordered from the cubic to the constant
/// term, columns matching the control vector `(f0, d0, f1, d1)`.
pub const HERMITE: [[f64; 4]; 4] = [
    [2., 1., -2., 1.],
    [-3., -2., 3., -1.],
    [0., 1., 0., 0.],
    [1., 0., 0., 0.],
];

/// Evaluates the four Hermite basis functions `(h00, h10, h01, h11)` at `t`.
#[inline]
pub fn basis<T: Real>(t: T) -> [T; 4] {
    core::array::from_fn(|column| {
        ((T::c(HERMITE[0][column]) * t + T::c(HERMITE[1][column])) * t
            + T::c(HERMITE[2][column]))
            * t
            + T::c(HERMITE[3][column])
    })
}

/// One spline segment `[x0, x1]` of a tabulated function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    pub x0: T,
    pub x1: T,
    pub width: T,
    pub f0: T,
    pub f1: T,
    pub d0: T,
    pub d1: T,
}

impl<T: Real> Segment<T> {
    /// Builds segment `i` of `nodes`, reading samples through `value`.
    ///
    /// Taking the samples through a closure lets the 2D sampler feed in
    /// values interpolated across rows without materializing them.
    #[inline]
    pub fn from_fn<F>(nodes: &[T], i: usize, value: F) -> Self
    where
        F: Fn(usize) -> T,
    {
        let x0 = nodes[i];
        let x1 = nodes[i + 1];
        let f0 = value(i);
        let f1 = value(i + 1);
        let width = x1 - x0;

        let d0 = if i > 0 {
            width * (f1 - value(i - 1)) / (x1 - nodes[i - 1])
        } else {
            f1 - f0
        };
        let d1 = if i + 2 < nodes.len() {
            width * (value(i + 2) - f0) / (nodes[i + 2] - x0)
        } else {
            f1 - f0
        };

        Self {
            x0,
            x1,
            width,
            f0,
            f1,
            d0,
            d1,
        }
    }

    /// Builds segment `i` of the tabulated function `(nodes, values)`.
    #[inline]
    pub fn new(nodes: &[T], values: &[T], i: usize) -> Self {
        Self::from_fn(nodes, i, |j| values[j])
    }

    /// Power-basis coefficients `[c3, c2, c1, c0]`.
    #[inline]
    pub fn coefficients(&self) -> [T; 4] {
        let cv = [self.f0, self.d0, self.f1, self.d1];
        core::array::from_fn(|row| {
            cv.iter()
                .zip(HERMITE[row].iter())
                .fold(T::zero(), |total, (cv, basis)| total + *cv * T::c(*basis))
        })
    }

    /// Local parameter of the global coordinate `x`.
    #[inline]
    pub fn local(&self, x: T) -> T {
        (x - self.x0) / self.width
    }

    /// Global coordinate of the local parameter `t`, never past `x1`.
    #[inline]
    pub fn position(&self, t: T) -> T {
        (self.x0 + self.width * t).min(self.x1)
    }

    /// Interpolated value at local parameter `t`.
    #[inline]
    pub fn value(&self, t: T) -> T {
        let [c3, c2, c1, c0] = self.coefficients();
        ((c3 * t + c2) * t + c1) * t + c0
    }

    /// Derivative of [`value()`](Self::value) with respect to `t`.
    #[inline]
    pub fn derivative(&self, t: T) -> T {
        let [c3, c2, c1, _] = self.coefficients();
        (T::c(3.0) * c3 * t + T::c(2.0) * c2) * t + c1
    }

    /// Integral of [`value()`](Self::value) over `[0, t]`, in local units.
    ///
    /// Multiply by `width` to get the integral in node units.
    #[inline]
    pub fn integral(&self, t: T) -> T {
        let [c3, c2, c1, c0] = self.coefficients();
        t * (c0 + t * (c1 * T::half() + t * (c2 / T::c(3.0) + t * (c3 * T::c(0.25)))))
    }

    /// Integral over the whole segment, in node units.
    #[inline]
    pub fn area(&self) -> T {
        ((self.d0 - self.d1) * T::c(1.0 / 12.0) + (self.f0 + self.f1) * T::half())
            * self.width
    }

    /// Initial guess for the `t` at which [`integral()`](Self::integral)
    /// reaches `u`, found by inverting the trapezoid through `f0` and `f1`.
    #[inline]
    pub fn linear_guess(&self, u: T) -> T {
        let (f0, f1) = (self.f0, self.f1);
        if f0 != f1 {
            let discriminant = (f0 * f0 + T::c(2.0) * u * (f1 - f0)).max(T::zero());
            (f0 - discriminant.sqrt()) / (f0 - f1)
        } else {
            u / f0
        }
    }
}
