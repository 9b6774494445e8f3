//! Truncated cosine series: evaluation and importance sampling.
//!
//! A series `f(φ) = Σ aₖ cos(kφ)` over `φ ∈ [0, 2π)` is symmetric about
//! `π`, so sampling only ever inverts its antiderivative on `[0, π]` and
//! mirrors the result. All series arithmetic runs in `f64` regardless of the
//! coefficient type; long series cancel badly in single precision.

use crate::{newton_bisection, InverseOptions, Real};
use core::f64::consts::{FRAC_1_PI, PI};
use num_traits::Float;

/// Evaluates `Σ a[k] cos(k φ)` given `cos φ`.
///
/// Uses the recurrence `cos(kφ) = 2 cos φ cos((k−1)φ) − cos((k−2)φ)`, so no
/// trigonometric function is evaluated.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::fourier;
///
/// // 1 + 2 cos φ + 3 cos 2φ at φ = 0.
/// assert_eq!(fourier(&[1.0f32, 2.0, 3.0], 1.0), 6.0);
/// ```
pub fn fourier<T: Real>(a: &[T], cos_phi: f64) -> T {
    let mut value = 0.0f64;
    let mut cos_k_minus_one_phi = cos_phi;
    let mut cos_k_phi = 1.0f64;
    for a_k in a {
        value += a_k.wide() * cos_k_phi;
        let cos_k_plus_one_phi = 2.0 * cos_phi * cos_k_phi - cos_k_minus_one_phi;
        cos_k_minus_one_phi = cos_k_phi;
        cos_k_phi = cos_k_plus_one_phi;
    }
    T::narrow(value)
}

/// A sampled angle of a cosine series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FourierSample<T> {
    /// The series value `f(phi)`.
    pub value: T,
    /// `value / (2π a[0])`.
    pub pdf: T,
    /// The sampled angle in `[0, 2π]`.
    pub phi: T,
}

/// Draws an angle `φ ∈ [0, 2π)` with density proportional to
/// `Σ a[k] cos(k φ)`.
///
/// `recip[k]` must hold `1 / k` for every `k ≥ 1`; see
/// [`fill_reciprocals()`]. `u` is a uniform variate in `[0, 1)`: values
/// below `0.5` land in `[0, π]`, the rest are mirrored into `[π, 2π]`.
///
/// A series with `a[0] <= 0` (including an empty one) has no mass to sample;
/// it returns a zero value and pdf at `φ = 2π u`.
///
/// # Panics
/// If `recip` is shorter than `a`.
pub fn sample_fourier<T: Real>(a: &[T], recip: &[T], u: T) -> FourierSample<T> {
    assert!(
        recip.len() >= a.len(),
        "sample_fourier() needs {} reciprocals. Found: {}.",
        a.len(),
        recip.len()
    );

    let u = u.wide();
    let a0 = a.first().map_or(0.0, |a0| a0.wide());
    if !(a0 > 0.0) {
        return FourierSample {
            value: T::zero(),
            pdf: T::zero(),
            phi: T::narrow(2.0 * PI * u),
        };
    }

    // Pick a side.
    let flip = u >= 0.5;
    let u = if flip { 1.0 - 2.0 * (u - 0.5) } else { 2.0 * u };

    let root = newton_bisection(
        |phi| antiderivative(a, recip, phi),
        u * a0 * PI,
        0.5 * PI,
        0.0,
        PI,
        &InverseOptions::default(),
    );

    let phi = if flip { 2.0 * PI - root.x } else { root.x };
    FourierSample {
        value: T::narrow(root.derivative),
        pdf: T::narrow(0.5 * FRAC_1_PI * root.derivative / a0),
        phi: T::narrow(phi),
    }
}

/// Fills `recip` with `1 / k`, leaving `recip[0] = 0`.
pub fn fill_reciprocals<T: Real>(recip: &mut [T]) {
    for (k, r) in recip.iter_mut().enumerate() {
        *r = if k == 0 {
            T::zero()
        } else {
            T::one() / T::c(k as f64)
        };
    }
}

/// Evaluates `F(φ) = a₀ φ + Σₖ aₖ sin(kφ) / k` and `f(φ) = F'(φ)` in one
/// pass over the coefficients.
fn antiderivative<T: Real>(a: &[T], recip: &[T], phi: f64) -> (f64, f64) {
    let cos_phi = phi.cos();
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    let (mut cos_phi_prev, mut cos_phi_cur) = (cos_phi, 1.0f64);
    let (mut sin_phi_prev, mut sin_phi_cur) = (-sin_phi, 0.0f64);

    let a0 = a[0].wide();
    let mut big_f = a0 * phi;
    let mut f = a0;
    for (a_k, recip_k) in a.iter().zip(recip.iter()).skip(1) {
        let sin_phi_next = 2.0 * cos_phi * sin_phi_cur - sin_phi_prev;
        let cos_phi_next = 2.0 * cos_phi * cos_phi_cur - cos_phi_prev;
        sin_phi_prev = sin_phi_cur;
        sin_phi_cur = sin_phi_next;
        cos_phi_prev = cos_phi_cur;
        cos_phi_cur = cos_phi_next;

        big_f += (*a_k * *recip_k).wide() * sin_phi_next;
        f += a_k.wide() * cos_phi_next;
    }
    (big_f, f)
}
