//! Scalar trait shared by all tables.
//!
//! This module provides the `Real` trait which lets every routine in the
//! crate run on `f32` tables (the production case) as well as on `f64`
//! tables, through a single blanket implementation.

use core::fmt::Debug;
use lerp::Lerp;
use num_traits::{Float, FloatConst, FromPrimitive};

/// Trait for scalar types that tables can be stored in.
///
/// Implemented for every type with the necessary float arithmetic; in
/// practice that is `f32` and `f64`.
pub trait Real:
    Float + FloatConst + FromPrimitive + Lerp<Self> + Debug + Send + Sync
{
    /// Converts an `f64` literal into `Self`.
    ///
    /// Values that cannot be represented come back as NaN instead of
    /// panicking.
    #[inline]
    fn c(value: f64) -> Self {
        <Self as FromPrimitive>::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Widens `self` to `f64` for the accumulations that need the extra
    /// precision.
    #[inline]
    fn wide(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Narrows an `f64` accumulator back into `Self`.
    #[inline]
    fn narrow(value: f64) -> Self {
        Self::c(value)
    }

    /// `0.5`, used for every bisection step.
    #[inline]
    fn half() -> Self {
        Self::c(0.5)
    }
}

impl<T> Real for T where
    T: Float + FloatConst + FromPrimitive + Lerp<T> + Debug + Send + Sync
{
}

/// Absolute residual and bracket width below which every root-finder in this
/// crate stops.
pub const TOLERANCE: f64 = 1.0e-6;
