//! Floating-point abstraction so the engine runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations the cloth engine needs.
///
/// Implemented for `f32` and `f64`. Transcendental math goes through `libm`
/// so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (constants, grid coordinates, configuration).
    fn from_f32(v: f32) -> Self;
    /// Widen to f64 for error reports and telemetry.
    fn to_f64(self) -> f64;
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// NaN check.
    fn is_nan(self) -> bool;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:path, $abs:path, $floor:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn two() -> Self { 2.0 }
            fn sqrt(self) -> Self { $sqrt(self) }
            fn abs(self) -> Self { $abs(self) }
            fn floor(self) -> Self { $floor(self) }
            fn min(self, other: Self) -> Self { if other < self { other } else { self } }
            fn max(self, other: Self) -> Self { if other > self { other } else { self } }
            fn from_f32(v: f32) -> Self { v as $t }
            fn to_f64(self) -> f64 { self as f64 }
            fn is_finite(self) -> bool { $t::is_finite(self) }
            fn is_nan(self) -> bool { $t::is_nan(self) }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::fabsf, libm::floorf);
impl_float!(f64, libm::sqrt, libm::fabs, libm::floor);
