//! Vector types shared by nodes, constraints and picking.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Fixed-arity vector value used for positions, forces and accelerations.
///
/// Abstracts over dimensionality so the whole engine is written once and
/// runs on both [`Vec2`] and [`Vec3`].
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Vector with all components set to the same value.
    fn splat(value: Self::Scalar) -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// True when every component is finite.
    fn is_finite(self) -> bool;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

/// Vectors that can be laid out on the cloth's rest plane.
///
/// The plane's second axis is "up": grids hang downward along it and
/// gravity usually points against it.
pub trait Planar: Vec {
    /// Point on the layout plane (z = 0 in 3D).
    fn from_plane(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// Vertical coordinate.
    fn height(self) -> Self::Scalar;
}

/// Component-wise operators and the [`Vec`] impl for a struct of scalars.
macro_rules! vec_type {
    ($name:ident { $($field:ident),+ }) => {
        impl<F: Float> Add for $name<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self { $name { $($field: self.$field + rhs.$field),+ } }
        }

        impl<F: Float> Sub for $name<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self { $name { $($field: self.$field - rhs.$field),+ } }
        }

        impl<F: Float> Neg for $name<F> {
            type Output = Self;
            fn neg(self) -> Self { $name { $($field: -self.$field),+ } }
        }

        impl<F: Float> Vec for $name<F> {
            type Scalar = F;
            fn zero() -> Self { Self::splat(F::zero()) }
            fn splat(value: F) -> Self { $name { $($field: value),+ } }
            fn dot(self, other: Self) -> F {
                F::zero() $(+ self.$field * other.$field)+
            }
            fn scale(self, s: F) -> Self { $name { $($field: self.$field * s),+ } }
            fn is_finite(self) -> bool { true $(&& self.$field.is_finite())+ }
        }
    };
}

/// 2D vector for planar cloth.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

vec_type!(Vec2 { x, y });

impl<F: Float> Planar for Vec2<F> {
    fn from_plane(x: F, y: F) -> Self { Vec2 { x, y } }
    fn height(self) -> F { self.y }
}

/// 3D vector for a cloth sheet deforming in space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

vec_type!(Vec3 { x, y, z });

impl<F: Float> Planar for Vec3<F> {
    fn from_plane(x: F, y: F) -> Self { Vec3 { x, y, z: F::zero() } }
    fn height(self) -> F { self.y }
}
