#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D geometric primitives on top of euclid, as needed to flatten
//! quadratic and cubic bézier curves.
//!
//! This crate is reexported in [polyflat](../polyflat/index.html).
//!
//! # Overview.
//!
//! This crate implements some of the maths to work with:
//!
//! - quadratic and cubic bézier curves and their de Casteljau subdivision,
//! - midpoints, squared distances and direction changes between points,
//! - conversions between caller coordinate types (integers or floats) and the
//!   floating point scalar type all geometric computations happen in.
//!
//! # Coordinates and scalars
//!
//! Curves coming from a CAD document are usually expressed in an integer or
//! fixed-point coordinate space. Comparisons of distances and angles must
//! however always be done in floating point, so the segment types are generic
//! over a [`Scalar`] (`f32` or `f64`) and the [`Coordinate`] trait converts
//! the caller's points to and from that space.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod coordinate;
pub mod cubic_bezier;
pub mod quadratic_bezier;
pub mod utils;

#[doc(inline)]
pub use crate::coordinate::{from_scalar_point, to_scalar_point, Coordinate};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;

        const MIN: Self;
        const MAX: Self;

        fn value(v: f32) -> Self;

        /// Conversion from a double precision value, rounding if `Self` is narrower.
        fn value_f64(v: f64) -> Self;

        /// Widening conversion to a double precision value.
        fn as_f64(self) -> f64;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }

        #[inline]
        fn value_f64(v: f64) -> Self {
            v as f32
        }

        #[inline]
        fn as_f64(self) -> f64 {
            self as f64
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }

        #[inline]
        fn value_f64(v: f64) -> Self {
            v
        }

        #[inline]
        fn as_f64(self) -> f64 {
            self
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
