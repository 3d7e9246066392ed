//! Conversions between the coordinate space of the caller and the scalar type
//! the geometry is computed in.

use crate::scalar::{Float, Scalar};
use crate::{point, Point};

use core::fmt::Debug;

/// A numeric type control points and output points can be expressed in.
///
/// Floating point coordinates convert directly. Integer coordinates round to the
/// nearest value when converting back from a scalar and saturate at the bounds of
/// the integer type. `i64` values beyond 2⁵³ lose precision on the way in.
pub trait Coordinate: Copy + PartialEq + Debug {
    fn to_scalar<S: Scalar>(self) -> S;
    fn from_scalar<S: Scalar>(value: S) -> Self;
}

macro_rules! impl_float_coordinate {
    ($($ty:ty),*) => {
        $(
            impl Coordinate for $ty {
                #[inline]
                fn to_scalar<S: Scalar>(self) -> S {
                    S::value_f64(self as f64)
                }

                #[inline]
                fn from_scalar<S: Scalar>(value: S) -> Self {
                    value.as_f64() as $ty
                }
            }
        )*
    };
}

macro_rules! impl_integer_coordinate {
    ($($ty:ty),*) => {
        $(
            impl Coordinate for $ty {
                #[inline]
                fn to_scalar<S: Scalar>(self) -> S {
                    S::value_f64(self as f64)
                }

                #[inline]
                fn from_scalar<S: Scalar>(value: S) -> Self {
                    // `as` saturates and maps NaN to zero.
                    Float::round(value.as_f64()) as $ty
                }
            }
        )*
    };
}

impl_float_coordinate!(f32, f64);
impl_integer_coordinate!(i32, i64);

/// Converts a point from the caller's coordinate space into scalar space.
#[inline]
pub fn to_scalar_point<T: Coordinate, S: Scalar>(p: Point<T>) -> Point<S> {
    point(p.x.to_scalar(), p.y.to_scalar())
}

/// Converts a point from scalar space back into the caller's coordinate space.
#[inline]
pub fn from_scalar_point<T: Coordinate, S: Scalar>(p: Point<S>) -> Point<T> {
    point(T::from_scalar(p.x), T::from_scalar(p.y))
}

#[test]
fn integer_coordinates_round_to_nearest() {
    let p: Point<i32> = from_scalar_point(point(2.5f64, -2.4));
    assert_eq!(p, point(3, -2));

    let p: Point<i32> = from_scalar_point(point(-2.5f64, 10.49));
    assert_eq!(p, point(-3, 10));
}

#[test]
fn integer_coordinates_saturate() {
    let p: Point<i32> = from_scalar_point(point(1e12f64, -1e12));
    assert_eq!(p, point(i32::MAX, i32::MIN));

    let p: Point<i32> = from_scalar_point(point(f64::NAN, 0.0));
    assert_eq!(p, point(0, 0));
}

#[test]
fn float_coordinates_round_trip() {
    let p = point(1.25f32, -7.5);
    let s: Point<f64> = to_scalar_point(p);
    assert_eq!(s, point(1.25, -7.5));
    assert_eq!(from_scalar_point::<f32, f64>(s), p);

    let q: Point<f32> = to_scalar_point(point(-30000i32, 42));
    assert_eq!(q, point(-30000.0, 42.0));
}
