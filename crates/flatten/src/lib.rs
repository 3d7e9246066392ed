#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_arguments)]

//! Approximation of quadratic and cubic bézier curves with polylines.
//!
//! This crate is reexported in [polyflat](../polyflat/index.html).
//!
//! # Overview
//!
//! The curves are recursively split in half (de Casteljau subdivision) until
//! each piece is flat enough to be replaced with a single vertex, following the
//! adaptive subdivision scheme of the Anti-Grain Geometry library:
//!
//! - a piece is flat enough when its control points are within the distance
//!   tolerance of its chord,
//! - optionally, the change of direction around the control points must also be
//!   below the angle tolerance, which refines sharp turns,
//! - control points that make a turn sharper than the cusp limit are emitted as
//!   vertices of their own,
//! - control points lying on the chord are handled separately, so that curves
//!   overshooting their end points keep their extent,
//! - the subdivision depth is bounded by the recursion limit.
//!
//! All of these thresholds live in [`FlattenOptions`].
//!
//! Points can be expressed in integer or floating point coordinates (see
//! [`Coordinate`](geom::Coordinate)). The computations always happen in `f64`
//! and the produced vertices are converted back, integers being rounded to the
//! nearest value. The output never contains two consecutive identical points.
//!
//! # Examples
//!
//! ```
//! use polyflat_flatten::{flatten_cubic, FlattenOptions};
//! use polyflat_flatten::geom::point;
//!
//! let options = FlattenOptions::scale(2.0);
//! let polyline = flatten_cubic(
//!     point(0, 0),
//!     point(0, 1000),
//!     point(1000, 1000),
//!     point(1000, 0),
//!     &options,
//! );
//!
//! assert_eq!(polyline.first(), Some(&point(0, 0)));
//! assert_eq!(polyline.last(), Some(&point(1000, 0)));
//! ```
//!
//! Consecutive curves of a path can be accumulated in a single [`Polyline`],
//! the vertex they share is only stored once:
//!
//! ```
//! use polyflat_flatten::{flatten_quadratic_into, FlattenOptions, Polyline};
//! use polyflat_flatten::geom::point;
//!
//! let options = FlattenOptions::DEFAULT;
//! let mut polyline: Polyline<i32> = Polyline::new();
//! flatten_quadratic_into(&mut polyline, point(0, 0), point(50, 100), point(100, 0), &options);
//! flatten_quadratic_into(&mut polyline, point(100, 0), point(150, -100), point(200, 0), &options);
//!
//! let points = polyline.points();
//! assert!(points.windows(2).all(|pair| pair[0] != pair[1]));
//! ```

pub use polyflat_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod cubic;
mod error;
mod flattener;
mod options;
mod polyline;
mod quadratic;

#[doc(inline)]
pub use crate::error::*;
#[doc(inline)]
pub use crate::flattener::{FlattenStats, Flattener};
#[doc(inline)]
pub use crate::options::FlattenOptions;
#[doc(inline)]
pub use crate::polyline::{PointSink, Polyline};

use crate::geom::{
    to_scalar_point, Coordinate, CubicBezierSegment, Point, QuadraticBezierSegment, Scalar,
};

/// Approximates a quadratic bézier curve with a polyline.
///
/// The first and last points of the result are `from` and `to`. The options are
/// not validated, see [`try_flatten_quadratic`].
pub fn flatten_quadratic<T: Coordinate>(
    from: Point<T>,
    ctrl: Point<T>,
    to: Point<T>,
    options: &FlattenOptions,
) -> Vec<Point<T>> {
    let mut output = Polyline::new();
    flatten_quadratic_into(&mut output, from, ctrl, to, options);

    output.into_points()
}

/// Approximates a cubic bézier curve with a polyline.
///
/// The first and last points of the result are `from` and `to`. The options are
/// not validated, see [`try_flatten_cubic`].
pub fn flatten_cubic<T: Coordinate>(
    from: Point<T>,
    ctrl1: Point<T>,
    ctrl2: Point<T>,
    to: Point<T>,
    options: &FlattenOptions,
) -> Vec<Point<T>> {
    let mut output = Polyline::new();
    flatten_cubic_into(&mut output, from, ctrl1, ctrl2, to, options);

    output.into_points()
}

/// Appends the approximation of a quadratic bézier curve to a polyline.
///
/// `from` is not added if it is already the last point of the polyline.
pub fn flatten_quadratic_into<T: Coordinate>(
    output: &mut Polyline<T>,
    from: Point<T>,
    ctrl: Point<T>,
    to: Point<T>,
    options: &FlattenOptions,
) -> FlattenStats {
    let curve: QuadraticBezierSegment<f64> = QuadraticBezierSegment {
        from: to_scalar_point(from),
        ctrl: to_scalar_point(ctrl),
        to: to_scalar_point(to),
    };

    let start = output.len();
    let mut flattener = Flattener::new(options);

    output.push(from);
    flattener.quadratic(&curve, output);
    output.push(to);

    log::debug!(
        "Flattened quadratic bezier into {} vertices",
        output.len() - start
    );

    flattener.stats()
}

/// Appends the approximation of a cubic bézier curve to a polyline.
///
/// `from` is not added if it is already the last point of the polyline.
pub fn flatten_cubic_into<T: Coordinate>(
    output: &mut Polyline<T>,
    from: Point<T>,
    ctrl1: Point<T>,
    ctrl2: Point<T>,
    to: Point<T>,
    options: &FlattenOptions,
) -> FlattenStats {
    let curve: CubicBezierSegment<f64> = CubicBezierSegment {
        from: to_scalar_point(from),
        ctrl1: to_scalar_point(ctrl1),
        ctrl2: to_scalar_point(ctrl2),
        to: to_scalar_point(to),
    };

    let start = output.len();
    let mut flattener = Flattener::new(options);

    output.push(from);
    flattener.cubic(&curve, output);
    output.push(to);

    log::debug!(
        "Flattened cubic bezier into {} vertices",
        output.len() - start
    );

    flattener.stats()
}

/// Same as [`flatten_quadratic`], after checking the options and the positions.
pub fn try_flatten_quadratic<T: Coordinate>(
    from: Point<T>,
    ctrl: Point<T>,
    to: Point<T>,
    options: &FlattenOptions,
) -> FlattenResult<Vec<Point<T>>> {
    options.validate()?;
    check_positions(&[from, ctrl, to])?;

    Ok(flatten_quadratic(from, ctrl, to, options))
}

/// Same as [`flatten_cubic`], after checking the options and the positions.
pub fn try_flatten_cubic<T: Coordinate>(
    from: Point<T>,
    ctrl1: Point<T>,
    ctrl2: Point<T>,
    to: Point<T>,
    options: &FlattenOptions,
) -> FlattenResult<Vec<Point<T>>> {
    options.validate()?;
    check_positions(&[from, ctrl1, ctrl2, to])?;

    Ok(flatten_cubic(from, ctrl1, ctrl2, to, options))
}

/// Approximates a quadratic bézier segment, computing in the segment's own
/// scalar type.
pub fn flatten_quadratic_segment<S: Scalar + Coordinate>(
    curve: &QuadraticBezierSegment<S>,
    options: &FlattenOptions,
) -> Vec<Point<S>> {
    let mut output = Polyline::new();
    let mut flattener = Flattener::new(options);

    output.push(curve.from);
    flattener.quadratic(curve, &mut output);
    output.push(curve.to);

    output.into_points()
}

/// Approximates a cubic bézier segment, computing in the segment's own scalar
/// type.
pub fn flatten_cubic_segment<S: Scalar + Coordinate>(
    curve: &CubicBezierSegment<S>,
    options: &FlattenOptions,
) -> Vec<Point<S>> {
    let mut output = Polyline::new();
    let mut flattener = Flattener::new(options);

    output.push(curve.from);
    flattener.cubic(curve, &mut output);
    output.push(curve.to);

    output.into_points()
}

fn check_positions<T: Coordinate>(positions: &[Point<T>]) -> Result<(), UnsupportedParameter> {
    for position in positions {
        let p: Point<f64> = to_scalar_point(*position);
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(UnsupportedParameter::PositionIsNotFinite);
        }
    }

    Ok(())
}

#[test]
fn checked_entry_points() {
    use crate::geom::point;

    let options = FlattenOptions::DEFAULT;
    let points = try_flatten_quadratic(point(0, 0), point(5, 0), point(10, 0), &options);
    assert_eq!(points, Ok(vec![point(0, 0), point(10, 0)]));

    let points = try_flatten_cubic(
        point(0.0, 0.0),
        point(f64::NAN, 0.0),
        point(1.0, 0.0),
        point(2.0, 0.0),
        &options,
    );
    assert_eq!(
        points,
        Err(FlattenError::UnsupportedParameter(
            UnsupportedParameter::PositionIsNotFinite
        ))
    );

    let points = try_flatten_quadratic(
        point(0, 0),
        point(5, 0),
        point(10, 0),
        &FlattenOptions::scale(-1.0),
    );
    assert_eq!(
        points,
        Err(FlattenError::UnsupportedParameter(
            UnsupportedParameter::ScaleIsNotPositive(-1.0)
        ))
    );
}

#[test]
fn segments_in_single_precision() {
    use crate::geom::point;

    let quadratic = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(5.0, 1.0),
        to: point(10.0, 0.0),
    };
    assert_eq!(
        flatten_quadratic_segment(&quadratic, &FlattenOptions::DEFAULT),
        vec![point(0.0, 0.0), point(5.0, 0.5), point(10.0, 0.0)]
    );

    let cubic = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(5.0, 0.0),
        ctrl2: point(10.0, 0.5),
        to: point(20.0, 0.0),
    };
    assert_eq!(
        flatten_cubic_segment(&cubic, &FlattenOptions::DEFAULT),
        vec![point(0.0, 0.0), point(7.5, 0.25), point(20.0, 0.0)]
    );
}

#[test]
fn consecutive_curves_share_their_joint() {
    use crate::geom::point;

    let options = FlattenOptions::DEFAULT;
    let mut polyline: Polyline<f64> = Polyline::new();
    flatten_quadratic_into(
        &mut polyline,
        point(0.0, 0.0),
        point(5.0, 1.0),
        point(10.0, 0.0),
        &options,
    );
    flatten_cubic_into(
        &mut polyline,
        point(10.0, 0.0),
        point(15.0, 0.0),
        point(20.0, 0.0),
        point(25.0, 0.0),
        &options,
    );

    assert_eq!(
        polyline.points(),
        &[
            point(0.0, 0.0),
            point(5.0, 0.5),
            point(10.0, 0.0),
            point(25.0, 0.0)
        ]
    );
}
