use crate::scalar::Scalar;
use crate::{point, Point, Vector};

/// Linear midpoint of two points.
#[inline]
pub fn midpoint<S: Scalar>(a: Point<S>, b: Point<S>) -> Point<S> {
    point((a.x + b.x) * S::HALF, (a.y + b.y) * S::HALF)
}

/// Squared euclidean distance between two points.
#[inline]
pub fn square_distance<S: Scalar>(a: Point<S>, b: Point<S>) -> S {
    (b - a).square_length()
}

/// Absolute change of direction, in radians, when going from `a` to `b` and then
/// from `b` to `c`.
///
/// The result is folded into `[0, π]` so that a turn of 350° counts as a turn of 10°.
#[inline]
pub fn direction_change<S: Scalar>(a: Point<S>, b: Point<S>, c: Point<S>) -> S {
    let incoming = b - a;
    let outgoing = c - b;
    fold_angle((direction(outgoing) - direction(incoming)).abs())
}

/// Direction of a vector relative to the x axis.
#[inline]
pub fn direction<S: Scalar>(v: Vector<S>) -> S {
    S::atan2(v.y, v.x)
}

/// Folds an absolute angle difference in `[0, 2π]` into `[0, π]`.
#[inline]
pub fn fold_angle<S: Scalar>(da: S) -> S {
    if da >= S::PI() {
        S::TWO * S::PI() - da
    } else {
        da
    }
}

/// Parameter of the orthogonal projection of `p` on the line starting at `from`
/// with direction `chord`.
///
/// Zero maps to `from` and one to `from + chord`. The caller is responsible for
/// not passing a zero-length chord.
#[inline]
pub fn chord_projection<S: Scalar>(p: Point<S>, from: Point<S>, chord: Vector<S>) -> S {
    (p - from).dot(chord) / chord.square_length()
}

#[test]
fn midpoint_is_symmetric() {
    let a = point(1.0f64, 3.0);
    let b = point(-7.0, 0.5);
    assert_eq!(midpoint(a, b), point(-3.0, 1.75));
    assert_eq!(midpoint(a, b), midpoint(b, a));
}

#[test]
fn square_distances() {
    assert_eq!(square_distance(point(0.0f32, 0.0), point(3.0, 4.0)), 25.0);
    assert_eq!(square_distance(point(2.0f64, 2.0), point(2.0, 2.0)), 0.0);
}

#[test]
fn direction_changes() {
    use core::f64::consts::{FRAC_PI_2, PI};

    let a = point(0.0f64, 0.0);
    let b = point(1.0, 0.0);

    // Straight ahead.
    assert_eq!(direction_change(a, b, point(2.0, 0.0)), 0.0);
    // Right angle, both ways.
    assert!((direction_change(a, b, point(1.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((direction_change(a, b, point(1.0, -1.0)) - FRAC_PI_2).abs() < 1e-12);
    // Going back.
    assert!((direction_change(a, b, point(0.0, 0.0)) - PI).abs() < 1e-12);

    // Crossing the ±π discontinuity of atan2 is a small turn.
    let turn = direction_change(point(1.0, 0.01), point(0.0, 0.0), point(-1.0, 0.01));
    assert!(turn < 0.03, "{turn}");
}

#[test]
fn projections() {
    let from = point(1.0f64, 1.0);
    let chord = Vector::new(4.0, 0.0);
    assert_eq!(chord_projection(point(3.0, 7.0), from, chord), 0.5);
    assert_eq!(chord_projection(point(-1.0, 1.0), from, chord), -0.5);
    assert_eq!(chord_projection(point(9.0, 0.0), from, chord), 2.0);
}
