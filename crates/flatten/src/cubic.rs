use crate::flattener::Flattener;
use crate::polyline::PointSink;

use polyflat_geom::utils::{chord_projection, direction_change, square_distance};
use polyflat_geom::{CubicBezierSegment, Point, Scalar, Vector};

/// Which control points are significantly away from the chord.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CubicCase {
    /// All four points are on the same line.
    Collinear,
    /// Only the second control point is off the chord.
    Ctrl2Significant,
    /// Only the first control point is off the chord.
    Ctrl1Significant,
    /// Both control points are off the chord.
    Regular,
}

impl CubicCase {
    #[inline]
    pub(crate) fn classify<S: Scalar>(d2: S, d3: S, epsilon: S) -> Self {
        match (d2 > epsilon, d3 > epsilon) {
            (false, false) => CubicCase::Collinear,
            (false, true) => CubicCase::Ctrl2Significant,
            (true, false) => CubicCase::Ctrl1Significant,
            (true, true) => CubicCase::Regular,
        }
    }
}

impl<S: Scalar> Flattener<S> {
    pub(crate) fn cubic_step<Output: PointSink<S>>(
        &mut self,
        curve: &CubicBezierSegment<S>,
        depth: u32,
        output: &mut Output,
    ) {
        if !self.enter(depth) {
            return;
        }

        let chord = curve.baseline();
        let chord_len2 = chord.square_length();
        let d2 = chord.cross(curve.ctrl1 - curve.to).abs();
        let d3 = chord.cross(curve.ctrl2 - curve.to).abs();

        let done = match CubicCase::classify(d2, d3, self.collinearity_epsilon) {
            CubicCase::Collinear => self.cubic_collinear(curve, chord, chord_len2, output),
            CubicCase::Ctrl2Significant => {
                self.cubic_one_control_point(curve, d3, chord_len2, false, output)
            }
            CubicCase::Ctrl1Significant => {
                self.cubic_one_control_point(curve, d2, chord_len2, true, output)
            }
            CubicCase::Regular => self.cubic_regular(curve, d2 + d3, chord_len2, output),
        };

        if done {
            return;
        }

        let (first, second) = curve.split_in_half();
        self.cubic_step(&first, depth + 1, output);
        self.cubic_step(&second, depth + 1, output);
    }

    fn cubic_collinear<Output: PointSink<S>>(
        &mut self,
        curve: &CubicBezierSegment<S>,
        chord: Vector<S>,
        chord_len2: S,
        output: &mut Output,
    ) -> bool {
        let (d2, d3) = if chord_len2 == S::ZERO {
            (
                square_distance(curve.from, curve.ctrl1),
                square_distance(curve.to, curve.ctrl2),
            )
        } else {
            let t2 = chord_projection(curve.ctrl1, curve.from, chord);
            let t3 = chord_projection(curve.ctrl2, curve.from, chord);
            if t2 > S::ZERO && t2 < S::ONE && t3 > S::ZERO && t3 < S::ONE {
                // Both control points are between the end points.
                return true;
            }

            (
                clamped_square_distance(curve, curve.ctrl1, t2),
                clamped_square_distance(curve, curve.ctrl2, t3),
            )
        };

        if d2 > d3 {
            if d2 < self.distance_tolerance_squared {
                self.emit(output, curve.ctrl1);
                return true;
            }
        } else if d3 < self.distance_tolerance_squared {
            self.emit(output, curve.ctrl2);
            return true;
        }

        false
    }

    /// Only one of the control points is off the chord, `d` is its cross product
    /// with the chord.
    fn cubic_one_control_point<Output: PointSink<S>>(
        &mut self,
        curve: &CubicBezierSegment<S>,
        d: S,
        chord_len2: S,
        ctrl1_significant: bool,
        output: &mut Output,
    ) -> bool {
        if d * d > self.distance_tolerance_squared * chord_len2 {
            return false;
        }

        if !self.angle_check {
            self.emit(output, curve.ctrl_midpoint());
            return true;
        }

        let da = if ctrl1_significant {
            direction_change(curve.from, curve.ctrl1, curve.ctrl2)
        } else {
            direction_change(curve.ctrl1, curve.ctrl2, curve.to)
        };

        if da < self.angle_tolerance {
            self.emit(output, curve.ctrl1);
            self.emit(output, curve.ctrl2);
            return true;
        }

        if self.cusp_limit != S::ZERO && da > self.cusp_limit {
            let cusp = if ctrl1_significant {
                curve.ctrl1
            } else {
                curve.ctrl2
            };
            self.emit(output, cusp);
            return true;
        }

        false
    }

    fn cubic_regular<Output: PointSink<S>>(
        &mut self,
        curve: &CubicBezierSegment<S>,
        d: S,
        chord_len2: S,
        output: &mut Output,
    ) -> bool {
        if d * d > self.distance_tolerance_squared * chord_len2 {
            return false;
        }

        if !self.angle_check {
            self.emit(output, curve.ctrl_midpoint());
            return true;
        }

        let da1 = direction_change(curve.from, curve.ctrl1, curve.ctrl2);
        let da2 = direction_change(curve.ctrl1, curve.ctrl2, curve.to);

        if da1 + da2 < self.angle_tolerance {
            self.emit(output, curve.ctrl_midpoint());
            return true;
        }

        if self.cusp_limit != S::ZERO {
            if da1 > self.cusp_limit {
                self.emit(output, curve.ctrl1);
                return true;
            }

            if da2 > self.cusp_limit {
                self.emit(output, curve.ctrl2);
                return true;
            }
        }

        false
    }
}

/// Squared distance between a collinear control point and the closest point of
/// the chord, given the parameter `t` of its projection on the chord.
fn clamped_square_distance<S: Scalar>(curve: &CubicBezierSegment<S>, p: Point<S>, t: S) -> S {
    if t <= S::ZERO {
        square_distance(p, curve.from)
    } else if t >= S::ONE {
        square_distance(p, curve.to)
    } else {
        square_distance(p, curve.from + curve.baseline() * t)
    }
}

#[cfg(test)]
use crate::{flatten_cubic, flatten_cubic_into, FlattenOptions, Polyline};
#[cfg(test)]
use polyflat_geom::point;

#[test]
fn classification() {
    let epsilon = 1e-30f64;
    assert_eq!(CubicCase::classify(0.0, 0.0, epsilon), CubicCase::Collinear);
    assert_eq!(CubicCase::classify(1e-30, 1e-31, epsilon), CubicCase::Collinear);
    assert_eq!(CubicCase::classify(0.0, 1.0, epsilon), CubicCase::Ctrl2Significant);
    assert_eq!(CubicCase::classify(1.0, 0.0, epsilon), CubicCase::Ctrl1Significant);
    assert_eq!(CubicCase::classify(2.0, 1.0, epsilon), CubicCase::Regular);
}

#[test]
fn straight_line() {
    let points = flatten_cubic(
        point(0, 0),
        point(3, 0),
        point(7, 0),
        point(10, 0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(points, vec![point(0, 0), point(10, 0)]);
}

#[test]
fn single_point() {
    let p = point(0.0, 0.0);
    let points = flatten_cubic(p, p, p, p, &FlattenOptions::DEFAULT);

    assert_eq!(points, vec![p]);
}

#[test]
fn collinear_control_points_outside_of_the_chord() {
    let points = flatten_cubic(
        point(0.0, 0.0),
        point(120.0, 0.0),
        point(-20.0, 0.0),
        point(100.0, 0.0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(52.96875, 0.0),
            point(47.03125, 0.0),
            point(100.0, 0.0),
        ]
    );
}

#[test]
fn folded_curve() {
    // The curve goes to x = 22.5 and comes back to its start.
    let points = flatten_cubic(
        point(0.0, 0.0),
        point(30.0, 0.0),
        point(30.0, 0.0),
        point(0.0, 0.0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(
        points,
        vec![point(0.0, 0.0), point(22.5, 0.0), point(15.0, 0.0), point(0.0, 0.0)]
    );
}

#[test]
fn one_significant_control_point() {
    let from = point(0.0, 0.0);
    let to = point(20.0, 0.0);

    // The first control point is on the chord.
    let ctrl1 = point(5.0, 0.0);
    let ctrl2 = point(10.0, 0.5);

    let points = flatten_cubic(from, ctrl1, ctrl2, to, &FlattenOptions::DEFAULT);
    assert_eq!(points, vec![from, point(7.5, 0.25), to]);

    // A small turn emits both control points.
    let options = FlattenOptions::DEFAULT.with_angle_tolerance(0.5);
    let points = flatten_cubic(from, ctrl1, ctrl2, to, &options);
    assert_eq!(points, vec![from, ctrl1, ctrl2, to]);

    // A turn over the cusp limit emits the significant control point alone.
    let options = FlattenOptions::DEFAULT
        .with_angle_tolerance(0.01)
        .with_cusp_limit(0.1);
    let points = flatten_cubic(from, ctrl1, ctrl2, to, &options);
    assert_eq!(points, vec![from, ctrl2, to]);

    // Same thing with the roles of the control points swapped.
    let points = flatten_cubic(
        from,
        point(10.0, 0.5),
        point(15.0, 0.0),
        to,
        &FlattenOptions::DEFAULT,
    );
    assert_eq!(points, vec![from, point(12.5, 0.25), to]);
}

#[test]
fn cusp() {
    let options = FlattenOptions::DEFAULT
        .with_angle_tolerance(0.1)
        .with_cusp_limit(1.0);

    let points = flatten_cubic(
        point(0.0, 0.0),
        point(10.0, 0.1),
        point(5.0, 0.1),
        point(20.0, 0.0),
        &options,
    );

    assert_eq!(points, vec![point(0.0, 0.0), point(10.0, 0.1), point(20.0, 0.0)]);
}

#[test]
fn cusp_with_integer_coordinates() {
    let options = FlattenOptions::scale(0.01)
        .with_angle_tolerance(0.1)
        .with_cusp_limit(1.0);

    let points = flatten_cubic(
        point(0, 0),
        point(1000, 10),
        point(500, 10),
        point(2000, 0),
        &options,
    );

    assert_eq!(points, vec![point(0, 0), point(1000, 10), point(2000, 0)]);
}

#[test]
fn integer_arch() {
    let points = flatten_cubic(
        point(0, 0),
        point(0, 100),
        point(100, 100),
        point(100, 0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(
        points,
        vec![
            point(0, 0),
            point(0, 9),
            point(2, 26),
            point(6, 40),
            point(12, 51),
            point(19, 61),
            point(27, 68),
            point(36, 72),
            point(45, 75),
            point(55, 75),
            point(64, 72),
            point(73, 68),
            point(81, 61),
            point(88, 51),
            point(94, 40),
            point(98, 26),
            point(100, 9),
            point(100, 0),
        ]
    );
}

#[test]
fn tolerance_monotonicity() {
    let mut counts = Vec::new();
    for scale in &[0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0] {
        let points = flatten_cubic(
            point(0.0, 0.0),
            point(0.0, 100.0),
            point(100.0, 100.0),
            point(100.0, 0.0),
            &FlattenOptions::scale(*scale),
        );
        counts.push(points.len());
    }

    assert_eq!(counts, vec![10, 18, 18, 34, 34, 66, 66, 130]);
}

#[test]
fn reversed_curve_gives_reversed_points() {
    let from = point(0.0, 0.0);
    let ctrl1 = point(10.0, 80.0);
    let ctrl2 = point(90.0, 60.0);
    let to = point(100.0, 0.0);
    let options = FlattenOptions::DEFAULT;

    let forward = flatten_cubic(from, ctrl1, ctrl2, to, &options);
    let mut backward = flatten_cubic(to, ctrl2, ctrl1, from, &options);
    backward.reverse();

    assert_eq!(forward.len(), 18);
    assert_eq!(forward, backward);
}

#[test]
fn recursion_limit_truncates() {
    let mut output: Polyline<f64> = Polyline::new();
    let curve = [
        point(0.0, 0.0),
        point(0.0, 100.0),
        point(100.0, 100.0),
        point(100.0, 0.0),
    ];

    let stats = flatten_cubic_into(
        &mut output,
        curve[0],
        curve[1],
        curve[2],
        curve[3],
        &FlattenOptions::scale(1e9),
    );
    assert_eq!(stats.max_depth, 12);
    assert_eq!(stats.truncated, 8192);
    assert_eq!(stats.emitted, 0);
    assert_eq!(output.points(), &[point(0.0, 0.0), point(100.0, 0.0)]);

    output.clear();
    let stats = flatten_cubic_into(
        &mut output,
        curve[0],
        curve[1],
        curve[2],
        curve[3],
        &FlattenOptions::scale(1e9).with_recursion_limit(3),
    );
    assert_eq!(stats.max_depth, 3);
    assert_eq!(stats.truncated, 16);
}
