use crate::flattener::Flattener;
use crate::polyline::PointSink;

use polyflat_geom::utils::{chord_projection, direction_change, square_distance};
use polyflat_geom::{QuadraticBezierSegment, Scalar};

impl<S: Scalar> Flattener<S> {
    pub(crate) fn quadratic_step<Output: PointSink<S>>(
        &mut self,
        curve: &QuadraticBezierSegment<S>,
        depth: u32,
        output: &mut Output,
    ) {
        if !self.enter(depth) {
            return;
        }

        let (first, second) = curve.split_in_half();
        let split_point = first.to;

        let chord = curve.baseline();
        let chord_len2 = chord.square_length();
        // Distance of the control point to the chord, scaled by the chord's length.
        let d = chord.cross(curve.ctrl - curve.to).abs();

        if d > self.collinearity_epsilon {
            if d * d <= self.distance_tolerance_squared * chord_len2 {
                if !self.angle_check {
                    self.emit(output, split_point);
                    return;
                }

                let da = direction_change(curve.from, curve.ctrl, curve.to);
                if da < self.angle_tolerance {
                    self.emit(output, split_point);
                    return;
                }
            }
        } else {
            // Collinear case.
            let distance = if chord_len2 == S::ZERO {
                square_distance(curve.from, curve.ctrl)
            } else {
                let t = chord_projection(curve.ctrl, curve.from, chord);
                if t > S::ZERO && t < S::ONE {
                    // from---ctrl---to, the end points are enough.
                    return;
                }

                if t <= S::ZERO {
                    square_distance(curve.ctrl, curve.from)
                } else {
                    square_distance(curve.ctrl, curve.to)
                }
            };

            if distance < self.distance_tolerance_squared {
                self.emit(output, curve.ctrl);
                return;
            }
        }

        self.quadratic_step(&first, depth + 1, output);
        self.quadratic_step(&second, depth + 1, output);
    }
}

#[cfg(test)]
use crate::{flatten_quadratic, flatten_quadratic_into, FlattenOptions, Polyline};
#[cfg(test)]
use polyflat_geom::{point, Point};

#[test]
fn straight_line() {
    let points = flatten_quadratic(
        point(0, 0),
        point(5, 0),
        point(10, 0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(points, vec![point(0, 0), point(10, 0)]);
}

#[test]
fn single_point() {
    let points = flatten_quadratic(
        point(5, 5),
        point(5, 5),
        point(5, 5),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(points, vec![point(5, 5)]);
}

#[test]
fn flat_curve_emits_split_point() {
    let points = flatten_quadratic(
        point(0.0, 0.0),
        point(5.0, 1.0),
        point(10.0, 0.0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(points, vec![point(0.0, 0.0), point(5.0, 0.5), point(10.0, 0.0)]);
}

#[test]
fn collinear_control_point_beyond_the_end() {
    // The curve overshoots its end point before coming back.
    let points = flatten_quadratic(
        point(0.0, 0.0),
        point(12.0, 0.0),
        point(10.0, 0.0),
        &FlattenOptions::DEFAULT,
    );

    assert_eq!(points, vec![point(0.0, 0.0), point(10.5, 0.0), point(10.0, 0.0)]);
}

#[test]
fn collinear_control_point_on_the_end_points() {
    // Projection parameters of exactly zero and one are handled as control points
    // outside of the chord, at distance zero of the nearest end point.
    let options = FlattenOptions::DEFAULT;

    let points = flatten_quadratic(point(0, 0), point(0, 0), point(10, 0), &options);
    assert_eq!(points, vec![point(0, 0), point(10, 0)]);

    let points = flatten_quadratic(point(0, 0), point(10, 0), point(10, 0), &options);
    assert_eq!(points, vec![point(0, 0), point(10, 0)]);
}

#[test]
fn closed_curve() {
    // Start and end are the same but the control point is far away.
    let points = flatten_quadratic(
        point(0.0, 0.0),
        point(40.0, 0.0),
        point(0.0, 0.0),
        &FlattenOptions::DEFAULT,
    );

    // The tip of the curve is at x = 20.
    assert_eq!(points, vec![point(0.0, 0.0), point(20.0, 0.0), point(0.0, 0.0)]);
}

#[test]
fn parabola() {
    let points = flatten_quadratic(
        point(0.0, 0.0),
        point(30.0, 90.0),
        point(60.0, 0.0),
        &FlattenOptions::scale(0.05),
    );

    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(7.5, 19.6875),
            point(22.5, 42.1875),
            point(37.5, 42.1875),
            point(52.5, 19.6875),
            point(60.0, 0.0),
        ]
    );
}

#[test]
fn tolerance_monotonicity() {
    let mut previous = 0;
    for scale in &[0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0] {
        let points = flatten_quadratic(
            point(0.0, 0.0),
            point(50.0, 100.0),
            point(100.0, 0.0),
            &FlattenOptions::scale(*scale),
        );
        assert!(points.len() >= previous, "scale {scale}: {} < {previous}", points.len());
        previous = points.len();
    }

    // Sanity check that the range of scales above actually matters.
    assert!(previous > 40);
}

#[test]
fn reversed_curve_gives_reversed_points() {
    let from = point(0.0, 0.0);
    let ctrl = point(50.0, 100.0);
    let to = point(100.0, 0.0);
    let options = FlattenOptions::DEFAULT;

    let forward = flatten_quadratic(from, ctrl, to, &options);
    let mut backward = flatten_quadratic(to, ctrl, from, &options);
    backward.reverse();

    assert_eq!(forward.len(), 14);
    assert_eq!(forward, backward);
}

#[test]
fn angle_tolerance_refines_sharp_turns() {
    let from = point(0.0, 0.0);
    let ctrl = point(5.0, 1.0);
    let to = point(10.0, 0.0);

    // The curve turns by ~0.4 radians, over the angle tolerance.
    let options = FlattenOptions::DEFAULT.with_angle_tolerance(0.1);
    let points = flatten_quadratic(from, ctrl, to, &options);
    assert!(points.len() > 3);

    let options = FlattenOptions::DEFAULT.with_angle_tolerance(0.5);
    let points = flatten_quadratic(from, ctrl, to, &options);
    assert_eq!(points, vec![from, point(5.0, 0.5), to]);
}

#[test]
fn recursion_limit_truncates() {
    let mut output: Polyline<f64> = Polyline::new();
    let stats = flatten_quadratic_into(
        &mut output,
        point(0.0, 0.0),
        point(50.0, 100.0),
        point(100.0, 0.0),
        &FlattenOptions::scale(1e9).with_recursion_limit(4),
    );

    assert_eq!(stats.max_depth, 4);
    assert_eq!(stats.truncated, 32);
    assert_eq!(stats.emitted, 0);
    let expected: &[Point<f64>] = &[point(0.0, 0.0), point(100.0, 0.0)];
    assert_eq!(output.points(), expected);
}
