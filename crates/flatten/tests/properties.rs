use polyflat_flatten::geom::{point, Point};
use polyflat_flatten::{
    flatten_cubic, flatten_cubic_into, flatten_quadratic, flatten_quadratic_into, FlattenOptions,
    Polyline,
};
use proptest::prelude::*;

fn int_point() -> impl Strategy<Value = Point<i32>> {
    (-10_000i32..10_000, -10_000i32..10_000).prop_map(|(x, y)| point(x, y))
}

fn float_point() -> impl Strategy<Value = Point<f64>> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| point(x, y))
}

fn flatten_options() -> impl Strategy<Value = FlattenOptions> {
    (
        prop_oneof![Just(0.01f64), Just(0.1), Just(0.5), Just(2.0), Just(10.0)],
        prop_oneof![Just(0.0f64), Just(0.05), Just(0.3)],
        prop_oneof![Just(0.0f64), Just(0.5), Just(2.0)],
        0u32..=12,
    )
        .prop_map(|(scale, angle, cusp, limit)| {
            FlattenOptions::scale(scale)
                .with_angle_tolerance(angle)
                .with_cusp_limit(cusp)
                .with_recursion_limit(limit)
        })
}

fn assert_no_stutter<T: PartialEq + std::fmt::Debug>(points: &[Point<T>]) {
    for pair in points.windows(2) {
        assert_ne!(pair[0], pair[1], "{:?}", points);
    }
}

fn assert_in_bounds<T: PartialOrd + Copy + std::fmt::Debug>(
    points: &[Point<T>],
    curve: &[Point<T>],
) {
    let mut min = curve[0];
    let mut max = curve[0];
    for p in curve {
        if p.x < min.x {
            min.x = p.x;
        }
        if p.y < min.y {
            min.y = p.y;
        }
        if p.x > max.x {
            max.x = p.x;
        }
        if p.y > max.y {
            max.y = p.y;
        }
    }

    for p in points {
        assert!(
            p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y,
            "{:?} is outside of {:?} {:?}",
            p,
            min,
            max
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, .. ProptestConfig::default() })]

    #[test]
    fn quadratic_integer_polylines(
        from in int_point(),
        ctrl in int_point(),
        to in int_point(),
        options in flatten_options(),
    ) {
        let points = flatten_quadratic(from, ctrl, to, &options);

        prop_assert_eq!(points.first(), Some(&from));
        prop_assert_eq!(points.last(), Some(&to));
        assert_no_stutter(&points);
        assert_in_bounds(&points, &[from, ctrl, to]);
    }

    #[test]
    fn cubic_integer_polylines(
        from in int_point(),
        ctrl1 in int_point(),
        ctrl2 in int_point(),
        to in int_point(),
        options in flatten_options(),
    ) {
        let points = flatten_cubic(from, ctrl1, ctrl2, to, &options);

        prop_assert_eq!(points.first(), Some(&from));
        prop_assert_eq!(points.last(), Some(&to));
        assert_no_stutter(&points);
        assert_in_bounds(&points, &[from, ctrl1, ctrl2, to]);
    }

    #[test]
    fn quadratic_float_polylines(
        from in float_point(),
        ctrl in float_point(),
        to in float_point(),
        options in flatten_options(),
    ) {
        let mut polyline = Polyline::new();
        let stats = flatten_quadratic_into(&mut polyline, from, ctrl, to, &options);
        let points = polyline.points();

        prop_assert_eq!(points.first(), Some(&from));
        prop_assert_eq!(points.last(), Some(&to));
        assert_no_stutter(points);
        assert_in_bounds(points, &[from, ctrl, to]);

        // Each leaf of the subdivision emits at most one vertex.
        prop_assert!(stats.max_depth <= options.recursion_limit);
        prop_assert!(u64::from(stats.emitted) <= 1u64 << options.recursion_limit);
    }

    #[test]
    fn cubic_float_polylines(
        from in float_point(),
        ctrl1 in float_point(),
        ctrl2 in float_point(),
        to in float_point(),
        options in flatten_options(),
    ) {
        let mut polyline = Polyline::new();
        let stats = flatten_cubic_into(&mut polyline, from, ctrl1, ctrl2, to, &options);
        let points = polyline.points();

        prop_assert_eq!(points.first(), Some(&from));
        prop_assert_eq!(points.last(), Some(&to));
        assert_no_stutter(points);
        assert_in_bounds(points, &[from, ctrl1, ctrl2, to]);

        // Each leaf of the subdivision emits at most two vertices.
        prop_assert!(stats.max_depth <= options.recursion_limit);
        prop_assert!(u64::from(stats.emitted) <= 2u64 << options.recursion_limit);
    }
}

#[test_log::test]
fn deep_subdivision_is_truncated() {
    let options = FlattenOptions::scale(1e12).with_recursion_limit(6);
    let mut polyline: Polyline<f64> = Polyline::new();
    let stats = flatten_quadratic_into(
        &mut polyline,
        point(0.0, 0.0),
        point(500.0, 1000.0),
        point(1000.0, 0.0),
        &options,
    );

    assert_eq!(stats.max_depth, 6);
    assert_eq!(stats.truncated, 128);
    assert_eq!(stats.emitted, 0);
    assert_eq!(polyline.len(), 2);
}
