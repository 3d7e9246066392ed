#[macro_use]
extern crate bencher;

use bencher::Bencher;

use polyflat::geom::{CubicBezierSegment, QuadraticBezierSegment};
use polyflat::math::*;
use polyflat::{flatten_cubic, flatten_cubic_into, flatten_quadratic, FlattenOptions, Polyline};

const N: usize = 100;

fn quadratic_default(bench: &mut Bencher) {
    let options = FlattenOptions::DEFAULT;
    bench.iter(|| {
        for _ in 0..N {
            let points = flatten_quadratic(
                point(0.0, 0.0),
                point(500.0, 1000.0),
                point(1000.0, 0.0),
                &options,
            );
            bencher::black_box(points);
        }
    });
}

fn cubic_default(bench: &mut Bencher) {
    let options = FlattenOptions::DEFAULT;
    bench.iter(|| {
        for _ in 0..N {
            let points = flatten_cubic(
                point(0.0, 0.0),
                point(0.0, 1000.0),
                point(1000.0, 1000.0),
                point(1000.0, 0.0),
                &options,
            );
            bencher::black_box(points);
        }
    });
}

fn cubic_integer(bench: &mut Bencher) {
    let options = FlattenOptions::DEFAULT;
    bench.iter(|| {
        for _ in 0..N {
            let points = flatten_cubic(
                point(0, 0),
                point(0, 1000),
                point(1000, 1000),
                point(1000, 0),
                &options,
            );
            bencher::black_box(points);
        }
    });
}

fn cubic_angle_and_cusp(bench: &mut Bencher) {
    let options = FlattenOptions::DEFAULT
        .with_angle_tolerance(0.1)
        .with_cusp_limit(1.0);
    bench.iter(|| {
        for _ in 0..N {
            let points = flatten_cubic(
                point(0.0, 0.0),
                point(1000.0, 10.0),
                point(500.0, 10.0),
                point(2000.0, 0.0),
                &options,
            );
            bencher::black_box(points);
        }
    });
}

fn cubic_path_reusing_polyline(bench: &mut Bencher) {
    let options = FlattenOptions::scale(4.0);
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(10.0, 80.0),
        ctrl2: point(90.0, 60.0),
        to: point(100.0, 0.0),
    };
    let mut polyline: Polyline<f64> = Polyline::with_capacity(4096);
    bench.iter(|| {
        polyline.clear();
        let mut from = curve.from;
        for i in 0..N {
            let offset = vector(i as f64 * 100.0, 0.0);
            flatten_cubic_into(
                &mut polyline,
                from,
                curve.ctrl1 + offset,
                curve.ctrl2 + offset,
                curve.to + offset,
                &options,
            );
            from = curve.to + offset;
        }
        bencher::black_box(polyline.len());
    });
}

fn quadratic_segment_f32(bench: &mut Bencher) {
    let options = FlattenOptions::scale(8.0);
    let curve = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };
    bench.iter(|| {
        for _ in 0..N {
            bencher::black_box(polyflat::flatten::flatten_quadratic_segment(&curve, &options));
        }
    });
}

benchmark_group!(
    flattening,
    quadratic_default,
    cubic_default,
    cubic_integer,
    cubic_angle_and_cusp,
    cubic_path_reusing_polyline,
    quadratic_segment_f32
);

benchmark_main!(flattening);
