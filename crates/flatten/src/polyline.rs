//! The output side of the flatteners.

use polyflat_geom::{from_scalar_point, Coordinate, Point, Scalar};

/// Receives the vertices produced by the flatteners, in curve order.
pub trait PointSink<S> {
    fn emit(&mut self, position: Point<S>);
}

/// An ordered sequence of points that never contains two consecutive equal points.
///
/// Points handed to the polyline through [`PointSink`] are converted to the
/// polyline's coordinate type first, so rounding to integer coordinates cannot
/// introduce duplicates either.
///
/// A polyline can be reused to accumulate several curves of a path: the end point
/// of a curve and the start point of the next one are only stored once.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline<T> {
    points: Vec<Point<T>>,
}

impl<T: Coordinate> Polyline<T> {
    pub fn new() -> Self {
        Polyline { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Polyline {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point unless it is equal to the last one.
    ///
    /// Returns whether the point was added.
    pub fn push(&mut self, position: Point<T>) -> bool {
        if self.points.last() == Some(&position) {
            return false;
        }

        self.points.push(position);
        true
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point<T>> {
        self.points.first().cloned()
    }

    pub fn last(&self) -> Option<Point<T>> {
        self.points.last().cloned()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

impl<T: Coordinate> Default for Polyline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coordinate, S: Scalar> PointSink<S> for Polyline<T> {
    #[inline]
    fn emit(&mut self, position: Point<S>) {
        self.push(from_scalar_point(position));
    }
}

impl<T> From<Polyline<T>> for Vec<Point<T>> {
    fn from(polyline: Polyline<T>) -> Self {
        polyline.points
    }
}

#[test]
fn consecutive_duplicates_are_dropped() {
    use polyflat_geom::point;

    let mut polyline = Polyline::new();
    assert!(polyline.is_empty());
    assert!(polyline.push(point(1, 2)));
    assert!(!polyline.push(point(1, 2)));
    assert!(polyline.push(point(3, 2)));
    // Only consecutive points are compared.
    assert!(polyline.push(point(1, 2)));

    assert_eq!(polyline.len(), 3);
    assert_eq!(polyline.first(), Some(point(1, 2)));
    assert_eq!(polyline.last(), Some(point(1, 2)));
    assert_eq!(polyline.points(), &[point(1, 2), point(3, 2), point(1, 2)]);

    polyline.clear();
    assert!(polyline.is_empty());
    assert_eq!(polyline.last(), None);
}

#[test]
fn emitted_points_are_rounded_before_comparison() {
    use polyflat_geom::point;

    let mut polyline: Polyline<i32> = Polyline::with_capacity(4);
    polyline.push(point(0, 0));
    polyline.emit(point(0.2f64, -0.3));
    polyline.emit(point(0.6f64, 0.0));
    polyline.emit(point(1.4f32, 0.1));

    let points: Vec<Point<i32>> = polyline.into();
    assert_eq!(points, vec![point(0, 0), point(1, 0)]);
}
