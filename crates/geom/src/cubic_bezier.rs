use crate::scalar::Scalar;
use crate::utils::midpoint;
use crate::{Point, Vector};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }

    /// The vector going from the start of the curve to its end.
    #[inline]
    pub fn baseline(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Midpoint of the two control points.
    #[inline]
    pub fn ctrl_midpoint(&self) -> Point<S> {
        midpoint(self.ctrl1, self.ctrl2)
    }

    /// Split the curve at t = 0.5 using the de Casteljau midpoint construction.
    pub fn split_in_half(&self) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let p12 = midpoint(self.from, self.ctrl1);
        let p23 = midpoint(self.ctrl1, self.ctrl2);
        let p34 = midpoint(self.ctrl2, self.to);
        let p123 = midpoint(p12, p23);
        let p234 = midpoint(p23, p34);
        let p1234 = midpoint(p123, p234);

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: p12,
                ctrl2: p123,
                to: p1234,
            },
            CubicBezierSegment {
                from: p1234,
                ctrl1: p234,
                ctrl2: p34,
                to: self.to,
            },
        )
    }
}

#[test]
fn split_in_half_matches_sample() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };

    let (a, b) = curve.split_in_half();
    assert_eq!(a.from, curve.from);
    assert_eq!(b.to, curve.to);
    assert_eq!(a.to, b.from);
    assert_eq!(a.to, point(50.0, 75.0));
    assert!((a.to - curve.sample(0.5)).length() < 1e-12);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let p = b.sample(t);
        let q = curve.sample(0.5 + t * 0.5);
        assert!((p - q).length() < 1e-9);
    }
}

#[test]
fn flip_reverses_direction() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 80.0),
        ctrl2: point(90.0, 60.0),
        to: point(100.0, 0.0),
    };
    let flipped = curve.flip();

    assert_eq!(flipped.flip(), curve);
    assert_eq!(flipped.ctrl1, curve.ctrl2);
    assert!((flipped.sample(0.3) - curve.sample(0.7)).length() < 1e-9);
    assert_eq!(curve.ctrl_midpoint(), point(50.0, 70.0));
}
