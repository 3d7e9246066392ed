use crate::scalar::Scalar;
use crate::utils::midpoint;
use crate::{Point, Vector};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }

    /// The vector going from the start of the curve to its end.
    #[inline]
    pub fn baseline(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Split the curve at t = 0.5 using the de Casteljau midpoint construction.
    ///
    /// The end of the first half (and start of the second) is the point of the
    /// curve at t = 0.5.
    pub fn split_in_half(&self) -> (QuadraticBezierSegment<S>, QuadraticBezierSegment<S>) {
        let ctrl_a = midpoint(self.from, self.ctrl);
        let ctrl_b = midpoint(self.ctrl, self.to);
        let split_point = midpoint(ctrl_a, ctrl_b);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: ctrl_a,
                to: split_point,
            },
            QuadraticBezierSegment {
                from: split_point,
                ctrl: ctrl_b,
                to: self.to,
            },
        )
    }
}

#[test]
fn split_in_half_matches_sample() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };

    let (a, b) = curve.split_in_half();
    assert_eq!(a.from, curve.from);
    assert_eq!(b.to, curve.to);
    assert_eq!(a.to, b.from);
    assert_eq!(a.to, curve.sample(0.5));
    assert_eq!(a.ctrl, point(25.0, 50.0));
    assert_eq!(b.ctrl, point(75.0, 50.0));

    // Each half traces the matching part of the original curve.
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let p = a.sample(t);
        let q = curve.sample(t * 0.5);
        assert!((p - q).length() < 1e-9);
    }
}

#[test]
fn flip_reverses_direction() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(1.0f32, 2.0),
        ctrl: point(3.0, 5.0),
        to: point(8.0, -1.0),
    };
    let flipped = curve.flip();

    assert_eq!(flipped.from, curve.to);
    assert_eq!(flipped.to, curve.from);
    assert_eq!(flipped.flip(), curve);
    assert_eq!(flipped.sample(0.25), curve.sample(0.75));
    assert_eq!(curve.baseline(), -flipped.baseline());
}
