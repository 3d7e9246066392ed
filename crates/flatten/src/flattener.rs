use crate::options::FlattenOptions;
use crate::polyline::PointSink;

use polyflat_geom::{CubicBezierSegment, Point, QuadraticBezierSegment, Scalar};

/// Counters collected while flattening.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Deepest subdivision level that was examined. The whole curve is level zero.
    pub max_depth: u32,
    /// Number of sub-curves dropped because they were deeper than the recursion limit.
    pub truncated: u32,
    /// Number of interior points handed to the output, duplicates included.
    pub emitted: u32,
}

/// Adaptive recursive subdivision of bézier curves into line segments.
///
/// A flattener holds a snapshot of the [`FlattenOptions`] converted to the scalar
/// type the curves are expressed in. The distance tolerance is derived from the
/// approximation scale when the flattener is created, so each flattener owns its
/// tolerances and several of them can run concurrently with different options.
///
/// The flattener only emits the interior points of the curves. Pushing the end
/// points is the caller's job; the `flatten_*` functions of this crate do it.
///
/// ```
/// use polyflat_flatten::{Flattener, FlattenOptions, Polyline};
/// use polyflat_flatten::geom::{point, QuadraticBezierSegment};
///
/// let curve = QuadraticBezierSegment {
///     from: point(0.0, 0.0),
///     ctrl: point(5.0, 1.0),
///     to: point(10.0, 0.0),
/// };
///
/// let mut output: Polyline<f64> = Polyline::new();
/// let mut flattener = Flattener::new(&FlattenOptions::DEFAULT);
///
/// output.push(curve.from);
/// flattener.quadratic(&curve, &mut output);
/// output.push(curve.to);
///
/// assert_eq!(output.points(), &[point(0.0, 0.0), point(5.0, 0.5), point(10.0, 0.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct Flattener<S> {
    pub(crate) distance_tolerance_squared: S,
    pub(crate) collinearity_epsilon: S,
    pub(crate) angle_tolerance: S,
    pub(crate) cusp_limit: S,
    pub(crate) angle_check: bool,
    pub(crate) recursion_limit: u32,
    stats: FlattenStats,
}

impl<S: Scalar> Flattener<S> {
    pub fn new(options: &FlattenOptions) -> Self {
        Flattener {
            distance_tolerance_squared: S::value_f64(options.distance_tolerance_squared()),
            collinearity_epsilon: S::value_f64(options.collinearity_epsilon),
            angle_tolerance: S::value_f64(options.angle_tolerance),
            cusp_limit: S::value_f64(options.cusp_limit),
            angle_check: options.angle_check_enabled(),
            recursion_limit: options.recursion_limit,
            stats: FlattenStats::default(),
        }
    }

    /// Emits the interior vertices approximating a quadratic bézier curve.
    pub fn quadratic<Output: PointSink<S>>(
        &mut self,
        curve: &QuadraticBezierSegment<S>,
        output: &mut Output,
    ) {
        self.quadratic_step(curve, 0, output);
    }

    /// Emits the interior vertices approximating a cubic bézier curve.
    pub fn cubic<Output: PointSink<S>>(
        &mut self,
        curve: &CubicBezierSegment<S>,
        output: &mut Output,
    ) {
        self.cubic_step(curve, 0, output);
    }

    /// Counters accumulated since the flattener was created or since the last
    /// call to `reset_stats`.
    pub fn stats(&self) -> FlattenStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = FlattenStats::default();
    }

    pub fn distance_tolerance_squared(&self) -> S {
        self.distance_tolerance_squared
    }

    /// Depth guard. Returns false if the sub-curve at this depth must be dropped.
    #[inline]
    pub(crate) fn enter(&mut self, depth: u32) -> bool {
        if depth > self.recursion_limit {
            if self.stats.truncated == 0 {
                log::trace!(
                    "Bezier subdivision reached the recursion limit ({})",
                    self.recursion_limit
                );
            }
            self.stats.truncated += 1;
            return false;
        }

        self.stats.max_depth = self.stats.max_depth.max(depth);

        true
    }

    #[inline]
    pub(crate) fn emit<Output: PointSink<S>>(&mut self, output: &mut Output, position: Point<S>) {
        self.stats.emitted += 1;
        output.emit(position);
    }
}
