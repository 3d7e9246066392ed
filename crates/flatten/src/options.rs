use crate::error::UnsupportedParameter;

/// Parameters controlling when the recursive subdivision stops.
///
/// The options are plain data: they are snapshotted by every top-level flattening
/// call (see [`Flattener::new`](crate::Flattener::new)), so the same value can be
/// shared between concurrent calls and changing it only affects later calls.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FlattenOptions {
    /// Inversely proportional to the maximum allowed distance between the curve and
    /// its approximation: the distance tolerance is `0.5 / approximation_scale`.
    ///
    /// Larger values produce more segments. Values that are not strictly positive
    /// yield a meaningless tolerance; they are not checked by the unchecked entry
    /// points.
    ///
    /// Default value: `FlattenOptions::DEFAULT_APPROXIMATION_SCALE`.
    pub approximation_scale: f64,

    /// Maximum change of direction, in radians, allowed around a control point
    /// before a flat enough piece of curve is subdivided further anyway.
    ///
    /// The check is disabled when this is below `angle_tolerance_epsilon`.
    ///
    /// Default value: `0.0` (disabled).
    pub angle_tolerance: f64,

    /// Change of direction, in radians, above which a control point of a cubic curve
    /// is considered a cusp and emitted as a vertex.
    ///
    /// Only taken into account while the angle check is enabled.
    ///
    /// Default value: `0.0` (disabled).
    pub cusp_limit: f64,

    /// Maximum subdivision depth.
    ///
    /// Sub-curves deeper than this are dropped: the curve is approximated with
    /// whatever precision the depth allows.
    ///
    /// Default value: `FlattenOptions::DEFAULT_RECURSION_LIMIT`.
    pub recursion_limit: u32,

    /// Cross products at or below this value are treated as zero, meaning the
    /// control point lies on the chord.
    ///
    /// Default value: `FlattenOptions::DEFAULT_COLLINEARITY_EPSILON`.
    pub collinearity_epsilon: f64,

    /// Angle tolerances below this value disable the angle check.
    ///
    /// Default value: `FlattenOptions::DEFAULT_ANGLE_TOLERANCE_EPSILON`.
    pub angle_tolerance_epsilon: f64,
}

impl FlattenOptions {
    /// Default approximation scale, corresponding to a distance tolerance of one unit.
    pub const DEFAULT_APPROXIMATION_SCALE: f64 = 0.5;
    pub const DEFAULT_RECURSION_LIMIT: u32 = 12;
    pub const DEFAULT_COLLINEARITY_EPSILON: f64 = 1e-30;
    pub const DEFAULT_ANGLE_TOLERANCE_EPSILON: f64 = 1e-4;

    pub const DEFAULT: Self = FlattenOptions {
        approximation_scale: Self::DEFAULT_APPROXIMATION_SCALE,
        angle_tolerance: 0.0,
        cusp_limit: 0.0,
        recursion_limit: Self::DEFAULT_RECURSION_LIMIT,
        collinearity_epsilon: Self::DEFAULT_COLLINEARITY_EPSILON,
        angle_tolerance_epsilon: Self::DEFAULT_ANGLE_TOLERANCE_EPSILON,
    };

    #[inline]
    pub fn scale(approximation_scale: f64) -> Self {
        Self::DEFAULT.with_approximation_scale(approximation_scale)
    }

    #[inline]
    pub const fn with_approximation_scale(mut self, scale: f64) -> Self {
        self.approximation_scale = scale;
        self
    }

    #[inline]
    pub const fn with_angle_tolerance(mut self, angle: f64) -> Self {
        self.angle_tolerance = angle;
        self
    }

    #[inline]
    pub const fn with_cusp_limit(mut self, angle: f64) -> Self {
        self.cusp_limit = angle;
        self
    }

    #[inline]
    pub const fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    #[inline]
    pub const fn with_collinearity_epsilon(mut self, epsilon: f64) -> Self {
        self.collinearity_epsilon = epsilon;
        self
    }

    #[inline]
    pub const fn with_angle_tolerance_epsilon(mut self, epsilon: f64) -> Self {
        self.angle_tolerance_epsilon = epsilon;
        self
    }

    /// Maximum allowed distance between the curve and its approximation.
    #[inline]
    pub fn distance_tolerance(&self) -> f64 {
        0.5 / self.approximation_scale
    }

    /// Square of [`distance_tolerance`](Self::distance_tolerance), the value
    /// distances are compared against during the subdivision.
    #[inline]
    pub fn distance_tolerance_squared(&self) -> f64 {
        let tolerance = self.distance_tolerance();
        tolerance * tolerance
    }

    /// Whether the change of direction around control points is checked.
    #[inline]
    pub fn angle_check_enabled(&self) -> bool {
        self.angle_tolerance >= self.angle_tolerance_epsilon
    }

    /// Checks that the options describe a meaningful tolerance.
    pub fn validate(&self) -> Result<(), UnsupportedParameter> {
        if self.approximation_scale.is_nan() {
            return Err(UnsupportedParameter::ScaleIsNaN);
        }
        if self.approximation_scale <= 0.0 {
            return Err(UnsupportedParameter::ScaleIsNotPositive(
                self.approximation_scale,
            ));
        }

        let tolerances = [
            ("angle tolerance", self.angle_tolerance),
            ("cusp limit", self.cusp_limit),
            ("collinearity epsilon", self.collinearity_epsilon),
            ("angle tolerance epsilon", self.angle_tolerance_epsilon),
        ];
        for (name, value) in tolerances {
            if value.is_nan() || value < 0.0 {
                return Err(UnsupportedParameter::InvalidTolerance(name));
            }
        }

        Ok(())
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn default_tolerances() {
    let options = FlattenOptions::default();
    assert_eq!(options, FlattenOptions::DEFAULT);
    assert_eq!(options.distance_tolerance(), 1.0);
    assert_eq!(options.distance_tolerance_squared(), 1.0);
    assert_eq!(options.recursion_limit, 12);
    assert!(!options.angle_check_enabled());
    assert!(options.validate().is_ok());
}

#[test]
fn derived_tolerance_follows_scale() {
    let options = FlattenOptions::scale(2.0);
    assert_eq!(options.distance_tolerance_squared(), 0.0625);

    let options = options.with_approximation_scale(0.25);
    assert_eq!(options.distance_tolerance(), 2.0);
}

#[test]
fn angle_check_threshold() {
    let options = FlattenOptions::DEFAULT.with_angle_tolerance(1e-5);
    assert!(!options.angle_check_enabled());

    let options = options.with_angle_tolerance(1e-4);
    assert!(options.angle_check_enabled());

    let options = options.with_angle_tolerance_epsilon(0.5);
    assert!(!options.angle_check_enabled());
}

#[test]
fn validation() {
    assert_eq!(
        FlattenOptions::scale(f64::NAN).validate(),
        Err(UnsupportedParameter::ScaleIsNaN)
    );
    assert_eq!(
        FlattenOptions::scale(0.0).validate(),
        Err(UnsupportedParameter::ScaleIsNotPositive(0.0))
    );
    assert_eq!(
        FlattenOptions::DEFAULT.with_cusp_limit(-1.0).validate(),
        Err(UnsupportedParameter::InvalidTolerance("cusp limit"))
    );
    assert_eq!(
        FlattenOptions::DEFAULT
            .with_angle_tolerance(f64::NAN)
            .validate(),
        Err(UnsupportedParameter::InvalidTolerance("angle tolerance"))
    );
    assert!(FlattenOptions::scale(f64::INFINITY).validate().is_ok());
}
