use thiserror::Error;

/// The flattener's result type.
pub type FlattenResult<T> = Result<T, FlattenError>;

/// The checked flattening entry points' error enumeration.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum FlattenError {
    #[error("Unsupported parameter: {0}")]
    UnsupportedParameter(#[from] UnsupportedParameter),
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum UnsupportedParameter {
    #[error("Approximation scale is not a number")]
    ScaleIsNaN,
    #[error("Approximation scale must be positive, got {0}")]
    ScaleIsNotPositive(f64),
    #[error("The {0} must be a non-negative number")]
    InvalidTolerance(&'static str),
    #[error("Control point is not a finite position")]
    PositionIsNotFinite,
}

#[test]
fn error_messages() {
    let err: FlattenError = UnsupportedParameter::ScaleIsNotPositive(-2.0).into();
    assert_eq!(
        err.to_string(),
        "Unsupported parameter: Approximation scale must be positive, got -2"
    );
    assert_eq!(
        UnsupportedParameter::InvalidTolerance("cusp limit").to_string(),
        "The cusp limit must be a non-negative number"
    );
}
