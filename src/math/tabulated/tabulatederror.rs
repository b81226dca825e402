use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// TabulatedFunctionError
// ─────────────────────────────────────────────────────────────────────────────

/// Failures raised while building, querying or mutating a tabulated function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabulatedFunctionError {
    #[error("x and y arrays have different lengths ({x_len} != {y_len})")]
    DifferentLengthOfArrays { x_len: usize, y_len: usize },

    /// `index` is the first position where `x[index] < x[index + 1]` fails.
    #[error("x values are not strictly increasing at index {index}")]
    ArrayIsNotSorted { index: usize },

    #[error("a tabulated function needs at least {min} points, got {count}")]
    TooFewPoints { count: usize, min: usize },

    #[error("index {index} is out of bounds for {count} points")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("x = {x} is outside the interpolation interval [{left_x}, {right_x}]")]
    Interpolation { x: f64, left_x: f64, right_x: f64 },

    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    /// Removal would leave fewer points than a table is allowed to hold.
    #[error("cannot remove a point from a table holding {count} points")]
    MinimumCountReached { count: usize },

    #[error("inconsistent functions: {0}")]
    InconsistentFunctions(String),

    #[error("operation '{0}' is not supported")]
    UnsupportedOperation(&'static str),
}
