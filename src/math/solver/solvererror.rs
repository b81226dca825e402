use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Newton step would divide by a derivative that is exactly zero.
    #[error("derivative is zero at x = {x} (iteration {iteration})")]
    ZeroDerivative { x: f64, iteration: usize },

    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("at least one iteration is required, got {0}")]
    InvalidMaxIterations(usize),
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<(), SolverError> {
    if !(tolerance > 0.0 && tolerance.is_finite()) {
        return Err(SolverError::InvalidTolerance(tolerance));
    }
    Ok(())
}

pub(crate) fn check_max_iterations(max_iterations: usize) -> Result<(), SolverError> {
    if max_iterations == 0 {
        return Err(SolverError::InvalidMaxIterations(max_iterations));
    }
    Ok(())
}
