use tracing::{
    debug,
    trace,
    warn
};

use crate::math::function::mathfunction::MathFunction;

use super::iterationoutcome::IterationOutcome;
use super::solvererror::{
    SolverError,
    check_max_iterations,
    check_tolerance
};

// ─────────────────────────────────────────────────────────────────────────────
// NewtonMethodFunction
// ─────────────────────────────────────────────────────────────────────────────
//
//   x_{n+1} = x_n - f(x_n) / f'(x_n)
//
// Stops as soon as |f(x_n)| < tolerance. When the budget runs out the last
// iterate is returned with `converged == false`. A derivative equal to 0.0
// aborts the solve.

/// Newton root finder. The entry point is [`NewtonMethodFunction::solve`]
/// rather than `MathFunction::apply`, since a zero derivative has to be
/// reported as an error and `apply` cannot return one.
pub struct NewtonMethodFunction<F, D> {
    function: F,
    derivative: D,
    tolerance: f64,
    max_iterations: usize,
}

impl<F, D> NewtonMethodFunction<F, D> where
    F: MathFunction,
    D: MathFunction {
    pub fn new(
        function: F,
        derivative: D,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<NewtonMethodFunction<F, D>, SolverError> {
        check_tolerance(tolerance)?;
        check_max_iterations(max_iterations)?;
        Ok(NewtonMethodFunction { function, derivative, tolerance, max_iterations })
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn derivative(&self) -> &D {
        &self.derivative
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Runs the iteration from `initial_guess`.
    pub fn solve(&self, initial_guess: f64) -> Result<IterationOutcome, SolverError> {
        let mut x = initial_guess;
        for iteration in 0..self.max_iterations {
            let fx = self.function.apply(x);
            if fx.abs() < self.tolerance {
                debug!(x, iterations = iteration, "newton method converged");
                return Ok(IterationOutcome::new(x, iteration, true));
            }
            let dfx = self.derivative.apply(x);
            if dfx == 0.0 {
                return Err(SolverError::ZeroDerivative { x, iteration });
            }
            x -= fx / dfx;
            trace!(iteration, x, fx, dfx, "newton step");
        }

        if self.function.apply(x).abs() < self.tolerance {
            debug!(x, iterations = self.max_iterations, "newton method converged");
            return Ok(IterationOutcome::new(x, self.max_iterations, true));
        }
        warn!(x, max_iterations = self.max_iterations, "newton method did not converge");
        Ok(IterationOutcome::new(x, self.max_iterations, false))
    }
}
