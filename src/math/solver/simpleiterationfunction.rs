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

/// Fixed-point iteration `x_{n+1} = phi(x_n)` started from a configured guess.
///
/// Stops once two consecutive iterates differ by less than `tolerance`.
/// Running out of iterations is not an error: the last iterate comes back
/// with `converged == false`.
pub struct SimpleIterationFunction<P> {
    phi: P,
    initial_guess: f64,
    max_iterations: usize,
    tolerance: f64,
}

impl<P> SimpleIterationFunction<P> where
    P: MathFunction {
    pub fn new(
        phi: P,
        initial_guess: f64,
        max_iterations: usize,
        tolerance: f64,
    ) -> Result<SimpleIterationFunction<P>, SolverError> {
        check_tolerance(tolerance)?;
        check_max_iterations(max_iterations)?;
        Ok(SimpleIterationFunction { phi, initial_guess, max_iterations, tolerance })
    }

    pub fn phi(&self) -> &P {
        &self.phi
    }

    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn solve(&self) -> IterationOutcome {
        let mut x = self.initial_guess;
        for iteration in 1..=self.max_iterations {
            let next = self.phi.apply(x);
            trace!(iteration, x = next, "simple iteration step");
            if (next - x).abs() < self.tolerance {
                debug!(x = next, iterations = iteration, "simple iteration converged");
                return IterationOutcome::new(next, iteration, true);
            }
            x = next;
        }
        warn!(x, max_iterations = self.max_iterations, "simple iteration did not converge");
        IterationOutcome::new(x, self.max_iterations, false)
    }
}

impl<P> MathFunction for SimpleIterationFunction<P> where
    P: MathFunction {
    /// The argument is ignored; the solve always starts from `initial_guess`.
    fn apply(&self, _x: f64) -> f64 {
        self.solve().value()
    }
}
