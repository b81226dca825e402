/// Result of an iterative solve.
///
/// `value` is the last iterate whether or not the stopping criterion was met;
/// `converged` tells the two cases apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOutcome {
    value: f64,
    iterations: usize,
    converged: bool
}

impl IterationOutcome {
    pub fn new(value: f64, iterations: usize, converged: bool) -> IterationOutcome {
        IterationOutcome { value, iterations, converged }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of update steps performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }
}
