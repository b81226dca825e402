use super::mathfunction::MathFunction;

/// `second(first(x))`; either side may itself be a composite.
#[derive(Debug, Clone, Copy)]
pub struct CompositeFunction<F, S> {
    first: F,
    second: S
}

impl<F, S> CompositeFunction<F, S> where
    F: MathFunction,
    S: MathFunction {
    pub fn new(first: F, second: S) -> CompositeFunction<F, S> {
        CompositeFunction { first, second }
    }

    pub fn first(&self) -> &F {
        &self.first
    }

    pub fn second(&self) -> &S {
        &self.second
    }
}

impl<F, S> MathFunction for CompositeFunction<F, S> where
    F: MathFunction,
    S: MathFunction {
    fn apply(&self, x: f64) -> f64 {
        self.second.apply(self.first.apply(x))
    }
}
