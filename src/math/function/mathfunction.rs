use super::compositefunction::CompositeFunction;

/// A real function of one real variable.
pub trait MathFunction {
    fn apply(&self, x: f64) -> f64;

    /// `self` first, then `after`.
    fn and_then<G>(self, after: G) -> CompositeFunction<Self, G> where
        Self: Sized,
        G: MathFunction {
        CompositeFunction::new(self, after)
    }
}

impl<F> MathFunction for F where
    F: Fn(f64) -> f64 {
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}
