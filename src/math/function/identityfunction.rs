use super::mathfunction::MathFunction;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdentityFunction;

impl IdentityFunction {
    pub fn new() -> IdentityFunction {
        IdentityFunction
    }
}

impl MathFunction for IdentityFunction {
    fn apply(&self, x: f64) -> f64 {
        x
    }
}
