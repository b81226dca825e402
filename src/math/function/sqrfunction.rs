use super::mathfunction::MathFunction;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SqrFunction;

impl SqrFunction {
    pub fn new() -> SqrFunction {
        SqrFunction
    }
}

impl MathFunction for SqrFunction {
    fn apply(&self, x: f64) -> f64 {
        x * x
    }
}
