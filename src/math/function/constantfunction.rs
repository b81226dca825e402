use super::mathfunction::MathFunction;

/// Returns the same value for every argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantFunction {
    constant: f64
}

impl ConstantFunction {
    pub fn new(constant: f64) -> ConstantFunction {
        ConstantFunction { constant }
    }

    pub fn zero() -> ConstantFunction {
        ConstantFunction::new(0.0)
    }

    pub fn unit() -> ConstantFunction {
        ConstantFunction::new(1.0)
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl MathFunction for ConstantFunction {
    fn apply(&self, _x: f64) -> f64 {
        self.constant
    }
}
