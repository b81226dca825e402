use crate::math::function::mathfunction::MathFunction;

use super::arraytabulatedfunction::ArrayTabulatedFunction;
use super::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use super::tabulatederror::TabulatedFunctionError;
use super::tabulatedfunction::TabulatedFunction;

/// Chooses the backing store of the tables built by operations that produce
/// new tabulated functions.
pub trait TabulatedFunctionFactory {
    type Output: TabulatedFunction;

    fn create(&self, x_values: &[f64], y_values: &[f64]) -> Result<Self::Output, TabulatedFunctionError>;

    fn create_from_function(
        &self,
        source: &dyn MathFunction,
        from: f64,
        to: f64,
        count: usize,
    ) -> Result<Self::Output, TabulatedFunctionError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTabulatedFunctionFactory;

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    type Output = ArrayTabulatedFunction;

    fn create(&self, x_values: &[f64], y_values: &[f64]) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        ArrayTabulatedFunction::new(x_values, y_values)
    }

    fn create_from_function(
        &self,
        source: &dyn MathFunction,
        from: f64,
        to: f64,
        count: usize,
    ) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        ArrayTabulatedFunction::from_function(source, from, to, count)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListTabulatedFunctionFactory;

impl TabulatedFunctionFactory for LinkedListTabulatedFunctionFactory {
    type Output = LinkedListTabulatedFunction;

    fn create(&self, x_values: &[f64], y_values: &[f64]) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        LinkedListTabulatedFunction::new(x_values, y_values)
    }

    fn create_from_function(
        &self,
        source: &dyn MathFunction,
        from: f64,
        to: f64,
        count: usize,
    ) -> Result<LinkedListTabulatedFunction, TabulatedFunctionError> {
        LinkedListTabulatedFunction::from_function(source, from, to, count)
    }
}
