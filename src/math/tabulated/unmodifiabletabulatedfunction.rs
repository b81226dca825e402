use std::fmt;

use crate::math::function::mathfunction::MathFunction;

use super::point::Point;
use super::tabulatederror::TabulatedFunctionError;
use super::tabulatedfunction::{
    FloorIndex,
    TabulatedFunction,
    write_table
};

/// Read-only view over another table. Every mutation fails with
/// `UnsupportedOperation`; queries forward to the wrapped table.
#[derive(Debug, Clone)]
pub struct UnmodifiableTabulatedFunction<T> {
    inner: T,
}

impl<T> UnmodifiableTabulatedFunction<T> where
    T: TabulatedFunction {
    pub fn new(inner: T) -> UnmodifiableTabulatedFunction<T> {
        UnmodifiableTabulatedFunction { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> TabulatedFunction for UnmodifiableTabulatedFunction<T> where
    T: TabulatedFunction {
    fn count(&self) -> usize {
        self.inner.count()
    }

    fn point(&self, index: usize) -> Option<Point> {
        self.inner.point(index)
    }

    fn points(&self) -> Vec<Point> {
        self.inner.points()
    }

    fn set_y(&mut self, _index: usize, _y: f64) -> Result<(), TabulatedFunctionError> {
        Err(TabulatedFunctionError::UnsupportedOperation("set_y"))
    }

    fn index_of_x(&self, x: f64) -> Option<usize> {
        self.inner.index_of_x(x)
    }

    fn index_of_y(&self, y: f64) -> Option<usize> {
        self.inner.index_of_y(y)
    }

    fn floor_index_of_x(&self, x: f64) -> FloorIndex {
        self.inner.floor_index_of_x(x)
    }

    fn insert(&mut self, _x: f64, _y: f64) -> Result<(), TabulatedFunctionError> {
        Err(TabulatedFunctionError::UnsupportedOperation("insert"))
    }

    fn remove(&mut self, _index: usize) -> Result<(), TabulatedFunctionError> {
        Err(TabulatedFunctionError::UnsupportedOperation("remove"))
    }

    fn evaluate(&self, x: f64) -> f64 {
        self.inner.evaluate(x)
    }
}

impl<T> MathFunction for UnmodifiableTabulatedFunction<T> where
    T: TabulatedFunction {
    fn apply(&self, x: f64) -> f64 {
        self.inner.apply(x)
    }
}

impl<T> fmt::Display for UnmodifiableTabulatedFunction<T> where
    T: TabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, "UnmodifiableTabulatedFunction", self)
    }
}
