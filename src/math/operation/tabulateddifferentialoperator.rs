use crate::math::tabulated::point::Point;
use crate::math::tabulated::tabulatederror::TabulatedFunctionError;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctionfactory::TabulatedFunctionFactory;
use crate::math::tabulated::validation::check_count;

use super::tabulatedfunctionoperationservice::as_points;

/// Numerical derivative of a table on its own x grid.
///
/// Knot i gets the forward difference over `[x_i, x_{i+1}]`; the last knot
/// reuses the slope of the final segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedDifferentialOperator<F> {
    factory: F,
}

impl<F> TabulatedDifferentialOperator<F> where
    F: TabulatedFunctionFactory {
    pub fn new(factory: F) -> TabulatedDifferentialOperator<F> {
        TabulatedDifferentialOperator { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn derive<T>(&self, function: &T) -> Result<F::Output, TabulatedFunctionError> where
        T: TabulatedFunction + ?Sized {
        let points = as_points(function);
        let n = points.len();
        check_count(n)?;

        let x_values: Vec<f64> = points.iter().map(|pt| pt.x()).collect();
        let mut y_values: Vec<f64> = points
            .windows(2)
            .map(|pair| Point::slope(&pair[0], &pair[1]))
            .collect();
        y_values.push(y_values[n - 2]);

        self.factory.create(&x_values, &y_values)
    }
}
