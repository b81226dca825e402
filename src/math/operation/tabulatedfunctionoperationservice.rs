use crate::math::tabulated::point::Point;
use crate::math::tabulated::tabulatederror::TabulatedFunctionError;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctionfactory::TabulatedFunctionFactory;

/// Flat snapshot of every knot, in index order.
pub fn as_points<T>(function: &T) -> Vec<Point> where
    T: TabulatedFunction + ?Sized {
    function.points()
}

/// Pointwise arithmetic on tables sharing the same x grid. Results are built
/// with the service's factory, so the output backing is independent of the
/// inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedFunctionOperationService<F> {
    factory: F,
}

impl<F> TabulatedFunctionOperationService<F> where
    F: TabulatedFunctionFactory {
    pub fn new(factory: F) -> TabulatedFunctionOperationService<F> {
        TabulatedFunctionOperationService { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn add<A, B>(&self, lhs: &A, rhs: &B) -> Result<F::Output, TabulatedFunctionError> where
        A: TabulatedFunction + ?Sized,
        B: TabulatedFunction + ?Sized {
        self.do_operation(lhs, rhs, |u, v| u + v)
    }

    pub fn subtract<A, B>(&self, lhs: &A, rhs: &B) -> Result<F::Output, TabulatedFunctionError> where
        A: TabulatedFunction + ?Sized,
        B: TabulatedFunction + ?Sized {
        self.do_operation(lhs, rhs, |u, v| u - v)
    }

    pub fn multiply<A, B>(&self, lhs: &A, rhs: &B) -> Result<F::Output, TabulatedFunctionError> where
        A: TabulatedFunction + ?Sized,
        B: TabulatedFunction + ?Sized {
        self.do_operation(lhs, rhs, |u, v| u * v)
    }

    /// Division by a zero y follows IEEE rules (inf or NaN).
    pub fn divide<A, B>(&self, lhs: &A, rhs: &B) -> Result<F::Output, TabulatedFunctionError> where
        A: TabulatedFunction + ?Sized,
        B: TabulatedFunction + ?Sized {
        self.do_operation(lhs, rhs, |u, v| u / v)
    }

    fn do_operation<A, B, O>(&self, lhs: &A, rhs: &B, operation: O) -> Result<F::Output, TabulatedFunctionError> where
        A: TabulatedFunction + ?Sized,
        B: TabulatedFunction + ?Sized,
        O: Fn(f64, f64) -> f64 {
        let lhs_points = as_points(lhs);
        let rhs_points = as_points(rhs);
        if lhs_points.len() != rhs_points.len() {
            return Err(TabulatedFunctionError::InconsistentFunctions(format!(
                "point counts differ ({} != {})",
                lhs_points.len(),
                rhs_points.len()
            )));
        }

        let mut x_values = Vec::with_capacity(lhs_points.len());
        let mut y_values = Vec::with_capacity(lhs_points.len());
        for (i, (lhs_pt, rhs_pt)) in lhs_points.iter().zip(rhs_points.iter()).enumerate() {
            if lhs_pt.x() != rhs_pt.x() {
                return Err(TabulatedFunctionError::InconsistentFunctions(format!(
                    "x values differ at index {} ({} != {})",
                    i,
                    lhs_pt.x(),
                    rhs_pt.x()
                )));
            }
            x_values.push(lhs_pt.x());
            y_values.push(operation(lhs_pt.y(), rhs_pt.y()));
        }
        self.factory.create(&x_values, &y_values)
    }
}
