use std::fmt;
use std::slice;

use tracing::debug;

use crate::math::function::mathfunction::MathFunction;

use super::point::Point;
use super::tabulatederror::TabulatedFunctionError;
use super::tabulatedfunction::{
    FloorIndex,
    TabulatedFunction,
    write_table
};
use super::validation::{
    check_insertable_x,
    check_removable,
    check_table,
    sample_grid
};

// ─────────────────────────────────────────────
// ArrayTabulatedFunction
// ─────────────────────────────────────────────
//
// Knots live in one contiguous Vec<Point>, kept sorted by x:
//   floor_index_of_x / index_of_x  binary search, O(log n)
//   insert / remove                shift the tail, O(n)
//   point / set_y                  O(1)

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTabulatedFunction {
    points: Vec<Point>,
}

impl ArrayTabulatedFunction {
    pub fn new(x_values: &[f64], y_values: &[f64]) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        check_table(x_values, y_values)?;
        let points: Vec<Point> = x_values
            .iter()
            .zip(y_values.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        debug!(count = points.len(), "array tabulated function built");
        Ok(ArrayTabulatedFunction { points })
    }

    /// Samples `source` at `count` equally spaced x over `[from, to]`.
    ///
    /// `from == to` yields `count` knots sharing one x; the sort check is not
    /// applied to this path.
    pub fn from_function<F>(
        source: &F,
        from: f64,
        to: f64,
        count: usize,
    ) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> where
        F: MathFunction + ?Sized {
        let points: Vec<Point> = sample_grid(from, to, count)?
            .into_iter()
            .map(|x| Point::new(x, source.apply(x)))
            .collect();
        debug!(count, from, to, "array tabulated function sampled");
        Ok(ArrayTabulatedFunction { points })
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// First position whose x is not smaller than `x`.
    fn lower_bound(&self, x: f64) -> usize {
        self.points.partition_point(|pt| pt.x() < x)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    fn points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        let count = self.points.len();
        let pt = self.points
            .get_mut(index)
            .ok_or(TabulatedFunctionError::IndexOutOfBounds { index, count })?;
        *pt = Point::new(pt.x(), y);
        Ok(())
    }

    fn index_of_x(&self, x: f64) -> Option<usize> {
        let i = self.lower_bound(x);
        match self.points.get(i) {
            Some(pt) if pt.x() == x => Some(i),
            _ => None
        }
    }

    fn index_of_y(&self, y: f64) -> Option<usize> {
        self.points.iter().position(|pt| pt.y() == y)
    }

    fn floor_index_of_x(&self, x: f64) -> FloorIndex {
        if x < self.left_bound() {
            FloorIndex::Before
        } else if x >= self.right_bound() {
            FloorIndex::AtOrAfterEnd
        } else {
            let upper = self.points.partition_point(|pt| pt.x() <= x);
            FloorIndex::Between(upper.saturating_sub(1))
        }
    }

    fn insert(&mut self, x: f64, y: f64) -> Result<(), TabulatedFunctionError> {
        check_insertable_x(x)?;
        let i = self.lower_bound(x);
        if self.points.get(i).is_some_and(|pt| pt.x() == x) {
            self.points[i] = Point::new(x, y);
        } else {
            self.points.insert(i, Point::new(x, y));
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        let count = self.points.len();
        if index >= count {
            return Err(TabulatedFunctionError::IndexOutOfBounds { index, count });
        }
        check_removable(count)?;
        self.points.remove(index);
        Ok(())
    }
}

impl MathFunction for ArrayTabulatedFunction {
    fn apply(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, "ArrayTabulatedFunction", self)
    }
}

impl<'a> IntoIterator for &'a ArrayTabulatedFunction {
    type Item = Point;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter().copied()
    }
}
