use std::fmt;

use crate::math::function::mathfunction::MathFunction;

use super::point::Point;
use super::tabulatederror::TabulatedFunctionError;

// ─────────────────────────────────────────────────────────────────────────────
// FloorIndex
// ─────────────────────────────────────────────────────────────────────────────

/// Position of a query x relative to the knots of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorIndex {
    /// `x < left_bound()`.
    Before,
    /// `x[i] <= x < x[i + 1]`.
    Between(usize),
    /// `x >= right_bound()`.
    AtOrAfterEnd,
}

impl FloorIndex {
    /// Integer form: `Before` maps to 0 and `AtOrAfterEnd` to `count`.
    pub fn raw(&self, count: usize) -> usize {
        match self {
            FloorIndex::Before => 0,
            FloorIndex::Between(i) => *i,
            FloorIndex::AtOrAfterEnd => count
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Linear formula
// ─────────────────────────────────────────────────────────────────────────────

pub fn interpolate(x: f64, left_x: f64, right_x: f64, left_y: f64, right_y: f64) -> f64 {
    left_y + (right_y - left_y) * (x - left_x) / (right_x - left_x)
}

/// Same as [`interpolate`], but refuses x outside `[left_x, right_x]`.
pub fn try_interpolate(
    x: f64,
    left_x: f64,
    right_x: f64,
    left_y: f64,
    right_y: f64,
) -> Result<f64, TabulatedFunctionError> {
    if !(left_x <= x && x <= right_x) {
        return Err(TabulatedFunctionError::Interpolation { x, left_x, right_x });
    }
    Ok(interpolate(x, left_x, right_x, left_y, right_y))
}

// ─────────────────────────────────────────────────────────────────────────────
// TabulatedFunction
// ─────────────────────────────────────────────────────────────────────────────

/// A finite table of knots ordered by strictly increasing x, evaluated as a
/// piecewise linear function.
///
/// Implementors provide storage access; lookup dispatch, interpolation and
/// extrapolation come from the provided methods. `MathFunction::apply` of an
/// implementor is expected to forward to [`TabulatedFunction::evaluate`].
pub trait TabulatedFunction: MathFunction {
    fn count(&self) -> usize;

    /// `None` when `index >= count()`.
    fn point(&self, index: usize) -> Option<Point>;

    fn points(&self) -> Vec<Point>;

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError>;

    fn index_of_x(&self, x: f64) -> Option<usize>;

    fn index_of_y(&self, y: f64) -> Option<usize>;

    fn floor_index_of_x(&self, x: f64) -> FloorIndex;

    /// Overwrites y when x is already a knot, otherwise adds a new knot in order.
    fn insert(&mut self, x: f64, y: f64) -> Result<(), TabulatedFunctionError>;

    fn remove(&mut self, index: usize) -> Result<(), TabulatedFunctionError>;

    fn get_x(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index)
            .map(|pt| pt.x())
            .ok_or(TabulatedFunctionError::IndexOutOfBounds { index, count: self.count() })
    }

    fn get_y(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        self.point(index)
            .map(|pt| pt.y())
            .ok_or(TabulatedFunctionError::IndexOutOfBounds { index, count: self.count() })
    }

    fn left_bound(&self) -> f64 {
        self.point(0).map_or(f64::NAN, |pt| pt.x())
    }

    fn right_bound(&self) -> f64 {
        self.point(self.count().saturating_sub(1)).map_or(f64::NAN, |pt| pt.x())
    }

    /// Linear value on the segment starting at knot `lhs_index`, extended past
    /// its ends when x lies outside it.
    fn segment_value(&self, lhs_index: usize, x: f64) -> f64 {
        match (self.point(lhs_index), self.point(lhs_index + 1)) {
            (Some(lhs_pt), Some(rhs_pt)) => interpolate(x, lhs_pt.x(), rhs_pt.x(), lhs_pt.y(), rhs_pt.y()),
            _ => f64::NAN
        }
    }

    fn extrapolate_left(&self, x: f64) -> f64 {
        self.segment_value(0, x)
    }

    fn extrapolate_right(&self, x: f64) -> f64 {
        self.segment_value(self.count().saturating_sub(2), x)
    }

    fn interpolate_from(&self, x: f64, floor_index: usize) -> f64 {
        self.segment_value(floor_index, x)
    }

    fn evaluate(&self, x: f64) -> f64 {
        if x < self.left_bound() {
            return self.extrapolate_left(x);
        }
        if x > self.right_bound() {
            return self.extrapolate_right(x);
        }
        // exact knots skip the formula so that no rounding creeps in
        if let Some(index) = self.index_of_x(x) {
            return self.point(index).map_or(f64::NAN, |pt| pt.y());
        }
        match self.floor_index_of_x(x) {
            FloorIndex::Before => self.extrapolate_left(x),
            FloorIndex::Between(i) => self.interpolate_from(x, i),
            FloorIndex::AtOrAfterEnd => self.extrapolate_right(x)
        }
    }
}

/// Canonical text form shared by every implementation:
/// `"<name> size = <count>\n"` followed by one `"[x; y]\n"` line per knot.
pub fn write_table<T>(f: &mut fmt::Formatter<'_>, name: &str, table: &T) -> fmt::Result where
    T: TabulatedFunction + ?Sized {
    writeln!(f, "{} size = {}", name, table.count())?;
    for pt in table.points() {
        writeln!(f, "[{:?}; {:?}]", pt.x(), pt.y())?;
    }
    Ok(())
}
