use super::tabulatederror::TabulatedFunctionError;

/// Smallest number of knots a tabulated function may hold.
pub const MIN_POINT_COUNT: usize = 2;

pub fn check_length_is_the_same(x_values: &[f64], y_values: &[f64]) -> Result<(), TabulatedFunctionError> {
    if x_values.len() != y_values.len() {
        return Err(TabulatedFunctionError::DifferentLengthOfArrays {
            x_len: x_values.len(),
            y_len: y_values.len()
        });
    }
    Ok(())
}

/// Fails unless `x_values` is strictly increasing.
///
/// The comparison is written as `!(lhs < rhs)` so that NaN is rejected as well.
pub fn check_sorted(x_values: &[f64]) -> Result<(), TabulatedFunctionError> {
    match x_values.windows(2).position(|pair| !(pair[0] < pair[1])) {
        Some(index) => Err(TabulatedFunctionError::ArrayIsNotSorted { index }),
        None => Ok(())
    }
}

pub fn check_count(count: usize) -> Result<(), TabulatedFunctionError> {
    if count < MIN_POINT_COUNT {
        return Err(TabulatedFunctionError::TooFewPoints { count, min: MIN_POINT_COUNT });
    }
    Ok(())
}

/// Runs every construction-time check on a pair of coordinate slices.
pub fn check_table(x_values: &[f64], y_values: &[f64]) -> Result<(), TabulatedFunctionError> {
    check_length_is_the_same(x_values, y_values)?;
    check_count(x_values.len())?;
    check_sorted(x_values)
}

/// Equally spaced sample grid over `[from, to]`; the bounds are swapped when reversed.
///
/// `from == to` is the only case allowed to repeat an x. Any other interval
/// too narrow to hold `count` distinct values is refused.
pub(crate) fn sample_grid(from: f64, to: f64, count: usize) -> Result<Vec<f64>, TabulatedFunctionError> {
    check_count(count)?;
    if !(from.is_finite() && to.is_finite()) {
        return Err(TabulatedFunctionError::IllegalArgument("sampling bounds must be finite".to_owned()));
    }
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let step = (to - from) / (count - 1) as f64;
    let mut grid: Vec<f64> = (0..count).map(|i| from + step * i as f64).collect();
    grid[count - 1] = to;
    if from != to {
        check_sorted(&grid)?;
    }
    Ok(grid)
}

pub(crate) fn check_insertable_x(x: f64) -> Result<(), TabulatedFunctionError> {
    if x.is_nan() {
        return Err(TabulatedFunctionError::IllegalArgument("x must not be NaN".to_owned()));
    }
    Ok(())
}

pub(crate) fn check_removable(count: usize) -> Result<(), TabulatedFunctionError> {
    if count <= MIN_POINT_COUNT {
        return Err(TabulatedFunctionError::MinimumCountReached { count });
    }
    Ok(())
}
