//! Tests for conversion, pointwise operations, differentiation and the
//! read-only view.
//!
//! ## Test Organization
//!
//! 1. **Conversion** - `as_points`
//! 2. **Operation Service** - add/subtract/multiply/divide and grid checks
//! 3. **Differential Operator** - Finite differences on a table
//! 4. **Unmodifiable View** - Forwarded queries, refused mutations
//! 5. **Factories** - Backing chosen by factory

use approx::assert_relative_eq;

use tabfn::math::function::mathfunction::MathFunction;
use tabfn::math::function::sqrfunction::SqrFunction;
use tabfn::math::operation::tabulateddifferentialoperator::TabulatedDifferentialOperator;
use tabfn::math::operation::tabulatedfunctionoperationservice::{
    TabulatedFunctionOperationService,
    as_points
};
use tabfn::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfn::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfn::math::tabulated::point::Point;
use tabfn::math::tabulated::tabulatederror::TabulatedFunctionError;
use tabfn::math::tabulated::tabulatedfunction::TabulatedFunction;
use tabfn::math::tabulated::tabulatedfunctionfactory::{
    ArrayTabulatedFunctionFactory,
    LinkedListTabulatedFunctionFactory,
    TabulatedFunctionFactory
};
use tabfn::math::tabulated::unmodifiabletabulatedfunction::UnmodifiableTabulatedFunction;

// ============================================================================
// Conversion Tests
// ============================================================================

/// One point per knot, in index order, for either backing.
#[test]
fn test_as_points() {
    let xs = [1.0, 2.0, 3.0];
    let ys = [-1.0, 0.0, 1.0];
    let expected = vec![Point::new(1.0, -1.0), Point::new(2.0, 0.0), Point::new(3.0, 1.0)];

    let a = ArrayTabulatedFunction::new(&xs, &ys).unwrap();
    let l = LinkedListTabulatedFunction::new(&xs, &ys).unwrap();
    assert_eq!(as_points(&a), expected);
    assert_eq!(as_points(&l), expected);

    let as_dyn: &dyn TabulatedFunction = &l;
    assert_eq!(as_points(as_dyn), expected);
}

/// A point snapshot survives a JSON round trip and rebuilds the same table.
#[test]
fn test_points_json_round_trip() {
    let table = LinkedListTabulatedFunction::new(&[0.5, 1.0, 4.0], &[-2.0, 0.25, 8.0]).unwrap();

    let json = serde_json::to_string(&as_points(&table)).unwrap();
    assert_eq!(json, r#"[{"x":0.5,"y":-2.0},{"x":1.0,"y":0.25},{"x":4.0,"y":8.0}]"#);

    let restored: Vec<Point> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, as_points(&table));

    let xs: Vec<f64> = restored.iter().map(|pt| pt.x()).collect();
    let ys: Vec<f64> = restored.iter().map(|pt| pt.y()).collect();
    let rebuilt = ArrayTabulatedFunction::new(&xs, &ys).unwrap();
    assert_eq!(rebuilt.apply(2.5), table.apply(2.5));
}

// ============================================================================
// Operation Service Tests
// ============================================================================

/// Pointwise arithmetic across mixed backings.
#[test]
fn test_pointwise_operations() {
    let xs = [0.0, 1.0, 2.0];
    let lhs = ArrayTabulatedFunction::new(&xs, &[2.0, 4.0, 6.0]).unwrap();
    let rhs = LinkedListTabulatedFunction::new(&xs, &[1.0, 2.0, 3.0]).unwrap();
    let service = TabulatedFunctionOperationService::new(ArrayTabulatedFunctionFactory);

    let sum = service.add(&lhs, &rhs).unwrap();
    let difference = service.subtract(&lhs, &rhs).unwrap();
    let product = service.multiply(&lhs, &rhs).unwrap();
    let quotient = service.divide(&lhs, &rhs).unwrap();

    for i in 0..xs.len() {
        assert_eq!(sum.get_x(i).unwrap(), xs[i]);
        assert_relative_eq!(sum.get_y(i).unwrap(), 3.0 * (i as f64 + 1.0), epsilon = 1e-12);
        assert_relative_eq!(difference.get_y(i).unwrap(), i as f64 + 1.0, epsilon = 1e-12);
        assert_relative_eq!(product.get_y(i).unwrap(), 2.0 * (i as f64 + 1.0).powi(2), epsilon = 1e-12);
        assert_relative_eq!(quotient.get_y(i).unwrap(), 2.0, epsilon = 1e-12);
    }
}

/// The factory decides the backing of the result.
#[test]
fn test_service_uses_its_factory() {
    let xs = [0.0, 1.0];
    let lhs = ArrayTabulatedFunction::new(&xs, &[1.0, 1.0]).unwrap();
    let rhs = ArrayTabulatedFunction::new(&xs, &[2.0, 2.0]).unwrap();
    let service = TabulatedFunctionOperationService::new(LinkedListTabulatedFunctionFactory);

    let sum: LinkedListTabulatedFunction = service.add(&lhs, &rhs).unwrap();
    assert!(sum.to_string().starts_with("LinkedListTabulatedFunction size = 2\n"));
}

/// Different counts or different x grids are inconsistent.
#[test]
fn test_inconsistent_functions() {
    let service = TabulatedFunctionOperationService::new(ArrayTabulatedFunctionFactory);
    let base = ArrayTabulatedFunction::new(&[0.0, 1.0, 2.0], &[0.0; 3]).unwrap();
    let shorter = ArrayTabulatedFunction::new(&[0.0, 1.0], &[0.0; 2]).unwrap();
    let shifted = LinkedListTabulatedFunction::new(&[0.0, 1.5, 2.0], &[0.0; 3]).unwrap();

    assert!(matches!(
        service.add(&base, &shorter),
        Err(TabulatedFunctionError::InconsistentFunctions(_))
    ));
    assert!(matches!(
        service.multiply(&base, &shifted),
        Err(TabulatedFunctionError::InconsistentFunctions(_))
    ));
}

// ============================================================================
// Differential Operator Tests
// ============================================================================

/// Forward differences, with the last knot reusing the final slope.
#[test]
fn test_derive_finite_differences() {
    let table = ArrayTabulatedFunction::new(&[0.0, 1.0, 3.0, 4.0], &[0.0, 1.0, 9.0, 16.0]).unwrap();
    let operator = TabulatedDifferentialOperator::new(LinkedListTabulatedFunctionFactory);
    let derivative = operator.derive(&table).unwrap();

    assert_eq!(derivative.count(), 4);
    let expected = [1.0, 4.0, 7.0, 7.0];
    for (i, &slope) in expected.iter().enumerate() {
        assert_eq!(derivative.get_x(i).unwrap(), table.get_x(i).unwrap());
        assert_relative_eq!(derivative.get_y(i).unwrap(), slope, epsilon = 1e-12);
    }
}

/// The derivative of a finely sampled square approaches 2x.
#[test]
fn test_derive_sampled_square() {
    let table = LinkedListTabulatedFunction::from_function(&SqrFunction::new(), 0.0, 1.0, 101).unwrap();
    let operator = TabulatedDifferentialOperator::new(ArrayTabulatedFunctionFactory);
    let derivative = operator.derive(&table).unwrap();

    assert_relative_eq!(derivative.apply(0.5), 1.0, epsilon = 0.02);
}

// ============================================================================
// Unmodifiable View Tests
// ============================================================================

/// Queries pass through; every mutation is refused.
#[test]
fn test_unmodifiable_view() {
    let table = ArrayTabulatedFunction::new(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
    let mut view = UnmodifiableTabulatedFunction::new(table);

    assert_eq!(view.count(), 3);
    assert_relative_eq!(view.apply(2.5), 25.0, epsilon = 1e-12);
    assert_eq!(view.index_of_x(2.0), Some(1));

    assert_eq!(
        view.set_y(0, 0.0).unwrap_err(),
        TabulatedFunctionError::UnsupportedOperation("set_y")
    );
    assert_eq!(
        view.insert(4.0, 40.0).unwrap_err(),
        TabulatedFunctionError::UnsupportedOperation("insert")
    );
    assert_eq!(
        view.remove(0).unwrap_err(),
        TabulatedFunctionError::UnsupportedOperation("remove")
    );
    assert_eq!(view.inner().get_y(0).unwrap(), 10.0);
    assert!(view.to_string().starts_with("UnmodifiableTabulatedFunction size = 3\n"));
}

// ============================================================================
// Factory Tests
// ============================================================================

/// Both factories build equivalent tables from the same source.
#[test]
fn test_factories_agree() {
    let source = |x: f64| x.sin();
    let a = ArrayTabulatedFunctionFactory.create_from_function(&source, 0.0, 3.0, 13).unwrap();
    let l = LinkedListTabulatedFunctionFactory.create_from_function(&source, 0.0, 3.0, 13).unwrap();

    assert_eq!(as_points(&a), as_points(&l));
    assert_eq!(a.apply(1.1), l.apply(1.1));

    assert!(ArrayTabulatedFunctionFactory.create(&[2.0, 1.0], &[0.0, 0.0]).is_err());
}
