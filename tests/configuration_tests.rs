//! Tests for loading solver settings from JSON.

use approx::assert_abs_diff_eq;

use tabfn::configuration::{
    Configuration,
    ConfigurationError,
    DEFAULT_INITIAL_GUESS,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE
};

/// An empty object yields the defaults for both solvers.
#[test]
fn test_defaults() {
    let config = Configuration::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(config, Configuration::new());
    assert_eq!(config.newton().tolerance(), DEFAULT_TOLERANCE);
    assert_eq!(config.newton().max_iterations(), DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.simple_iteration().initial_guess(), DEFAULT_INITIAL_GUESS);
}

/// Partial sections override only the fields they name.
#[test]
fn test_partial_override() {
    let json = r#"{
        "newton": { "tolerance": 1e-9 },
        "simple_iteration": { "initial_guess": 3.0, "max_iterations": 20 }
    }"#;
    let config = Configuration::from_reader(json.as_bytes()).unwrap();

    assert_eq!(config.newton().tolerance(), 1e-9);
    assert_eq!(config.newton().max_iterations(), DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.simple_iteration().initial_guess(), 3.0);
    assert_eq!(config.simple_iteration().max_iterations(), 20);
    assert_eq!(config.simple_iteration().tolerance(), DEFAULT_TOLERANCE);
}

/// Solvers built from a configuration carry its settings.
#[test]
fn test_build_solvers() {
    let json = r#"{ "simple_iteration": { "initial_guess": 2.0 } }"#;
    let config = Configuration::from_reader(json.as_bytes()).unwrap();

    let newton = config.newton_method(|x: f64| x * x - 9.0, |x: f64| 2.0 * x).unwrap();
    assert_abs_diff_eq!(newton.solve(1.0).unwrap().value(), 3.0, epsilon = 1e-6);

    let simple = config.simple_iteration_method(|x: f64| (x + 3.0 / x) / 2.0).unwrap();
    assert_eq!(simple.initial_guess(), 2.0);
    assert_abs_diff_eq!(simple.solve().value(), 3.0_f64.sqrt(), epsilon = 1e-6);
}

/// Invalid values surface when a solver is built; bad JSON when reading.
#[test]
fn test_errors() {
    let json = r#"{ "newton": { "tolerance": -1.0 } }"#;
    let config = Configuration::from_reader(json.as_bytes()).unwrap();
    assert!(matches!(
        config.newton_method(|x: f64| x, |_x: f64| 1.0),
        Err(ConfigurationError::Solver(_))
    ));

    assert!(matches!(
        Configuration::from_reader("{ not json".as_bytes()),
        Err(ConfigurationError::Json(_))
    ));
    assert!(matches!(
        Configuration::from_path("/nonexistent/solver-config.json"),
        Err(ConfigurationError::Io(_))
    ));
}
