use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::function::mathfunction::MathFunction;
use crate::math::solver::newtonmethodfunction::NewtonMethodFunction;
use crate::math::solver::simpleiterationfunction::SimpleIterationFunction;
use crate::math::solver::solvererror::SolverError;

pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_INITIAL_GUESS: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid solver settings: {0}")]
    Solver(#[from] SolverError),
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_initial_guess() -> f64 {
    DEFAULT_INITIAL_GUESS
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonSettings {
    #[serde(default = "default_tolerance")]
    tolerance: f64,
    #[serde(default = "default_max_iterations")]
    max_iterations: usize
}

impl Default for NewtonSettings {
    fn default() -> Self {
        NewtonSettings { tolerance: DEFAULT_TOLERANCE, max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

impl NewtonSettings {
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleIterationSettings {
    #[serde(default = "default_tolerance")]
    tolerance: f64,
    #[serde(default = "default_max_iterations")]
    max_iterations: usize,
    #[serde(default = "default_initial_guess")]
    initial_guess: f64
}

impl Default for SimpleIterationSettings {
    fn default() -> Self {
        SimpleIterationSettings {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_guess: DEFAULT_INITIAL_GUESS
        }
    }
}

impl SimpleIterationSettings {
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }
}

/// Solver settings, read from JSON such as
///
/// ```json
/// {
///     "newton": { "tolerance": 1e-8, "max_iterations": 50 },
///     "simple_iteration": { "initial_guess": 1.0 }
/// }
/// ```
///
/// Missing sections and fields take their defaults. Values are checked when a
/// solver is built from them, not when the file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    newton: NewtonSettings,
    #[serde(default)]
    simple_iteration: SimpleIterationSettings
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<R>(reader: R) -> Result<Configuration, ConfigurationError> where
        R: Read {
        let configuration: Configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn from_path<P>(file_path: P) -> Result<Configuration, ConfigurationError> where
        P: AsRef<Path> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn newton(&self) -> &NewtonSettings {
        &self.newton
    }

    pub fn simple_iteration(&self) -> &SimpleIterationSettings {
        &self.simple_iteration
    }

    pub fn newton_method<F, D>(&self, function: F, derivative: D) -> Result<NewtonMethodFunction<F, D>, ConfigurationError> where
        F: MathFunction,
        D: MathFunction {
        let solver = NewtonMethodFunction::new(
            function,
            derivative,
            self.newton.tolerance,
            self.newton.max_iterations
        )?;
        Ok(solver)
    }

    pub fn simple_iteration_method<P>(&self, phi: P) -> Result<SimpleIterationFunction<P>, ConfigurationError> where
        P: MathFunction {
        let solver = SimpleIterationFunction::new(
            phi,
            self.simple_iteration.initial_guess,
            self.simple_iteration.max_iterations,
            self.simple_iteration.tolerance
        )?;
        Ok(solver)
    }
}
