use std::env;

use tracing::error;
use tracing_subscriber::EnvFilter;

use tabfn::configuration::Configuration;
use tabfn::math::function::mathfunction::MathFunction;
use tabfn::math::function::sqrfunction::SqrFunction;
use tabfn::math::operation::tabulateddifferentialoperator::TabulatedDifferentialOperator;
use tabfn::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfn::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfn::math::tabulated::tabulatedfunctionfactory::ArrayTabulatedFunctionFactory;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match env::args().nth(1) {
        Some(config_path) => match Configuration::from_path(&config_path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %config_path, "{}", err);
                return;
            }
        },
        None => Configuration::new()
    };

    let sqr = SqrFunction::new();
    let array_table = match ArrayTabulatedFunction::from_function(&sqr, 0.0, 4.0, 5) {
        Ok(table) => table,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };
    let linked_table = match LinkedListTabulatedFunction::from_function(&sqr, 0.0, 4.0, 5) {
        Ok(table) => table,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };
    print!("{}", array_table);
    print!("{}", linked_table);
    println!("f(2.5) = {}, {}", array_table.apply(2.5), linked_table.apply(2.5));

    let differential_operator = TabulatedDifferentialOperator::new(ArrayTabulatedFunctionFactory);
    match differential_operator.derive(&array_table) {
        Ok(derivative) => print!("{}", derivative),
        Err(err) => error!("{}", err)
    }

    let newton = config.newton_method(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
    match newton.map(|solver| solver.solve(1.0)) {
        Ok(Ok(outcome)) => println!(
            "newton: {} ({} iterations, converged = {})",
            outcome.value(),
            outcome.iterations(),
            outcome.converged()
        ),
        Ok(Err(err)) => error!("{}", err),
        Err(err) => error!("{}", err)
    }

    match config.simple_iteration_method(|x: f64| (x + 2.0 / x) / 2.0) {
        Ok(solver) => {
            let outcome = solver.solve();
            println!(
                "simple iteration: {} ({} iterations, converged = {})",
                outcome.value(),
                outcome.iterations(),
                outcome.converged()
            );
        }
        Err(err) => error!("{}", err)
    }
}
