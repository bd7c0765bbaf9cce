use formula_rs::{Formula, FormulaError};
use log::error;

fn run() -> Result<f64, FormulaError> {
    let mut formula = Formula::new("30*n - 2*(50+55) + a%3 + 2^3");
    formula.define("n", 20.0)?;
    formula.define("a", 10.0)?;
    formula.evaluate()
}

fn main() {
    pretty_env_logger::init();

    match run() {
        Ok(result) => println!("Result: {}", result),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
