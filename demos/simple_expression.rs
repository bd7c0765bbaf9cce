use formula_rs::Formula;
use log::debug;

fn main() {
    pretty_env_logger::init();

    let mut formula = Formula::new("(price + 10) * (volume - 5) ^ 2");
    formula.define("price", 20.0).unwrap();
    formula.define("volume", 8.0).unwrap();
    debug!("variables: {:?}", formula.variables());

    match formula.evaluate() {
        Ok(result) => println!("{} = {}", formula.expression(), result),
        Err(err) => println!("Error: {}", err),
    }

    for expression in ["2^3^2", "10 % 3", "1 / 0", "(1 + 2", "1.2.3"] {
        match Formula::new(expression).evaluate() {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{} -> {}", expression, err),
        }
    }
}
