use formula_rs::{Formula, Variables};

fn main() {
    pretty_env_logger::init();

    let contexts: Vec<Variables> = [(120.0, 3000.0), (80.0, 6000.0), (95.5, 0.0)]
        .iter()
        .map(|&(price, volume)| {
            let mut variables = Variables::new();
            variables.define("price", price).unwrap();
            variables.define("volume", volume).unwrap();
            variables
        })
        .collect();

    let formula = Formula::new("price * 1000 / volume");
    for (i, result) in formula.evaluate_batch(&contexts).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
