pub mod error;
pub mod formula;

pub use error::FormulaError;
pub use formula::{Formula, FormulaConfig, Operator, Variables};

use std::collections::HashMap;

/// Evaluates `expression` once against `context`.
pub fn evaluate_expression(
    expression: &str,
    context: &HashMap<String, f64>,
) -> Result<f64, FormulaError> {
    let variables = Variables::try_from(context)?;
    Formula::new(expression).evaluate_with(&variables)
}
