use crate::error::FormulaError;
use log::debug;
use rayon::prelude::*;

mod evaluator;
mod tokenizer;
mod variables;

use evaluator::Evaluator;
pub use tokenizer::{Token, Tokenizer};
pub use variables::Variables;

/// Precedence tag of `(` and `)`. Never used for binding, only as the floor
/// for a fresh (sub-)expression.
pub const GROUPING_PRECEDENCE: u8 = 0;

/// Default limit on nested parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A binary operator recognized by the tokenizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// Binding strength: `+ -` bind loosest, `^` tightest. `* / %` share one tier.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 2,
            Operator::Power => 3,
        }
    }

    /// The character this operator is written as.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
            Operator::Power => '^',
        }
    }

    /// Applies the operator to its operands.
    ///
    /// `%` is the floating-point remainder, whose sign follows `left`. `^` is
    /// `powf` and may yield NaN or infinity, which are returned as is.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the result.
    /// * `Err(FormulaError::DivisionByZero)` if `right` is zero for `/` or `%`.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, FormulaError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(FormulaError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Modulo => {
                if right == 0.0 {
                    Err(FormulaError::DivisionByZero)
                } else {
                    Ok(left % right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = FormulaError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '%' => Ok(Operator::Modulo),
            '^' => Ok(Operator::Power),
            _ => Err(FormulaError::UnexpectedCharacter(value)),
        }
    }
}

/// Tunables applied to every evaluation of a [`Formula`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FormulaConfig {
    /// Maximum number of simultaneously open parentheses before evaluation is aborted.
    pub max_depth: usize,
}

impl FormulaConfig {
    /// Sets the limit on nested parentheses.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// An expression together with the variables it is evaluated against.
///
/// The text is stored as given and only examined when evaluated. Each call to
/// [`Formula::evaluate`] scans the text from the start, so a formula can be
/// evaluated any number of times, with [`Formula::define`] in between.
///
/// ```
/// use formula_rs::Formula;
///
/// let mut formula = Formula::new("30*n - 2*(50+55) + a%3 + 2^3");
/// formula.define("n", 20.0).unwrap();
/// formula.define("a", 10.0).unwrap();
/// assert_eq!(formula.evaluate().unwrap(), 399.0);
/// ```
#[derive(Debug, Clone)]
pub struct Formula {
    expression: String,
    variables: Variables,
    config: FormulaConfig,
}

impl Formula {
    /// Creates a formula with the default configuration and no variables.
    /// The text is not validated until it is evaluated.
    pub fn new(expression: impl Into<String>) -> Self {
        Self::with_config(expression, FormulaConfig::default())
    }

    /// Creates a formula with an explicit configuration.
    pub fn with_config(expression: impl Into<String>, config: FormulaConfig) -> Self {
        Self {
            expression: expression.into(),
            variables: Variables::new(),
            config,
        }
    }

    /// The expression text, exactly as given.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Variables registered through [`Formula::define`].
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Registers or overwrites a variable for subsequent evaluations.
    pub fn define(&mut self, name: impl Into<String>, value: f64) -> Result<(), FormulaError> {
        self.variables.define(name, value)
    }

    /// Evaluates the expression against the formula's own variables.
    pub fn evaluate(&self) -> Result<f64, FormulaError> {
        self.evaluate_with(&self.variables)
    }

    /// Evaluates the expression against a given variable table.
    ///
    /// # Arguments
    ///
    /// * `variables` - The table identifiers are resolved against. The
    ///   formula's own table is ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the evaluation succeeds.
    /// * `Err(FormulaError)` on the first lexical, syntax or arithmetic error.
    pub fn evaluate_with(&self, variables: &Variables) -> Result<f64, FormulaError> {
        debug!("Evaluating expression: {}", self.expression);
        let result = Evaluator::new(&self.expression, variables, self.config.max_depth).run();
        match &result {
            Ok(value) => debug!("Result: {}", value),
            Err(err) => debug!("Evaluation failed: {}", err),
        }
        result
    }

    /// Evaluates the expression once per context, in parallel.
    ///
    /// Results are returned in the same order as `contexts`. A failure in one
    /// context does not affect the others.
    pub fn evaluate_batch(&self, contexts: &[Variables]) -> Vec<Result<f64, FormulaError>> {
        debug!(
            "Evaluating '{}' against {} contexts",
            self.expression,
            contexts.len()
        );
        contexts
            .par_iter()
            .map(|variables| self.evaluate_with(variables))
            .collect()
    }
}
