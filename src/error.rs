use thiserror::Error;

/// Everything that can go wrong while defining variables or evaluating a formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Unexpected character: '{0}'")]
    UnexpectedCharacter(char),
    #[error("Syntax error: {0}")]
    SyntaxError(String),
    #[error("Expected ')'")]
    UnmatchedParen,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Malformed number: {0}")]
    FormatError(String),
    #[error("Parentheses nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Variable '{name}' must be finite, got {value}")]
    NonFiniteValue { name: String, value: f64 },
}
