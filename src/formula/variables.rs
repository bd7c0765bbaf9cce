use crate::error::FormulaError;
use std::collections::HashMap;

/// Flat name-to-value table consulted by the tokenizer when it reads an identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`. Names are case-sensitive.
    ///
    /// Only finite values are accepted, so every number the tokenizer hands
    /// to the evaluator is finite.
    pub fn define(&mut self, name: impl Into<String>, value: f64) -> Result<(), FormulaError> {
        let name = name.into();
        if !value.is_finite() {
            return Err(FormulaError::NonFiniteValue { name, value });
        }
        self.values.insert(name, value);
        Ok(())
    }

    /// Builds a table from `(name, value)` pairs. Later pairs overwrite
    /// earlier ones with the same name; the first non-finite value aborts.
    pub fn try_from_iter<I, S>(pairs: I) -> Result<Self, FormulaError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut variables = Variables::new();
        for (name, value) in pairs {
            variables.define(name, value)?;
        }
        Ok(variables)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<HashMap<String, f64>> for Variables {
    type Error = FormulaError;

    fn try_from(values: HashMap<String, f64>) -> Result<Self, Self::Error> {
        Variables::try_from_iter(values)
    }
}

impl TryFrom<&HashMap<String, f64>> for Variables {
    type Error = FormulaError;

    fn try_from(values: &HashMap<String, f64>) -> Result<Self, Self::Error> {
        Variables::try_from_iter(values.iter().map(|(name, value)| (name.as_str(), *value)))
    }
}
