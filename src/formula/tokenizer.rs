use crate::error::FormulaError;
use crate::formula::{Operator, Variables};
use log::trace;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
    EndOfInput,
}

/// Lazily scans an expression one token at a time.
///
/// Identifiers are resolved against the variable table as soon as they are
/// read, so the evaluator only ever sees numbers, operators and parentheses.
pub struct Tokenizer<'a> {
    expression: &'a str,
    pos: usize,
    variables: &'a Variables,
}

impl<'a> Tokenizer<'a> {
    pub fn new(expression: &'a str, variables: &'a Variables) -> Self {
        Self {
            expression,
            pos: 0,
            variables,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consumes the next lexeme and returns its token.
    ///
    /// Once the end of the text is reached every further call yields
    /// `Token::EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, FormulaError> {
        let rest = &self.expression[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();

        let Some(ch) = trimmed.chars().next() else {
            trace!("token at {}: end of input", self.pos);
            return Ok(Token::EndOfInput);
        };

        let start = self.pos;
        let token = if ch.is_ascii_digit() {
            let lexeme = self.take_while(|c| c.is_ascii_digit() || c == '.');
            Token::Number(parse_number(lexeme)?)
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
            let value = self
                .variables
                .get(name)
                .ok_or_else(|| FormulaError::UndefinedVariable(name.to_string()))?;
            Token::Number(value)
        } else {
            let token = match ch {
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                _ => Token::Operator(Operator::try_from(ch)?),
            };
            self.pos += ch.len_utf8();
            token
        };

        trace!("token at {}: {:?}", start, token);
        Ok(token)
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let rest: &'a str = &self.expression[self.pos..];
        let len = rest.find(|c: char| !accept(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

/// Parses a scanned number lexeme, which must be `digits` or `digits.digits`.
fn parse_number(lexeme: &str) -> Result<f64, FormulaError> {
    let malformed = || FormulaError::FormatError(lexeme.to_string());
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let well_formed = match lexeme.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(lexeme),
    };
    if !well_formed {
        return Err(malformed());
    }

    let value: f64 = lexeme.parse().map_err(|_| malformed())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(malformed())
    }
}
