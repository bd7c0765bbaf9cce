use crate::error::FormulaError;
use crate::formula::tokenizer::{Token, Tokenizer};
use crate::formula::{Variables, GROUPING_PRECEDENCE};
use log::debug;

/// State for a single evaluation pass: the tokenizer, the one live token and
/// the number of currently open parentheses.
pub(crate) struct Evaluator<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    depth: usize,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(expression: &'a str, variables: &'a Variables, max_depth: usize) -> Self {
        Self {
            tokenizer: Tokenizer::new(expression, variables),
            current: Token::EndOfInput,
            depth: 0,
            max_depth,
        }
    }

    /// Evaluates the whole expression. Input left over after a complete
    /// expression is rejected.
    pub(crate) fn run(mut self) -> Result<f64, FormulaError> {
        self.advance()?;
        let value = self.parse_at(GROUPING_PRECEDENCE)?;

        match self.current {
            Token::EndOfInput => Ok(value),
            token => Err(FormulaError::SyntaxError(format!(
                "unexpected {} after complete expression at offset {}",
                describe(&token),
                self.tokenizer.position()
            ))),
        }
    }

    fn advance(&mut self) -> Result<(), FormulaError> {
        self.current = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Precedence climbing: consumes a primary operand, then folds in every
    /// operator binding at least as tightly as `min_precedence`.
    ///
    /// The right-hand side is parsed at `precedence + 1`, so operators of equal
    /// precedence group to the left. This holds for `^` as well:
    /// `2^3^2` is `(2^3)^2`.
    fn parse_at(&mut self, min_precedence: u8) -> Result<f64, FormulaError> {
        let mut left = self.parse_primary()?;

        while let Token::Operator(operator) = self.current {
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance()?;
            let right = self.parse_at(precedence + 1)?;
            let result = operator.apply(left, right)?;
            debug!("{left} {} {right} = {result}", operator.symbol());
            left = result;
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<f64, FormulaError> {
        match self.current {
            Token::Number(value) => {
                self.advance()?;
                Ok(value)
            }
            Token::LeftParen => {
                // Only parentheses count towards the limit. Operator recursion
                // is bounded by the number of precedence tiers.
                self.depth += 1;
                if self.depth > self.max_depth {
                    return Err(FormulaError::NestingTooDeep(self.max_depth));
                }
                self.advance()?;
                let value = self.parse_at(GROUPING_PRECEDENCE)?;
                if self.current != Token::RightParen {
                    return Err(FormulaError::UnmatchedParen);
                }
                self.advance()?;
                self.depth -= 1;
                Ok(value)
            }
            token => Err(FormulaError::SyntaxError(format!(
                "expected a number, variable or '(' but found {} at offset {}",
                describe(&token),
                self.tokenizer.position()
            ))),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => format!("number {value}"),
        Token::Operator(operator) => format!("operator '{}'", operator.symbol()),
        Token::LeftParen => "'('".to_string(),
        Token::RightParen => "')'".to_string(),
        Token::EndOfInput => "end of input".to_string(),
    }
}
