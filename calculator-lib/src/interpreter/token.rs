use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal, kept as typed (including a leading sign).
    /// It is only parsed when evaluated, so `1.2.3` survives until then.
    Literal(String),
    Operator(char),
}

impl Token {
    pub fn literal(text: impl Into<String>) -> Token {
        Token::Literal(text.into())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

/// Parses the text of a literal token into its numeric value.
pub fn parse_literal(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| CalculatorError::MalformedNumber(text.to_string()))
}

impl From<BinaryOperator> for Token {
    fn from(operator: BinaryOperator) -> Self {
        operator.token()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Operator(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
