use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{parse_literal, Token};

/// Evaluates tokens in postfix order using a value stack.
///
/// Exactly one value has to remain once all tokens are consumed, anything
/// else is reported as [`CalculatorError::ResidualStack`].
///
/// # Examples
///
/// ```
/// # fn main() -> calculator::interpreter::error::Result<()> {
/// use calculator::interpreter::evaluator::evaluate;
/// use calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::literal("6"),
///     Token::literal("2"),
///     Token::Operator('/'),
/// ];
/// assert_eq!(evaluate(&postfix_tokens)?, 3.0);
/// # Ok(()) }
/// ```
pub fn evaluate(postfix_tokens: &[Token]) -> Result<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Literal(text) => values.push(parse_literal(text)?),
            Token::Operator(symbol) => {
                let operator = BinaryOperator::try_from(*symbol)?;
                // b is the most recently pushed value, a the one below it.
                let (a, b) = match (values.pop(), values.pop()) {
                    (Some(b), Some(a)) => (a, b),
                    (popped, _) => {
                        return Err(CalculatorError::StackUnderflow {
                            operator: *symbol,
                            available: usize::from(popped.is_some()),
                        })
                    }
                };
                values.push(operator.evaluate(a, b));
            }
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        remaining => Err(CalculatorError::ResidualStack(remaining.len())),
    }
}
