pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod logger;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::logger::{FacadeLogger, Logger};
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::error::Error;

pub use crate::interpreter::operator::BinaryOperator;

/// What [`calculate`] returns for any expression that fails to evaluate.
pub const ERROR_OUTPUT: &str = "Error";

/// What [`calculate`] returns for blank input.
pub const BLANK_OUTPUT: &str = "0";

const TAG: &str = "calculate";

/// Evaluates arithmetic expressions, reporting diagnostics to a [`Logger`].
///
/// Holds no state besides the logger, so a single instance can be reused
/// for any number of expressions, including after a failed one.
#[derive(Debug, Clone, Default)]
pub struct Calculator<L: Logger = FacadeLogger> {
    logger: L,
}

impl Calculator<FacadeLogger> {
    pub fn new() -> Self {
        Calculator {
            logger: FacadeLogger,
        }
    }
}

impl<L: Logger> Calculator<L> {
    pub fn with_logger(logger: L) -> Self {
        Calculator { logger }
    }

    /// Calculates the value of the given expression, as text.
    ///
    /// # Arguments
    ///
    /// * `expression`: An infix expression of numbers and `+ - * /`.
    ///
    /// returns: The formatted result, `"0"` for blank input,
    /// or `"Error"` if the expression could not be evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use calculator::interpreter::Calculator;
    /// use calculator::interpreter::logger::NullLogger;
    ///
    /// let calculator = Calculator::with_logger(NullLogger);
    /// assert_eq!(calculator.calculate("10-2*3"), "4");
    /// assert_eq!(calculator.calculate("3+*2"), "Error");
    /// ```
    pub fn calculate(&self, expression: &str) -> String {
        if expression.trim().is_empty() {
            return BLANK_OUTPUT.to_string();
        }

        match self.evaluate(expression) {
            Ok(result) => result.to_string(),
            Err(error) => {
                self.logger.error(
                    TAG,
                    &format!("could not evaluate '{}'", expression),
                    Some(&error as &dyn Error),
                );
                ERROR_OUTPUT.to_string()
            }
        }
    }

    /// Runs the whole pipeline on the given expression, keeping the cause
    /// of any failure.
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let infix_tokens = lexer::tokenize(expression);
        self.logger
            .debug(TAG, &format!("tokens: {}", tokens_to_string(&infix_tokens)));

        let postfix_tokens = parser::to_postfix(infix_tokens)?;
        self.logger
            .debug(TAG, &format!("postfix: {}", tokens_to_string(&postfix_tokens)));

        evaluator::evaluate(&postfix_tokens)
    }
}

/// Calculates the value of the given expression with a default [`Calculator`].
///
/// # Examples
///
/// ```
/// use calculator::interpreter::calculate;
///
/// assert_eq!(calculate("6/2-1"), "2");
/// assert_eq!(calculate("   "), "0");
/// ```
pub fn calculate(expression: &str) -> String {
    Calculator::new().calculate(expression)
}

/// Evaluates the given expression, returning the numeric result or the
/// reason it could not be evaluated.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::evaluate_expression;
/// use calculator::interpreter::error::CalculatorError;
///
/// assert_eq!(evaluate_expression("-5+3"), Ok(-2.0));
/// assert_eq!(
///     evaluate_expression("1.2.3+1"),
///     Err(CalculatorError::MalformedNumber("1.2.3".into()))
/// );
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64> {
    Calculator::new().evaluate(expression)
}

/// Converts the given infix expression into its postfix form, as text.
///
/// # Examples
///
/// ```
/// # fn main() -> calculator::interpreter::error::Result<()> {
/// use calculator::interpreter::to_postfix_string;
///
/// assert_eq!(to_postfix_string("2+3*4")?, "2 3 4 * +");
/// # Ok(()) }
/// ```
pub fn to_postfix_string(expression: &str) -> Result<String> {
    let postfix_tokens = parser::to_postfix(lexer::tokenize(expression))?;
    Ok(tokens_to_string(&postfix_tokens))
}

/// Prints the given tokens separated by single spaces.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
