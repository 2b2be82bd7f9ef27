use thiserror::Error;

/// Everything that can go wrong while evaluating an expression.
///
/// All variants collapse into the same `"Error"` output at the
/// [`calculate`](crate::interpreter::calculate) boundary, but stay distinct
/// here so that callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A numeric literal could not be parsed, e.g. `1.2.3`.
    #[error("malformed number '{0}'")]
    MalformedNumber(String),
    /// An operator was evaluated with fewer than two operands on the stack.
    #[error("operator '{operator}' needs two operands but only {available} available")]
    StackUnderflow { operator: char, available: usize },
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
    /// Evaluation finished with something other than exactly one value.
    #[error("expected exactly one value after evaluation, found {0}")]
    ResidualStack(usize),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_their_cause() {
        let error = CalculatorError::StackUnderflow {
            operator: '+',
            available: 1,
        };
        assert_eq!(
            error.to_string(),
            "operator '+' needs two operands but only 1 available"
        );
        assert_eq!(
            CalculatorError::MalformedNumber("1.2.3".into()).to_string(),
            "malformed number '1.2.3'"
        );
    }
}
