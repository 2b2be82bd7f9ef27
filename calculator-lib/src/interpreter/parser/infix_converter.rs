use crate::interpreter::error::Result;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;

/// Shunting-yard conversion without parentheses. Operators of equal
/// precedence are popped before pushing, which makes them left-associative.
pub(super) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<BinaryOperator> = vec![];
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Literal(_) => output.push(token),
            Token::Operator(symbol) => {
                let operator = BinaryOperator::try_from(symbol)?;
                parse_operator_token(&mut operators, &mut output, operator);
            }
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    Ok(output)
}

fn parse_operator_token(
    operators: &mut Vec<BinaryOperator>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(top_of_operator_stack) = operators.last().copied() {
        if !top_of_operator_stack.precedence_ge(&operator) {
            break;
        }
        operators.pop();
        output.push(top_of_operator_stack.token());
    }

    operators.push(operator);
}

fn transfer_leftover_operators(operators: &mut Vec<BinaryOperator>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop() {
        output.push(operator.token());
    }
}
