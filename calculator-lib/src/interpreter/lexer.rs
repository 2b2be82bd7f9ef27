use crate::interpreter::operator::SYMBOLS;
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Splits the given expression into literals and operators, left to right.
///
/// A `-` at the very start of the expression, or directly after another
/// operator character, is a sign and becomes part of the following literal.
/// Any character that is neither part of a number nor an operator
/// (whitespace, letters, parentheses) is skipped without complaint.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::lexer::tokenize;
/// use calculator::interpreter::token::Token;
///
/// let tokens = tokenize("-5+3");
/// assert_eq!(
///     tokens,
///     vec![Token::literal("-5"), Token::Operator('+'), Token::literal("3")]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut characters = expression.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(character) = characters.next() {
        if is_numeric(character) || is_sign(character, previous) {
            let mut literal = character.to_string();
            literal.extend(characters.peeking_take_while(|next| is_numeric(*next)));
            previous = literal.chars().last();
            tokens.push(Token::Literal(literal));
            continue;
        }

        if is_operator(character) {
            tokens.push(Token::Operator(character));
        }
        previous = Some(character);
    }

    tokens
}

fn is_numeric(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn is_operator(character: char) -> bool {
    SYMBOLS.contains(&character)
}

fn is_sign(character: char, previous: Option<char>) -> bool {
    character == '-' && previous.map_or(true, is_operator)
}
