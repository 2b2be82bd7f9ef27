mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix (reverse polish) order,
/// which can be evaluated with a single value stack.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to reorder, in infix format.
///
/// returns: The same tokens, in postfix format.
///
/// # Examples
///
/// ```
/// # fn main() -> calculator::interpreter::error::Result<()> {
/// use calculator::interpreter::parser::to_postfix;
/// use calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::literal("2"),
///     Token::Operator('+'),
///     Token::literal("3"),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens.last(), Some(&Token::Operator('+')));
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    infix_to_postfix(infix_tokens)
}
