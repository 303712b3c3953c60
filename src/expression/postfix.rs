use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;
use crate::utils::is_card;

/// Split a compact postfix string into tokens.
///
/// Whitespace is skipped, `10` is read as one token and every other
/// character is a token of its own, so `"K32+*5/"` and `"K 3 2 + * 5 /"`
/// tokenize the same way.
pub fn tokenize_postfix(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '1' && chars.peek() == Some(&'0') {
            chars.next();
            tokens.push(String::from("10"));
        } else {
            tokens.push(c.to_string());
        }
    }

    tokens
}

/// Build a tree from postfix tokens with a stack.
///
/// For each operator the first node popped becomes its right operand and
/// the second its left operand.
///
/// # Errors
///
/// Returns `InvalidOperand` for a leaf token that is not a card rank, and
/// `InvalidExpression` when an operator finds fewer than two nodes on the
/// stack or when anything other than exactly one node remains at the end.
pub fn build_from_postfix<I, S>(tokens: I) -> Result<Expression, ExpressionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack: Vec<Expression> = Vec::new();

    for (position, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref();

        if let Some(op) = Operator::from_token(token) {
            let underflow = || {
                ExpressionError::InvalidExpression(format!(
                    "operator '{}' at position {} is missing an operand",
                    op, position
                ))
            };
            let right = stack.pop().ok_or_else(underflow)?;
            let left = stack.pop().ok_or_else(underflow)?;
            stack.push(Expression::binary(op, left, right));
        } else if is_card(token) {
            stack.push(Expression::operand(token));
        } else {
            return Err(ExpressionError::InvalidOperand(token.to_string()));
        }
    }

    let root = stack.pop().ok_or_else(|| {
        ExpressionError::InvalidExpression(String::from("empty postfix expression"))
    })?;

    if !stack.is_empty() {
        return Err(ExpressionError::InvalidExpression(format!(
            "{} operands left without an operator",
            stack.len()
        )));
    }

    debug!("Built expression {} from postfix", root);
    Ok(root)
}

impl Expression {
    /// # Errors
    ///
    /// See [`build_from_postfix`].
    pub fn from_postfix<I, S>(tokens: I) -> Result<Self, ExpressionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_from_postfix(tokens)
    }

    /// Parse a compact postfix string such as `"K32+*5/"`.
    ///
    /// # Errors
    ///
    /// See [`build_from_postfix`].
    pub fn parse_postfix(input: &str) -> Result<Self, ExpressionError> {
        build_from_postfix(tokenize_postfix(input))
    }
}
