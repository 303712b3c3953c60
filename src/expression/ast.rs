use crate::expression::errors::ExpressionError;

/// One of the four binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order the search enumerates them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Parse an operator token; anything other than `+ - * /` is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }
}

/// A binary expression tree over card operands.
///
/// Equality and hashing are structural: two trees are equal when they have the
/// same shape, the same operators and the same operand tokens in the same
/// positions, however they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A card token such as `A`, `10` or `K`
    Operand(String),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn operand(token: impl Into<String>) -> Self {
        Expression::Operand(token.into())
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// Operand tokens from left to right
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expression::Operand(token) => out.push(token.as_str()),
                Expression::Binary(_, l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        out
    }

    pub fn operator_count(&self) -> usize {
        match self {
            Expression::Operand(_) => 0,
            Expression::Binary(_, l, r) => 1 + l.operator_count() + r.operator_count(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Operand(_))
    }
}

impl Expression {
    /// Build a node from a raw token and optional children.
    ///
    /// An operator token needs both children and any other token needs none.
    /// Operand tokens are not checked against the card ranks here; that
    /// happens on evaluation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExpression` when the children do not fit the token.
    pub fn from_parts(
        value: &str,
        left: Option<Expression>,
        right: Option<Expression>,
    ) -> Result<Self, ExpressionError> {
        match (Operator::from_token(value), left, right) {
            (Some(op), Some(l), Some(r)) => Ok(Expression::binary(op, l, r)),
            (Some(op), _, _) => Err(ExpressionError::InvalidExpression(format!(
                "operator '{}' needs two children",
                op
            ))),
            (None, None, None) => Ok(Expression::operand(value)),
            (None, _, _) => Err(ExpressionError::InvalidExpression(format!(
                "operand '{}' cannot have children",
                value
            ))),
        }
    }
}
