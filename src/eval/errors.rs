use thiserror::Error;

/// Reasons a token sequence fails to evaluate
///
/// These never escape [`evaluate`](crate::eval::evaluate); the public
/// contract folds every failure into the `Incomplete` outcome, since a
/// partial expression is an "awaiting more input" state rather than an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Expression must use all four numbers")]
    WrongNumberCount,
    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,
    #[error("Unexpected token at position {0}")]
    UnexpectedToken(usize),
    #[error("Unclosed parenthesis")]
    UnclosedParenthesis,
    #[error("Division by zero")]
    DivisionByZero,
}
