use thiserror::Error;

/// Structural rejections raised while building an expression
///
/// Each rejection leaves the expression unchanged; a host surfaces the
/// message as warning-severity feedback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Card {0} is already in the expression")]
    CardInUse(usize),
    #[error("Card index {0} is out of range")]
    BadCardIndex(usize),
    #[error("An operator cannot start the expression")]
    LeadingOperator,
    #[error("An operator cannot follow another operator")]
    OperatorAfterOperator,
    #[error("No opening parenthesis to close")]
    UnmatchedClose,
    #[error("A closing parenthesis cannot follow an operator")]
    CloseAfterOperator,
}
