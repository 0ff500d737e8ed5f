use std::fmt;

use crate::expression::builder::ExpressionBuilder;
use crate::expression::token::{Op, Token};

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number { value, .. } => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for ExpressionBuilder {
    /// Renders the expression the way a card UI shows it: spaces around
    /// binary operators, parentheses hugging their contents.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut previous: Option<&Token> = None;
        for token in self.tokens() {
            let space = match (previous, token) {
                (None, _) => false,
                (_, Token::Operator(Op::Close)) => false,
                (Some(Token::Operator(Op::Open)), _) => false,
                (Some(Token::Operator(op)), _) if op.is_binary() => true,
                (_, Token::Operator(op)) if op.is_binary() => true,
                _ => false,
            };
            if space {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            previous = Some(token);
        }
        Ok(())
    }
}
