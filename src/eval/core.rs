use log::debug;

use crate::eval::errors::EvalError;
use crate::expression::{Op, Token};

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// Outcome of evaluating a token sequence
///
/// `Incomplete` is not an error: it means the expression is still being
/// built (fewer than four numbers, unbalanced parentheses) or cannot
/// currently produce a finite value (division by zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value(f64),
    Incomplete,
}

impl Evaluation {
    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Value(v) => Some(*v),
            Evaluation::Incomplete => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Evaluation::Incomplete)
    }
}

/// Evaluate a token sequence under standard operator precedence
///
/// `×` and `÷` bind tighter than `+` and `-`; parentheses override.
/// Operators are always binary; unary minus is not part of the grammar.
/// The function is total: any malformed or partial sequence yields
/// [`Evaluation::Incomplete`], never a panic. The expression must use all
/// four numbers to produce a value, matching the game rule.
pub fn evaluate(tokens: &[Token]) -> Evaluation {
    match try_evaluate(tokens) {
        Ok(value) => {
            debug!("Token sequence evaluated to {}", value);
            Evaluation::Value(value)
        }
        Err(e) => {
            debug!("Token sequence incomplete: {}", e);
            Evaluation::Incomplete
        }
    }
}

fn try_evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    let numbers = tokens.iter().filter(|t| t.is_number()).count();
    if numbers != 4 {
        return Err(EvalError::WrongNumberCount);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(EvalError::UnexpectedToken(parser.pos));
    }
    if !value.is_finite() {
        return Err(EvalError::DivisionByZero);
    }
    Ok(value)
}

/// Recursive-descent parser over the typed token slice
///
/// Grammar: expr := term (('+'|'-') term)*
///          term := atom (('×'|'÷') atom)*
///          atom := number | '(' expr ')'
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut left = self.term()?;
        while let Some(op) = self.peek_binary() {
            match op {
                Op::Add => {
                    self.pos += 1;
                    left += self.term()?;
                }
                Op::Sub => {
                    self.pos += 1;
                    left -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut left = self.atom()?;
        while let Some(op) = self.peek_binary() {
            match op {
                Op::Mul => {
                    self.pos += 1;
                    left *= self.atom()?;
                }
                Op::Div => {
                    self.pos += 1;
                    let right = self.atom()?;
                    if is_zero(right) {
                        return Err(EvalError::DivisionByZero);
                    }
                    left /= right;
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn atom(&mut self) -> Result<f64, EvalError> {
        match self.tokens.get(self.pos) {
            Some(Token::Number { value, .. }) => {
                self.pos += 1;
                Ok(f64::from(*value))
            }
            Some(Token::Operator(Op::Open)) => {
                self.pos += 1;
                let inner = self.expr()?;
                match self.tokens.get(self.pos) {
                    Some(Token::Operator(Op::Close)) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    _ => Err(EvalError::UnclosedParenthesis),
                }
            }
            Some(_) => Err(EvalError::UnexpectedToken(self.pos)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn peek_binary(&self) -> Option<Op> {
        match self.tokens.get(self.pos) {
            Some(Token::Operator(op)) if op.is_binary() => Some(*op),
            _ => None,
        }
    }
}

/// Render an evaluated value for display
///
/// Values within 1e-9 of an integer render without decimals; everything
/// else with two decimal digits.
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}
