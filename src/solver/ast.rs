use std::fmt;

use crate::solver::errors::ArithmeticError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// Candidate solution expressions assembled by the solver
///
/// This tree exists only to verify and render example solutions; user
/// input never flows through it.
#[derive(Debug, Clone)]
pub enum Expr {
    Num(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// # Errors
    ///
    /// Returns an error when the expression divides by zero.
    pub fn evaluate(&self) -> Result<f64, ArithmeticError> {
        match self {
            Expr::Num(n) => Ok(*n),
            Expr::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expr::Sub(l, r) => Ok(l.evaluate()? - r.evaluate()?),
            Expr::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expr::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expr) -> u8 {
            match expr {
                Expr::Add(_, _) | Expr::Sub(_, _) => 1,
                Expr::Mul(_, _) | Expr::Div(_, _) => 2,
                Expr::Num(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expr,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expr(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expr(f, expr)
            }
        }

        fn fmt_expr(f: &mut fmt::Formatter, expr: &Expr) -> fmt::Result {
            match expr {
                Expr::Num(n) => write!(f, "{}", n),
                Expr::Add(l, r) => {
                    write_with_parens(f, l, precedence(l) < 1)?;
                    write!(f, " + ")?;
                    write_with_parens(f, r, precedence(r) < 1)
                }
                Expr::Sub(l, r) => {
                    write_with_parens(f, l, precedence(l) < 1)?;
                    write!(f, " - ")?;
                    write_with_parens(f, r, precedence(r) <= 1)
                }
                Expr::Mul(l, r) => {
                    write_with_parens(f, l, precedence(l) < 2)?;
                    write!(f, " × ")?;
                    write_with_parens(f, r, precedence(r) < 2)
                }
                Expr::Div(l, r) => {
                    write_with_parens(f, l, precedence(l) < 2)?;
                    write!(f, " ÷ ")?;
                    write_with_parens(f, r, precedence(r) <= 2)
                }
            }
        }

        fmt_expr(f, self)
    }
}
