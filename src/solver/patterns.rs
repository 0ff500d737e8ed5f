use crate::solver::ast::Expr;

fn num(value: f64) -> Box<Expr> {
    Box::new(Expr::Num(value))
}

fn bx(expr: Expr) -> Box<Expr> {
    Box::new(expr)
}

/// Common composition shapes, checked against the numbers in their given
/// order: `a×b×c×d`, `a×b×(c+d)`, `(a+b)×(c+d)`, `a×b+c×d`, `(a+b+c)×d`,
/// `a×b×c-d`, plus the two single-division variants `a÷b×c×d` and
/// `a×b÷c×d`.
pub fn pattern_candidates(values: &[f64; 4]) -> Vec<Expr> {
    let [a, b, c, d] = *values;
    vec![
        Expr::Mul(bx(Expr::Mul(bx(Expr::Mul(num(a), num(b))), num(c))), num(d)),
        Expr::Mul(bx(Expr::Mul(num(a), num(b))), bx(Expr::Add(num(c), num(d)))),
        Expr::Mul(bx(Expr::Add(num(a), num(b))), bx(Expr::Add(num(c), num(d)))),
        Expr::Add(bx(Expr::Mul(num(a), num(b))), bx(Expr::Mul(num(c), num(d)))),
        Expr::Mul(bx(Expr::Add(bx(Expr::Add(num(a), num(b))), num(c))), num(d)),
        Expr::Sub(bx(Expr::Mul(bx(Expr::Mul(num(a), num(b))), num(c))), num(d)),
        Expr::Mul(bx(Expr::Mul(bx(Expr::Div(num(a), num(b))), num(c))), num(d)),
        Expr::Mul(bx(Expr::Div(bx(Expr::Mul(num(a), num(b))), num(c))), num(d)),
    ]
}
