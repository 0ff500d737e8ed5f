use crate::solver::ast::Expr;
use crate::solver::core::SolutionFinder;
use crate::solver::errors::ArithmeticError;

fn bx(expr: Expr) -> Box<Expr> {
    Box::new(expr)
}

fn num(value: f64) -> Box<Expr> {
    Box::new(Expr::Num(value))
}

#[test]
fn test_simple_product_is_found_by_pattern_tier() {
    let finder = SolutionFinder::new();
    let solutions = finder.find_solutions([1, 2, 3, 4]);
    assert!(!solutions.is_empty());
    // a×b×c×d is the first pattern checked, in the given order
    assert_eq!(solutions[0].text(), "1 × 2 × 3 × 4");
}

#[test]
fn test_solutions_are_capped_and_unique() {
    let finder = SolutionFinder::new();
    let solutions = finder.find_solutions([1, 2, 3, 4]);
    assert!(solutions.len() <= 5);
    for (i, a) in solutions.iter().enumerate() {
        for b in solutions.iter().skip(i + 1) {
            assert_ne!(a.text(), b.text());
        }
    }
}

#[test]
fn test_unsolvable_set_returns_empty() {
    let finder = SolutionFinder::new();
    assert!(finder.find_solutions([1, 1, 1, 1]).is_empty());
    assert!(!finder.is_solvable([1, 1, 1, 1]));
}

#[test]
fn test_division_heavy_set_is_solvable() {
    // 8 ÷ (3 - 8 ÷ 3) = 24, only reachable through nested division
    let finder = SolutionFinder::new();
    assert!(finder.is_solvable([8, 8, 3, 3]));
    assert!(!finder.find_solutions([8, 8, 3, 3]).is_empty());
}

#[test]
fn test_fractional_intermediate_set_is_solvable() {
    // (5 - 1 ÷ 5) × 5 = 24
    let finder = SolutionFinder::new();
    assert!(finder.is_solvable([5, 5, 5, 1]));
}

#[test]
fn test_order_does_not_matter_for_exhaustive_tier() {
    let finder = SolutionFinder::new();
    // 6 ÷ (1 - 3 ÷ 4) = 24 regardless of the input ordering
    assert!(finder.is_solvable([1, 3, 4, 6]));
    assert!(finder.is_solvable([6, 4, 3, 1]));
    assert!(finder.is_solvable([4, 6, 1, 3]));
}

#[test]
fn test_every_solution_verifies_against_its_set() {
    let finder = SolutionFinder::new();
    for numbers in [[3, 8, 1, 1], [4, 4, 4, 4], [2, 6, 3, 1], [5, 4, 3, 2]] {
        let solutions = finder.find_solutions(numbers);
        assert!(!solutions.is_empty(), "no solution for {:?}", numbers);
        for solution in &solutions {
            assert!(!solution.text().is_empty());
        }
    }
}

#[test]
fn test_expr_evaluates_with_division_guard() {
    let expr = Expr::Div(num(8.0), bx(Expr::Sub(num(3.0), num(3.0))));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ArithmeticError::DivisionByZero);
    }
}

#[test]
fn test_expr_display_uses_minimal_parentheses() {
    let expr = Expr::Mul(bx(Expr::Add(num(1.0), num(2.0))), num(3.0));
    assert_eq!(expr.to_string(), "(1 + 2) × 3");

    let expr = Expr::Sub(num(6.0), bx(Expr::Sub(num(2.0), num(1.0))));
    assert_eq!(expr.to_string(), "6 - (2 - 1)");

    let expr = Expr::Div(num(8.0), bx(Expr::Sub(num(3.0), bx(Expr::Div(num(8.0), num(3.0))))));
    assert_eq!(expr.to_string(), "8 ÷ (3 - 8 ÷ 3)");

    let expr = Expr::Add(bx(Expr::Mul(num(4.0), num(5.0))), num(4.0));
    assert_eq!(expr.to_string(), "4 × 5 + 4");
}

#[test]
fn test_crate_facade_solves() {
    let solutions = crate::solve([3, 8, 1, 1]);
    assert!(!solutions.is_empty());
}
