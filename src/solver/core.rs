use std::fmt;

use log::{debug, info};
use rayon::prelude::*;

use crate::solver::ast::Expr;
use crate::solver::constants::{EPSILON, MAX_SOLUTIONS, TARGET};
use crate::solver::patterns::pattern_candidates;

/// A human-readable example expression that makes 24
///
/// Cached on the round for the hint feature; not executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    text: String,
}

impl Solution {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Main solver for deciding whether four numbers can make 24
pub struct SolutionFinder {}

impl SolutionFinder {
    /// Create a new solution finder
    pub fn new() -> Self {
        Self {}
    }

    /// Find up to five example solutions for the given numbers
    ///
    /// Runs the pattern tier against the numbers in their given order,
    /// then the exhaustive tier (all permutations, operator assignments,
    /// and parenthesization shapes). Results are deduplicated by rendered
    /// text. An empty result means no solution was verified.
    pub fn find_solutions(&self, numbers: [i32; 4]) -> Vec<Solution> {
        let values = numbers.map(f64::from);
        let mut solutions: Vec<Solution> = Vec::new();

        for expr in pattern_candidates(&values) {
            if hits_target(&expr) {
                push_unique(&mut solutions, &expr);
            }
        }
        debug!(
            "Pattern tier found {} solution(s) for {:?}",
            solutions.len(),
            numbers
        );

        'search: for perm in permutations(values) {
            for expr in tree_candidates(&perm) {
                if solutions.len() >= MAX_SOLUTIONS {
                    break 'search;
                }
                if hits_target(&expr) {
                    push_unique(&mut solutions, &expr);
                }
            }
        }

        solutions.truncate(MAX_SOLUTIONS);
        info!("Found {} solution(s) for {:?}", solutions.len(), numbers);
        solutions
    }

    /// Decide solvability with an early exit, without building strings
    pub fn is_solvable(&self, numbers: [i32; 4]) -> bool {
        let values = numbers.map(f64::from);

        if pattern_candidates(&values).iter().any(hits_target) {
            return true;
        }

        permutations(values)
            .into_par_iter()
            .any(|perm| tree_candidates(&perm).iter().any(hits_target))
    }
}

impl Default for SolutionFinder {
    fn default() -> Self {
        Self::new()
    }
}

fn hits_target(expr: &Expr) -> bool {
    matches!(expr.evaluate(), Ok(value) if (value - TARGET).abs() < EPSILON)
}

fn push_unique(solutions: &mut Vec<Solution>, expr: &Expr) {
    let text = expr.to_string();
    if !solutions.iter().any(|s| s.text() == text) {
        solutions.push(Solution::new(text));
    }
}

/// All 24 orderings of the four values (duplicates included as-is)
fn permutations(values: [f64; 4]) -> Vec<[f64; 4]> {
    let mut result = Vec::with_capacity(24);
    for i in 0..4 {
        for j in 0..4 {
            if j == i {
                continue;
            }
            for k in 0..4 {
                if k == i || k == j {
                    continue;
                }
                let l = 6 - i - j - k;
                result.push([values[i], values[j], values[k], values[l]]);
            }
        }
    }
    result
}

type BinOp = fn(Box<Expr>, Box<Expr>) -> Expr;

const OPS: [BinOp; 4] = [Expr::Add, Expr::Sub, Expr::Mul, Expr::Div];

fn num(value: f64) -> Box<Expr> {
    Box::new(Expr::Num(value))
}

fn bx(expr: Expr) -> Box<Expr> {
    Box::new(expr)
}

/// Every expression over one ordering of the four values: 4^3 operator
/// triples applied to the five binary-tree shapes of four leaves.
fn tree_candidates(perm: &[f64; 4]) -> Vec<Expr> {
    let [a, b, c, d] = *perm;
    let mut result = Vec::with_capacity(5 * 64);
    for p in OPS {
        for q in OPS {
            for r in OPS {
                // ((a p b) q c) r d
                result.push(r(bx(q(bx(p(num(a), num(b))), num(c))), num(d)));
                // (a p (b q c)) r d
                result.push(r(bx(p(num(a), bx(q(num(b), num(c))))), num(d)));
                // a p ((b q c) r d)
                result.push(p(num(a), bx(r(bx(q(num(b), num(c))), num(d)))));
                // a p (b q (c r d))
                result.push(p(num(a), bx(q(num(b), bx(r(num(c), num(d)))))));
                // (a p b) q (c r d)
                result.push(q(bx(p(num(a), num(b))), bx(r(num(c), num(d)))));
            }
        }
    }
    result
}
