//! make24 - An engine for the "24 point" arithmetic puzzle
//!
//! This library generates guaranteed-solvable sets of four numbers, lets a
//! caller incrementally build an arithmetic expression from typed tokens,
//! evaluates the expression under standard precedence, and tracks session
//! progression (score, streak, level, persisted statistics).
//!
//! The engine is pure state plus pure functions: no rendering, no
//! networking, no ambient global state. A host (UI or test harness) owns a
//! [`GameSession`] and drives it through discrete events.

pub mod eval;
pub mod expression;
pub mod puzzle;
pub mod session;
pub mod solver;

// Re-export the main public API
pub use eval::{Evaluation, evaluate, format_value};
pub use expression::{BuildError, ExpressionBuilder, Op, Token};
pub use puzzle::{Difficulty, Puzzle, PuzzleGenerator};
pub use session::{Feedback, GameSession, Phase, SessionStats, Severity, StatsStore};
pub use solver::{Solution, SolutionFinder};

/// Find up to five example expressions that make 24 from the given numbers
///
/// This is a convenience function that creates a default solver and runs
/// both the pattern tier and the exhaustive search.
///
/// An empty result means no solution was verified for this set.
///
/// # Examples
///
/// ```
/// use make24::solve;
///
/// let solutions = solve([3, 8, 1, 1]);
/// assert!(!solutions.is_empty());
///
/// assert!(solve([1, 1, 1, 1]).is_empty());
/// ```
pub fn solve(numbers: [i32; 4]) -> Vec<Solution> {
    let finder = SolutionFinder::new();
    finder.find_solutions(numbers)
}
