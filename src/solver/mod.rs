pub mod constants;

mod ast;
mod core;
mod errors;
mod patterns;

pub use ast::Expr;
pub use core::{Solution, SolutionFinder};
pub use errors::ArithmeticError;

#[cfg(test)]
mod tests;
