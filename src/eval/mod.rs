//! Total evaluation of token sequences produced by the expression builder

mod core;
mod errors;

pub use core::{Evaluation, evaluate, format_value};
pub use errors::EvalError;

#[cfg(test)]
mod tests;
