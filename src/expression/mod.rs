//! Expression module split into submodules for clarity

mod builder;
mod display;
mod errors;
mod token;

pub use builder::ExpressionBuilder;
pub use errors::BuildError;
pub use token::{Op, Token};
