//! Generation of guaranteed-solvable number sets

pub mod fallback;

mod difficulty;
mod generator;

pub use difficulty::Difficulty;
pub use generator::{Puzzle, PuzzleGenerator};

#[cfg(test)]
mod tests;
