use std::fmt;
use std::ops::RangeInclusive;

/// Difficulty levels, each mapping to an inclusive card-value range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The inclusive range card values are drawn from
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 1..=8,
            Difficulty::Medium => 1..=9,
            Difficulty::Hard => 1..=13,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}
