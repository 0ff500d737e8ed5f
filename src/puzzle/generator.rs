use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::puzzle::difficulty::Difficulty;
use crate::puzzle::fallback::FALLBACK_SETS;
use crate::solver::{Solution, SolutionFinder};

const MAX_RETRIES: usize = 200;

/// An accepted round: four solvable numbers plus one cached example
/// solution for the hint feature
#[derive(Debug, Clone)]
pub struct Puzzle {
    numbers: [i32; 4],
    solution: Solution,
    difficulty: Difficulty,
}

impl Puzzle {
    pub fn numbers(&self) -> [i32; 4] {
        self.numbers
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Produces solvable 4-tuples within a difficulty-dependent range
///
/// Generation never fails: candidates are validated with the solver and
/// retried up to the budget; exhausting the budget falls back to a fixed
/// table of known-solvable sets, keeping the game always playable.
pub struct PuzzleGenerator {
    finder: SolutionFinder,
    retry_budget: usize,
}

impl PuzzleGenerator {
    /// Create a generator with the default retry budget
    pub fn new() -> Self {
        Self::with_retry_budget(MAX_RETRIES)
    }

    /// Create a generator with an explicit retry budget
    ///
    /// A budget of zero forces every round onto the fallback table, which
    /// is useful for deterministic tests.
    pub fn with_retry_budget(retry_budget: usize) -> Self {
        Self {
            finder: SolutionFinder::new(),
            retry_budget,
        }
    }

    /// Generate a solvable 4-tuple for the given difficulty
    pub fn generate(&self, difficulty: Difficulty) -> Puzzle {
        let mut rng = rand::thread_rng();

        for attempt in 0..self.retry_budget {
            let candidate = draw(&mut rng, difficulty);
            if self.finder.is_solvable(candidate) {
                debug!(
                    "Accepted {:?} for {} after {} attempt(s)",
                    candidate,
                    difficulty,
                    attempt + 1
                );
                if let Some(puzzle) = self.accept(&mut rng, candidate, difficulty) {
                    return puzzle;
                }
            }
        }

        warn!(
            "Retry budget of {} exhausted for {}; using fallback table",
            self.retry_budget, difficulty
        );
        self.fallback(&mut rng, difficulty)
    }

    /// Shuffle the accepted tuple (card order is cosmetic) and cache one
    /// verified solution for hints.
    fn accept<R: Rng>(
        &self,
        rng: &mut R,
        mut numbers: [i32; 4],
        difficulty: Difficulty,
    ) -> Option<Puzzle> {
        numbers.shuffle(rng);
        let solution = self.finder.find_solutions(numbers).into_iter().next()?;
        info!("New {} puzzle: {:?}", difficulty, numbers);
        Some(Puzzle {
            numbers,
            solution,
            difficulty,
        })
    }

    fn fallback<R: Rng>(&self, rng: &mut R, difficulty: Difficulty) -> Puzzle {
        let offset = rng.gen_range(0..FALLBACK_SETS.len());
        for i in 0..FALLBACK_SETS.len() {
            let entry = FALLBACK_SETS[(offset + i) % FALLBACK_SETS.len()];
            if let Some(puzzle) = self.accept(rng, entry, difficulty) {
                return puzzle;
            }
        }
        // Every table entry is verified solvable, so this is unreachable
        // in practice; keep the operation total regardless.
        Puzzle {
            numbers: FALLBACK_SETS[0],
            solution: Solution::new("1 × 2 × 3 × 4"),
            difficulty,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a candidate 4-tuple for one attempt
///
/// Prefers duplicate-free tuples: when the range holds at least four
/// distinct values, take the first four of a shuffled pool. Narrower
/// ranges sample with duplicates from a bias-adjusted distribution (mean
/// of two uniform draws, concentrating mass toward the range center).
fn draw<R: Rng>(rng: &mut R, difficulty: Difficulty) -> [i32; 4] {
    let range = difficulty.range();
    let mut pool: Vec<i32> = range.clone().collect();
    pool.shuffle(rng);

    if pool.len() >= 4 {
        let mut numbers = [0; 4];
        numbers.copy_from_slice(&pool[..4]);
        return numbers;
    }

    let (lo, hi) = (*range.start(), *range.end());
    let mut numbers = [0; 4];
    for slot in &mut numbers {
        let a = rng.gen_range(lo..=hi);
        let b = rng.gen_range(lo..=hi);
        *slot = ((f64::from(a) + f64::from(b)) / 2.0).round() as i32;
    }
    numbers
}
