use crate::puzzle::difficulty::Difficulty;
use crate::puzzle::fallback::FALLBACK_SETS;
use crate::puzzle::generator::PuzzleGenerator;
use crate::solver::SolutionFinder;

fn sorted(mut numbers: [i32; 4]) -> [i32; 4] {
    numbers.sort_unstable();
    numbers
}

#[test]
fn test_difficulty_ranges() {
    assert_eq!(Difficulty::Easy.range(), 1..=8);
    assert_eq!(Difficulty::Medium.range(), 1..=9);
    assert_eq!(Difficulty::Hard.range(), 1..=13);
}

#[test]
fn test_generated_puzzles_are_always_solvable() {
    let generator = PuzzleGenerator::new();
    let finder = SolutionFinder::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for _ in 0..10 {
            let puzzle = generator.generate(difficulty);
            assert!(
                finder.is_solvable(puzzle.numbers()),
                "unsolvable {:?} at {}",
                puzzle.numbers(),
                difficulty
            );
            assert_eq!(puzzle.difficulty(), difficulty);
        }
    }
}

#[test]
fn test_generated_numbers_stay_in_range() {
    let generator = PuzzleGenerator::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let range = difficulty.range();
        for _ in 0..10 {
            let puzzle = generator.generate(difficulty);
            for value in puzzle.numbers() {
                assert!(range.contains(&value), "{} outside {:?}", value, range);
            }
        }
    }
}

#[test]
fn test_generated_numbers_prefer_distinct_values() {
    // Every difficulty range holds at least four distinct values, so the
    // shuffled-pool draw always yields a duplicate-free tuple.
    let generator = PuzzleGenerator::new();
    for _ in 0..10 {
        let numbers = generator.generate(Difficulty::Easy).numbers();
        let s = sorted(numbers);
        assert!(s.windows(2).all(|w| w[0] != w[1]), "duplicates in {:?}", s);
    }
}

#[test]
fn test_zero_retry_budget_falls_back_to_fixed_table() {
    let generator = PuzzleGenerator::with_retry_budget(0);
    for _ in 0..10 {
        let puzzle = generator.generate(Difficulty::Medium);
        let candidate = sorted(puzzle.numbers());
        assert!(
            FALLBACK_SETS.iter().any(|entry| sorted(*entry) == candidate),
            "{:?} is not a fallback set",
            puzzle.numbers()
        );
    }
}

#[test]
fn test_every_fallback_entry_is_solvable() {
    let finder = SolutionFinder::new();
    for entry in FALLBACK_SETS {
        assert!(finder.is_solvable(entry), "fallback {:?} unsolvable", entry);
    }
}

#[test]
fn test_puzzle_caches_a_hint_solution() {
    let generator = PuzzleGenerator::new();
    let puzzle = generator.generate(Difficulty::Easy);
    assert!(!puzzle.solution().text().is_empty());
}
