use log::{info, warn};

use crate::eval::{Evaluation, format_value};
use crate::expression::{ExpressionBuilder, Op, Token};
use crate::puzzle::{Difficulty, PuzzleGenerator};
use crate::session::feedback::Feedback;
use crate::session::stats::SessionStats;
use crate::session::store::StatsStore;
use crate::solver::constants::{EPSILON, TARGET};
use crate::solver::{Solution, SolutionFinder};

/// Lifecycle of a round
///
/// `Won` is terminal: the engine never auto-starts the next round, the
/// host must ask for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Building,
    Won,
}

#[derive(Debug)]
struct Round {
    builder: ExpressionBuilder,
    solution: Option<Solution>,
    difficulty: Difficulty,
    evaluation: Evaluation,
}

/// Orchestrates rounds: puzzle creation, win detection, scoring, hints,
/// and write-through persistence of [`SessionStats`]
///
/// The host owns the single instance and drives it through discrete
/// events; there is no hidden process-wide state.
pub struct GameSession {
    generator: PuzzleGenerator,
    finder: SolutionFinder,
    store: Box<dyn StatsStore>,
    stats: SessionStats,
    phase: Phase,
    round: Option<Round>,
}

impl GameSession {
    /// Create a session, loading prior stats from the store
    ///
    /// Missing or unparsable persisted data falls back to default zeroed
    /// stats rather than failing.
    pub fn new(mut store: Box<dyn StatsStore>) -> Self {
        let stats = store.load().unwrap_or_default();
        info!(
            "Session started at level {} with {} points",
            stats.level, stats.score
        );
        Self {
            generator: PuzzleGenerator::new(),
            finder: SolutionFinder::new(),
            store,
            stats,
            phase: Phase::Idle,
            round: None,
        }
    }

    /// Start a fresh round at the given difficulty
    pub fn new_round(&mut self, difficulty: Difficulty) -> Feedback {
        let puzzle = self.generator.generate(difficulty);
        self.round = Some(Round {
            builder: ExpressionBuilder::new(puzzle.numbers()),
            solution: Some(puzzle.solution().clone()),
            difficulty,
            evaluation: Evaluation::Incomplete,
        });
        self.phase = Phase::Building;
        Feedback::info(format!("New {} round: make 24", difficulty))
    }

    /// Start a round from explicit numbers (replays and tests)
    ///
    /// The hint solution is looked up on the spot; an unsolvable set
    /// simply has no hint.
    pub fn start_round_with(&mut self, numbers: [i32; 4], difficulty: Difficulty) -> Feedback {
        let solution = self.finder.find_solutions(numbers).into_iter().next();
        if solution.is_none() {
            warn!("Starting round with unverified set {:?}", numbers);
        }
        self.round = Some(Round {
            builder: ExpressionBuilder::new(numbers),
            solution,
            difficulty,
            evaluation: Evaluation::Incomplete,
        });
        self.phase = Phase::Building;
        Feedback::info(format!("New {} round: make 24", difficulty))
    }

    /// Select the card at `card` for the expression
    pub fn select_card(&mut self, card: usize) -> Feedback {
        match self.guard_building() {
            Ok(round) => match round.builder.add_number(card) {
                Ok(()) => self.after_edit(),
                Err(e) => Feedback::warning(e.to_string()),
            },
            Err(feedback) => feedback,
        }
    }

    /// Append an operator or parenthesis to the expression
    pub fn select_operator(&mut self, op: Op) -> Feedback {
        match self.guard_building() {
            Ok(round) => match round.builder.add_operator(op) {
                Ok(()) => self.after_edit(),
                Err(e) => Feedback::warning(e.to_string()),
            },
            Err(feedback) => feedback,
        }
    }

    /// Remove the last token
    pub fn undo(&mut self) -> Feedback {
        match self.guard_building() {
            Ok(round) => {
                if round.builder.undo() {
                    self.after_edit()
                } else {
                    Feedback::info("Nothing to undo")
                }
            }
            Err(feedback) => feedback,
        }
    }

    /// Reset the expression, returning all cards to the tray
    pub fn clear(&mut self) -> Feedback {
        match self.guard_building() {
            Ok(round) => {
                round.builder.clear();
                round.evaluation = Evaluation::Incomplete;
                Feedback::info("Expression cleared")
            }
            Err(feedback) => feedback,
        }
    }

    /// Manual check of the current expression
    ///
    /// Wins are detected automatically after every edit, so a submit
    /// while still building is a miss: the streak resets and the round
    /// counts as played. The round itself stays open.
    pub fn submit(&mut self) -> Feedback {
        match self.phase {
            Phase::Idle => Feedback::warning("No active round"),
            Phase::Won => Feedback::success("Round already won"),
            Phase::Building => {
                let value = self.round.as_ref().and_then(|r| r.evaluation.value());
                self.stats.record_miss();
                self.persist();
                match value {
                    Some(v) => {
                        Feedback::warning(format!("{} is not 24 - streak reset", format_value(v)))
                    }
                    None => Feedback::warning("Expression incomplete - streak reset"),
                }
            }
        }
    }

    /// Reveal the round's cached example solution for 5 points
    ///
    /// The cost is floored at zero and leaves streak and level alone.
    /// Returns `None` (and charges nothing) when there is no active round
    /// or no cached solution.
    pub fn hint(&mut self) -> Option<Solution> {
        if self.phase != Phase::Building {
            return None;
        }
        let solution = self.round.as_ref()?.solution.clone()?;
        self.stats.charge_hint();
        self.persist();
        Some(solution)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(|r| r.difficulty)
    }

    /// Card values and used flags of the current round
    pub fn cards(&self) -> Option<[(i32, bool); 4]> {
        self.round.as_ref().map(|r| {
            let values = r.builder.values();
            let used = r.builder.used();
            std::array::from_fn(|i| (values[i], used[i]))
        })
    }

    pub fn tokens(&self) -> &[Token] {
        self.round.as_ref().map_or(&[], |r| r.builder.tokens())
    }

    pub fn expression_text(&self) -> String {
        self.round
            .as_ref()
            .map(|r| r.builder.to_string())
            .unwrap_or_default()
    }

    /// The current evaluated value rendered for display, when complete
    pub fn display_value(&self) -> Option<String> {
        self.round.as_ref()?.evaluation.value().map(format_value)
    }

    fn guard_building(&mut self) -> Result<&mut Round, Feedback> {
        match self.phase {
            Phase::Idle => Err(Feedback::warning("No active round")),
            Phase::Won => Err(Feedback::warning(
                "Round already won - start a new round",
            )),
            Phase::Building => match self.round.as_mut() {
                Some(round) => Ok(round),
                None => Err(Feedback::warning("No active round")),
            },
        }
    }

    /// Re-evaluate after a mutation and promote to `Won` when the value
    /// is within tolerance of 24 with all four cards in play.
    fn after_edit(&mut self) -> Feedback {
        let (evaluation, used_count) = match self.round.as_mut() {
            Some(round) => {
                round.evaluation = round.builder.evaluate();
                (round.evaluation, round.builder.used_count())
            }
            None => return Feedback::warning("No active round"),
        };

        if let Evaluation::Value(value) = evaluation
            && (value - TARGET).abs() < EPSILON
            && used_count == 4
        {
            self.phase = Phase::Won;
            let before = self.stats.score;
            self.stats.record_win();
            let earned = self.stats.score - before;
            self.persist();
            info!(
                "Round won; streak {}, level {}",
                self.stats.streak, self.stats.level
            );
            return Feedback::success(format!("24! You earned {} points", earned));
        }

        match evaluation {
            Evaluation::Value(value) => {
                Feedback::info(format!("Current value: {}", format_value(value)))
            }
            Evaluation::Incomplete => Feedback::info("Keep going"),
        }
    }

    fn persist(&mut self) {
        self.store.save(&self.stats);
    }
}
