use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use make24::puzzle::Difficulty;
use make24::session::{Feedback, GameSession, JsonFileStore, Phase, Severity};
use make24::Op;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Difficulty as selected on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// make24 - Play the 24-point arithmetic puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "make24")]
#[command(about = "Combine four numbers with + - × ÷ and parentheses to make 24")]
#[command(version)]
pub struct CliArgs {
    /// Difficulty of generated puzzles
    #[arg(short, long, value_enum, default_value = "medium")]
    pub difficulty: DifficultyArg,

    /// Path of the persisted statistics file
    #[arg(long, default_value = "make24-stats.json")]
    pub stats_file: PathBuf,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the interactive host loop
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let difficulty = Difficulty::from(args.difficulty);
    let store = JsonFileStore::new(args.stats_file);
    let mut session = GameSession::new(Box::new(store));

    info!("Starting interactive session at difficulty {}", difficulty);

    println!("make24 - combine all four numbers to make 24");
    println!("Commands: 1-4 pick a card, + - * / ( ) operators,");
    println!("          u undo, c clear, s submit, h hint, n new round, stats, q quit");
    println!();

    let feedback = session.new_round(difficulty);
    println!("{}", feedback.message);
    print_round(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command {
            "q" | "quit" => break,
            "n" | "new" => {
                let feedback = session.new_round(difficulty);
                println!("{}", feedback.message);
                print_round(&session);
            }
            "u" | "undo" => {
                print_feedback(&session.undo());
                print_round(&session);
            }
            "c" | "clear" => {
                print_feedback(&session.clear());
                print_round(&session);
            }
            "s" | "submit" => {
                print_feedback(&session.submit());
            }
            "h" | "hint" => match session.hint() {
                Some(solution) => println!("Hint (-5 points): {}", solution),
                None => println!("No hint available"),
            },
            "stats" => print_stats(&session),
            _ => handle_token(&mut session, command),
        }

        if session.phase() == Phase::Won {
            print_stats(&session);
            println!("Type n for the next round.");
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

fn handle_token(session: &mut GameSession, command: &str) {
    if let Ok(index) = command.parse::<usize>() {
        if (1..=4).contains(&index) {
            print_feedback(&session.select_card(index - 1));
            print_round(session);
        } else {
            println!("Cards are numbered 1-4");
        }
        return;
    }

    let mut chars = command.chars();
    if let (Some(symbol), None) = (chars.next(), chars.next())
        && let Some(op) = Op::from_symbol(symbol)
    {
        print_feedback(&session.select_operator(op));
        print_round(session);
        return;
    }

    println!("Unknown command: {}", command);
}

fn print_feedback(feedback: &Feedback) {
    match feedback.severity {
        Severity::Warning => println!("! {}", feedback.message),
        _ => println!("{}", feedback.message),
    }
}

fn print_round(session: &GameSession) {
    let Some(cards) = session.cards() else {
        return;
    };

    let tray: Vec<String> = cards
        .iter()
        .enumerate()
        .map(|(i, (value, used))| {
            if *used {
                format!("{}:[--]", i + 1)
            } else {
                format!("{}:[{:>2}]", i + 1, value)
            }
        })
        .collect();

    let value = session.display_value().unwrap_or_else(|| "?".to_string());
    println!(
        "cards {}  expr: {}  = {}",
        tray.join(" "),
        session.expression_text(),
        value
    );
}

fn print_stats(session: &GameSession) {
    let stats = session.stats();
    println!(
        "level {}  score {}  streak {} (best {})  rounds {}/{} won",
        stats.level,
        stats.score,
        stats.streak,
        stats.best_streak,
        stats.successful_rounds,
        stats.total_rounds
    );
}
