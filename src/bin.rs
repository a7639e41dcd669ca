use chrono::{NaiveDate, Utc};
use clap::Parser;
use lazy_static::lazy_static;
use sopa_core::board::{generate_board_with_config, render_board, BoardError};
use sopa_core::level_config::LevelConfig;
use sopa_core::validator::verify_board;
use sopa_core::word_list::{load_word_list, parse_word_list, WordListError};
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::time::Instant;

const DEMO_WORDS_RAW: &str = include_str!("../resources/demo_words.txt");

lazy_static! {
    static ref DEMO_WORDS: Vec<String> = parse_word_list(DEMO_WORDS_RAW);
}

/// sopa_core: Command-line word-search board generation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a word-list file, one word per line [default: (embedded demo list)]
    words_path: Option<PathBuf>,

    /// Board height in rows
    #[arg(long, default_value_t = 12)]
    height: usize,

    /// Board width in columns
    #[arg(long, default_value_t = 12)]
    width: usize,

    /// Level number selecting the placement strategy and shuffle method
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Generate for this date (YYYY-MM-DD) instead of today, to reproduce a board
    #[arg(long)]
    date: Option<String>,

    /// Scan the finished grid and warn about any requested word that isn't findable
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Print timing information along with the board
    #[arg(short, long, default_value_t = false)]
    time: bool,
}

// Custom Error struct for more context
struct AppError(String);

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}", self.0)
    }
}

impl From<WordListError> for AppError {
    fn from(err: WordListError) -> Self {
        AppError(err.to_string())
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        AppError(err.to_string())
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let words = match &args.words_path {
        Some(path) => load_word_list(path)?,
        None => DEMO_WORDS.clone(),
    };
    if words.is_empty() {
        return Err(AppError("word list is empty".into()));
    }

    let date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|err| AppError(format!("invalid --date {raw:?}: {err}")))?,
        None => Utc::now().date_naive(),
    };

    let config = LevelConfig::resolve_on(args.level, date);

    let start_time = Instant::now();
    let data = generate_board_with_config(args.height, args.width, &words, &config)?;
    let generation_time = start_time.elapsed();

    println!("{}", render_board(&data));
    println!();
    for placed in &data.placed_words {
        println!(
            "{:<12} ({}, {}) {}",
            placed.word, placed.start_row, placed.start_col, placed.direction
        );
    }

    if !data.skipped_words.is_empty() {
        eprintln!(
            "{} word(s) not placed: {}",
            data.skipped_words.len(),
            data.skipped_words.join(", ")
        );
    }
    let rate = data.stats.placement_rate();
    if rate < 1.0 {
        eprintln!("placement rate: {:.0}%", rate * 100.0);
    }

    if args.verify {
        let report = verify_board(&data.board, &words);
        for word in report.missing() {
            // Missing words can legitimately happen when placement skipped
            // them; the board is still playable with what was placed.
            eprintln!("warning: {word} is not findable in the grid");
        }
    }

    if args.time {
        eprintln!(
            "{generation_time:?} generating {}x{} board, strategy {}, shuffle {}",
            args.height,
            args.width,
            config.strategy.name(),
            config.shuffle_method.name()
        );
    }

    Ok(())
}
