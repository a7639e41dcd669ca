//! `sopa_core` generates word-search boards: given a board shape, a word list,
//! and a level number, it places every word it can on the grid (horizontally,
//! vertically, or diagonally), fills the rest with random letters, and reports
//! exactly which words landed where. Generation is deterministic given a level
//! and a calendar date, so the same level produces the same board all day and
//! a fresh one tomorrow.

pub mod board;
pub mod level_config;
pub mod placement;
pub mod rng;
pub mod shuffle;
pub mod types;
pub mod util;
pub mod validator;
pub mod word_list;

pub use board::{
    generate_board, generate_board_on, generate_board_with_config, render_board, BoardError,
};
pub use level_config::LevelConfig;
pub use types::{BoardData, Direction, PlacedWord, Position};

/// Whether to run (slow) internal validity checks on generated boards. This
/// is only enabled when the `check_invariants` feature flag is set.
pub const CHECK_INVARIANTS: bool = cfg!(feature = "check_invariants");

/// Words shorter than this are never placed on a board.
pub const MIN_WORD_LENGTH: usize = 3;

/// The expected maximum length of a single placed word; used to size stack
/// allocations for letter positions.
pub const MAX_WORD_LENGTH: usize = 16;

/// The number of levels after which the strategy/shuffle configuration cycle
/// repeats.
pub const LEVEL_CYCLE: usize = 20;
