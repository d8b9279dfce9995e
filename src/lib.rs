//! # Flip
//!
//! A terminal memory matching game. A grid of face-down cards hides pairs of
//! numbers; flip two at a time, matched pairs stay revealed, and the board is
//! cleared when every pair is found.
//!
//! The crate splits into a pure game core and a terminal shell:
//! - [`board`]: the complete game state machine (deal, flip, match, win),
//!   free of terminal types and driven by explicit clock instants;
//! - [`rng`]: the seedable shuffle behind each deal;
//! - [`app`]: application state tying the board to a cursor and quit flag;
//! - [`tui`]: Ratatui rendering, keyboard and mouse handling.

pub mod app;
pub mod board;
pub mod rng;
pub mod tui;

pub use app::App;
pub use board::{compute_won, Board, Card, FlipOutcome};
pub use board::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, MISMATCH_DELAY};
pub use rng::DealRng;
