//! # Application State
//!
//! [`App`] sits between the board state machine and the terminal UI. It owns
//! the [`Board`], the keyboard cursor, and the quit flag, and translates UI
//! actions (flip here, grow the grid, re-deal) into board operations. All
//! game rules live in [`crate::board`]; this layer adds the cursor, the
//! per-frame clock tick, and logging.

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, FlipOutcome};

/// Central application state shared by the event loop, input handling, and
/// rendering.
pub struct App {
    /// Set by input handling to end the event loop.
    pub should_quit: bool,
    /// The game itself.
    pub board: Board,
    /// Keyboard cursor position on the grid as (row, col).
    pub board_cursor: (u16, u16),
}

impl App {
    pub fn new(board: Board) -> Self {
        if let Some(seed) = board.seed() {
            info!(seed, grid_size = board.grid_size(), "seeded game started");
        } else {
            info!(grid_size = board.grid_size(), "game started");
        }
        Self {
            should_quit: false,
            board,
            board_cursor: (0, 0),
        }
    }

    /// Per-frame update: lets the board flip an expired mismatch back over.
    pub fn update(&mut self) {
        self.board.tick(Instant::now());
    }

    /// Flips the card under the keyboard cursor.
    pub fn flip_at_cursor(&mut self) {
        let (row, col) = self.board_cursor;
        let id = row as usize * self.board.grid_size() + col as usize;
        self.flip_card(id);
    }

    /// Flips the card at `id` and logs what happened.
    pub fn flip_card(&mut self, id: usize) {
        let outcome = self.board.handle_click(id, Instant::now());
        match outcome {
            FlipOutcome::Rejected => {}
            FlipOutcome::Matched if self.board.is_won() => {
                info!(moves = self.board.move_count(), "board cleared");
            }
            FlipOutcome::Mismatched => {
                debug!(id, moves = self.board.move_count(), "mismatch, flipping back soon");
            }
            _ => {
                debug!(id, ?outcome, "card flipped");
            }
        }
    }

    /// Re-deals the current grid size. Same action before and after a win.
    pub fn reset_game(&mut self) {
        self.board.deal();
        self.clamp_cursor();
        info!(grid_size = self.board.grid_size(), "board re-dealt");
    }

    /// Grows the grid by one step; ignored at the maximum size.
    pub fn increase_grid_size(&mut self) {
        self.change_grid_size(self.board.grid_size() + 1);
    }

    /// Shrinks the grid by one step; ignored at the minimum size.
    pub fn decrease_grid_size(&mut self) {
        self.change_grid_size(self.board.grid_size().saturating_sub(1));
    }

    /// Sets the grid size directly (digit keys). Out-of-range values are
    /// silently ignored by the board.
    pub fn set_grid_size(&mut self, size: usize) {
        self.change_grid_size(size);
    }

    fn change_grid_size(&mut self, size: usize) {
        let before = self.board.grid_size();
        self.board.set_grid_size(size);
        if self.board.grid_size() != before {
            self.clamp_cursor();
            info!(grid_size = self.board.grid_size(), "grid size changed");
        }
    }

    // Cursor movement. The last row of an odd-sized grid is short one cell
    // (the unpaired slot is never dealt), so bounds checks go through
    // cursor_valid rather than the grid size alone.

    pub fn move_cursor_up(&mut self) {
        let (row, col) = self.board_cursor;
        if row > 0 {
            self.board_cursor = (row - 1, col);
        }
    }

    pub fn move_cursor_down(&mut self) {
        let (row, col) = self.board_cursor;
        if self.cursor_valid(row + 1, col) {
            self.board_cursor = (row + 1, col);
        }
    }

    pub fn move_cursor_left(&mut self) {
        let (row, col) = self.board_cursor;
        if col > 0 {
            self.board_cursor = (row, col - 1);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let (row, col) = self.board_cursor;
        if self.cursor_valid(row, col + 1) {
            self.board_cursor = (row, col + 1);
        }
    }

    /// Whether (row, col) lands on a dealt card.
    fn cursor_valid(&self, row: u16, col: u16) -> bool {
        let size = self.board.grid_size();
        (row as usize) < size
            && (col as usize) < size
            && row as usize * size + (col as usize) < self.board.cards().len()
    }

    /// Pulls the cursor back onto a dealt card after the grid changes.
    fn clamp_cursor(&mut self) {
        let (mut row, mut col) = self.board_cursor;
        let max = (self.board.grid_size() - 1) as u16;
        row = row.min(max);
        col = col.min(max);
        while !self.cursor_valid(row, col) && col > 0 {
            col -= 1;
        }
        self.board_cursor = (row, col);
    }
}
