//! # Layout Module
//!
//! Screen layout and board geometry. Rendering and mouse hit-testing both
//! go through the functions here, so a card is clickable exactly where it is
//! drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Horizontal stride of one card cell: four glyph columns plus a gap.
pub const CELL_WIDTH: u16 = 5;
/// Vertical stride of one card cell: the card row plus a spacer row.
pub const CELL_HEIGHT: u16 = 2;
/// Width of the card glyph itself (the part that accepts clicks).
pub const CELL_GLYPH_WIDTH: u16 = 4;

/// The five vertical regions of the screen, top to bottom.
pub struct ScreenLayout {
    pub header: Rect,
    pub status: Rect,
    pub board: Rect,
    pub banner: Rect,
    pub controls: Rect,
}

/// Splits the terminal area into the fixed screen regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header: title + subtitle
            Constraint::Length(1), // status: grid size + move count
            Constraint::Min(6),    // board
            Constraint::Length(1), // win banner
            Constraint::Length(3), // reset button + key hints
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        status: chunks[1],
        board: chunks[2],
        banner: chunks[3],
        controls: chunks[4],
    }
}

/// Splits the controls region into the reset button and the key hints.
pub fn controls_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// The area inside the board block's border where the grid is drawn.
pub fn grid_area(board: Rect) -> Rect {
    Rect {
        x: board.x + 1,
        y: board.y + 1,
        width: board.width.saturating_sub(2),
        height: board.height.saturating_sub(2),
    }
}

/// Maps a terminal position to the id of the card drawn there.
///
/// Returns `None` for the gaps between cards, positions past the grid, and
/// the undealt slot of an odd-sized grid.
pub fn cell_at(
    grid: Rect,
    grid_size: usize,
    deck_len: usize,
    col: u16,
    row: u16,
) -> Option<usize> {
    if !hit(grid, col, row) {
        return None;
    }
    let dx = col - grid.x;
    let dy = row - grid.y;
    if dx % CELL_WIDTH >= CELL_GLYPH_WIDTH || dy % CELL_HEIGHT != 0 {
        return None;
    }
    let c = (dx / CELL_WIDTH) as usize;
    let r = (dy / CELL_HEIGHT) as usize;
    if r >= grid_size || c >= grid_size {
        return None;
    }
    let id = r * grid_size + c;
    (id < deck_len).then_some(id)
}

/// Whether a terminal position falls inside a rectangle.
pub fn hit(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
