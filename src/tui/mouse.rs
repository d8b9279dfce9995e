//! # Mouse Module
//!
//! Mouse handling: left clicks flip the card under the pointer or press the
//! reset button. Geometry comes from [`crate::tui::layout`], so the click
//! targets line up with what rendering draws.

use crate::app::App;
use crate::tui::layout;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handle mouse events for the application.
pub fn handle_mouse_event(
    app: &mut App,
    kind: MouseEventKind,
    col: u16,
    row: u16,
    terminal_size: Rect,
) {
    if let MouseEventKind::Down(MouseButton::Left) = kind {
        handle_mouse_click(app, col, row, terminal_size);
    }
}

fn handle_mouse_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    let regions = layout::screen_layout(terminal_size);

    let (button_area, _) = layout::controls_layout(regions.controls);
    if layout::hit(button_area, col, row) {
        app.reset_game();
        return;
    }

    let grid = layout::grid_area(regions.board);
    if let Some(id) = layout::cell_at(
        grid,
        app.board.grid_size(),
        app.board.cards().len(),
        col,
        row,
    ) {
        // Keep the keyboard cursor on the clicked card.
        let size = app.board.grid_size();
        app.board_cursor = ((id / size) as u16, (id % size) as u16);
        app.flip_card(id);
    }
}
