//! # UI Widgets Module
//!
//! This module contains functions for drawing the different UI components
//! (widgets) on the screen: the header, status line, card grid, win banner,
//! and controls.

use crate::app::App;
use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::tui::layout::{self, CELL_GLYPH_WIDTH};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(app: &App, frame: &mut Frame) {
    let regions = layout::screen_layout(frame.size());

    draw_header(frame, regions.header);
    draw_status(frame, app, regions.status);
    draw_board(frame, app, regions.board);
    draw_banner(frame, app, regions.banner);
    draw_controls(frame, app, regions.controls);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "F L I P",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "a memory game",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(format!(
        "Grid size: {} (min {}, max {})    Moves: {}",
        app.board.grid_size(),
        MIN_SIZE,
        MAX_SIZE,
        app.board.move_count(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner_area = layout::grid_area(area);
    f.render_widget(block, area);

    let size = app.board.grid_size();
    let deck_len = app.board.cards().len();
    let mut board_lines = Vec::new();

    for r in 0..size {
        let mut line_spans = Vec::new();
        for c in 0..size {
            let id = r * size + c;
            if id >= deck_len {
                // The undealt slot of an odd-sized grid.
                line_spans.push(Span::raw(" ".repeat(CELL_GLYPH_WIDTH as usize + 1)));
                continue;
            }
            line_spans.push(card_span(app, id));
            line_spans.push(Span::raw(" "));
        }
        board_lines.push(Line::from(line_spans));
        board_lines.push(Line::from("")); // spacer row
    }

    let paragraph = Paragraph::new(board_lines);
    f.render_widget(paragraph, inner_area);
}

/// Renders one card as a fixed-width styled span.
///
/// Three mutually exclusive faces: solved (green), revealed but unmatched
/// (blue), and face down (a dim `?`). The keyboard cursor inverts whichever
/// face is under it.
fn card_span(app: &App, id: usize) -> Span<'static> {
    let (row, col) = app.board_cursor;
    let size = app.board.grid_size();
    let is_cursor = row as usize * size + col as usize == id;

    let (face, style) = if app.board.is_revealed(id) {
        let value = app.board.cards()[id].value;
        if app.board.is_solved(id) {
            (format!(" {:>2} ", value), Style::default().fg(Color::White).bg(Color::Green))
        } else {
            (format!(" {:>2} ", value), Style::default().fg(Color::White).bg(Color::Blue))
        }
    } else {
        (" ?  ".to_string(), Style::default().fg(Color::Gray).bg(Color::DarkGray))
    };

    let style = if is_cursor {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    };
    Span::styled(face, style)
}

fn draw_banner(f: &mut Frame, app: &App, area: Rect) {
    if !app.board.is_won() {
        return;
    }
    let banner = Paragraph::new(Span::styled(
        "You won!",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let (button_area, hints_area) = layout::controls_layout(area);

    let label = if app.board.is_won() { "Play Again" } else { "Reset" };
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, button_area);

    let hints = Paragraph::new(
        "arrows: move   enter/space: flip   -/+ or 2-8: grid size   r: reset   q: quit",
    )
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(hints, hints_area);
}
