//! # Input Handling Module
//!
//! Keyboard handling. Mouse events are handled in [`crate::tui::mouse`].
//!
//! The board itself decides whether a flip is allowed (locked, won, missing
//! cell); keys are translated into application actions unconditionally.

use crate::app::App;
use crossterm::event::KeyCode;

/// Routes a key press to the matching application action.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `key_code` - The key that was pressed
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('r') => app.reset_game(),
        KeyCode::Up => app.move_cursor_up(),
        KeyCode::Down => app.move_cursor_down(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.flip_at_cursor(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_grid_size(),
        KeyCode::Char('-') => app.decrease_grid_size(),
        // Digits jump straight to that grid size; out-of-range digits are
        // silently ignored, same as every other size input.
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.set_grid_size(c as usize - '0' as usize);
        }
        _ => {}
    }
}
