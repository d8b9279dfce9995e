//! # Terminal User Interface Module
//!
//! This module provides the terminal interface for the game, built with the
//! Ratatui library. It handles terminal setup and teardown, the main event
//! loop, and input dispatch.
//!
//! ## Key Components
//! - **Terminal Management**: Initialization and cleanup of raw terminal mode
//! - **Event Loop**: Main application loop handling input and rendering
//! - **Input Processing**: Keyboard and mouse event handling
//! - **Widget Rendering**: The board grid, status line, and controls
//!
//! The loop polls at 100 ms, which doubles as the clock for flipping
//! mismatched pairs back over: every iteration calls [`App::update`] before
//! drawing.

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};

pub mod input;
pub mod layout;
pub mod mouse;
pub mod widgets;

/// Main entry point for the terminal user interface.
///
/// Initializes the terminal, runs the main event loop, and handles cleanup.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
///
/// # Errors
/// Returns an error if terminal initialization, event handling, or cleanup
/// fails.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;

    loop {
        if app.should_quit {
            break;
        }

        app.update();

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect =
                        Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    mouse::handle_mouse_event(
                        app,
                        mouse.kind,
                        mouse.column,
                        mouse.row,
                        terminal_rect,
                    );
                }
                _ => {}
            }
        }
    }

    restore_terminal(&mut terminal)
}

/// Initializes the terminal for raw mode operation.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}
