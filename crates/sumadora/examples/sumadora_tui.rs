//! Sumadora TUI
//!
//! The on-screen calculator: keys and mouse clicks activate the pictured
//! buttons.
//!
//! Run with: cargo run --example sumadora_tui

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use sumadora::tui::{keypad_area, render, CalculatorApp, InputHandler, KeyAction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                KeyAction::Press(kind) => app.press(kind),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let pad = keypad_area(Rect::new(0, 0, size.width, size.height));
                    if pad.width > 0
                        && mouse.column >= pad.x
                        && mouse.row >= pad.y
                        && mouse.column < pad.x + pad.width
                        && mouse.row < pad.y + pad.height
                    {
                        app.click(
                            pad.width,
                            pad.height,
                            mouse.column - pad.x,
                            mouse.row - pad.y,
                        );
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}
