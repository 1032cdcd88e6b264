//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the counters,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! session loop only sees the `InputSource` and `FrameSink` traits.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on `event::read()` and draws once
//! per input. Terminal resizes arrive as `Action::Redraw`.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::error::SessionError;
use crate::core::session::{FrameSink, Outcome, Session, View};

pub use event::{CrosstermInput, map_key};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes let a lone Esc arrive without waiting
        // for a possible sequence; terminals that don't know the protocol ignore it
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Draws each frame to the real terminal.
struct TerminalSink {
    terminal: DefaultTerminal,
}

impl FrameSink for TerminalSink {
    fn draw(&mut self, view: &View<'_>) -> std::io::Result<()> {
        self.terminal.draw(|f| ui::draw_ui(f, view))?;
        Ok(())
    }
}

/// Run one session in the terminal and restore it afterwards, whatever happens.
pub fn run(session: Session) -> Result<Outcome, SessionError> {
    let terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_terminal_mode_guard) => {
            let mut sink = TerminalSink { terminal };
            session.run(&mut CrosstermInput, &mut sink)
        }
        Err(e) => Err(SessionError::Render(e)),
    };
    ratatui::restore();
    result
}
